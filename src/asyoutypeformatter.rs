// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use dec_from_char::DecimalExtended;
use log::{trace, warn};

use crate::{
    metadata::Territory,
    phonenumberutil::{
        FormatIntent, PhoneNumberUtil, helper_constants::PLUS_SIGN, phonenumberutil::Result,
    },
};

/// Where a formatting session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatterState {
    /// Nothing typed yet.
    #[default]
    Empty,
    /// Digits are buffered but no format rule covers them; they are shown
    /// as typed.
    Accumulating,
    /// A format rule rendered the buffered number.
    Rendered,
}

/// The part of the buffer a format rule is selected for, plus whatever is
/// shown in front of it.
struct NationalPart<'s, 't> {
    /// `"+44 "` or `"011 44 "` for numbers dialled internationally.
    leading: String,
    territory: &'t Territory,
    digits: &'s str,
    intent: FormatIntent,
}

/// Formats a phone number while it is being typed. Each instance serves one
/// input session; every mutation re-derives the rendering from the whole
/// buffer, so the output depends only on what is buffered.
pub struct AsYouTypeFormatter<'a> {
    util: &'a PhoneNumberUtil,
    /// Territory assumed for numbers typed without a country calling code.
    default_territory: Option<&'a Territory>,
    /// A leading `+` and ASCII digits, in typing order.
    accrued_input: String,
    current_output: String,
    state: FormatterState,
}

impl<'a> AsYouTypeFormatter<'a> {
    pub fn new(util: &'a PhoneNumberUtil, region_code: &str) -> Self {
        let default_territory = util.territory_index().by_region(region_code);
        if default_territory.is_none() {
            warn!("Unknown default region {region_code}, only numbers typed with + get formatted");
        }
        Self {
            util,
            default_territory,
            accrued_input: String::new(),
            current_output: String::new(),
            state: FormatterState::Empty,
        }
    }

    /// Appends a typed character and returns the new rendering. `+` is only
    /// accepted as the first character; other non-digits are ignored.
    pub fn input_digit(&mut self, next_char: char) -> Result<&str> {
        match normalize_input_char(next_char) {
            Some('+') if self.accrued_input.is_empty() => self.accrued_input.push('+'),
            Some(digit) if digit.is_ascii_digit() => self.accrued_input.push(digit),
            _ => {
                trace!("Ignoring '{next_char}' typed after '{}'", self.accrued_input);
                return Ok(&self.current_output);
            }
        }
        if let Err(err) = self.refresh() {
            self.accrued_input.pop();
            return Err(err);
        }
        Ok(&self.current_output)
    }

    pub fn remove_last_digit(&mut self) -> Result<&str> {
        let Some(removed) = self.accrued_input.pop() else {
            return Ok(&self.current_output);
        };
        if let Err(err) = self.refresh() {
            self.accrued_input.push(removed);
            return Err(err);
        }
        Ok(&self.current_output)
    }

    pub fn reset(&mut self) {
        self.accrued_input.clear();
        self.current_output.clear();
        self.state = FormatterState::Empty;
    }

    pub fn current_rendering(&self) -> &str {
        &self.current_output
    }

    pub fn state(&self) -> FormatterState {
        self.state
    }

    fn refresh(&mut self) -> Result<()> {
        let (output, state) = self.render()?;
        trace!("'{}' renders as '{output}' ({state:?})", self.accrued_input);
        self.current_output = output;
        self.state = state;
        Ok(())
    }

    fn render(&self) -> Result<(String, FormatterState)> {
        if self.accrued_input.is_empty() {
            return Ok((String::new(), FormatterState::Empty));
        }
        let accumulating = || Ok((self.accrued_input.clone(), FormatterState::Accumulating));

        let Some(national_part) = self.split_national_part() else {
            return accumulating();
        };
        let stripped = match national_part.intent {
            FormatIntent::National => Some(
                self.util
                    .maybe_strip_national_prefix(national_part.territory, national_part.digits)?,
            ),
            FormatIntent::International => None,
        };
        let (national_prefix, national_number, transformed) = match &stripped {
            Some(stripped) if stripped.is_stripped() => (
                stripped.national_prefix,
                stripped.national_number.as_ref(),
                stripped.transformed,
            ),
            _ => ("", national_part.digits, false),
        };
        if national_number.is_empty() {
            return accumulating();
        }

        let Some((_, rendered)) = self.util.select_and_render(
            national_part.territory,
            national_number,
            Some(national_number),
            national_part.intent,
            Some(!national_prefix.is_empty()),
        )?
        else {
            return accumulating();
        };

        let mut output = national_part.leading;
        if !national_prefix.is_empty() && !rendered.national_prefix_applied && !transformed {
            // Keep the prefix the user typed even if the rule doesn't show it.
            // A transformed prefix already lives on in the rewritten number.
            output.push_str(national_prefix);
            output.push(' ');
        }
        output.push_str(&rendered.text);
        Ok((output, FormatterState::Rendered))
    }

    /// Resolves which territory the buffer is dialled in: a `+` or the default
    /// territory's international prefix followed by a known calling code
    /// selects the main territory of that code, anything else the default
    /// territory.
    fn split_national_part(&self) -> Option<NationalPart<'_, 'a>> {
        if let Some(after_plus) = self.accrued_input.strip_prefix(PLUS_SIGN) {
            let (country_calling_code, digits) = self.util.extract_country_code(after_plus)?;
            let territory = self
                .util
                .territory_index()
                .main_territory_for_code(country_calling_code)?;
            let mut buf = itoa::Buffer::new();
            let country_calling_code_str = buf.format(country_calling_code);
            return Some(NationalPart {
                leading: fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " "),
                territory,
                digits,
                intent: FormatIntent::International,
            });
        }

        let default_territory = self.default_territory?;
        if let Some(national_part) = self.split_after_international_prefix(default_territory) {
            return Some(national_part);
        }
        Some(NationalPart {
            leading: String::new(),
            territory: default_territory,
            digits: &self.accrued_input,
            intent: FormatIntent::National,
        })
    }

    fn split_after_international_prefix(
        &self,
        default_territory: &Territory,
    ) -> Option<NationalPart<'_, 'a>> {
        let international_prefix = self.util.single_international_prefix(default_territory)?;
        // A tilde only means "wait for the dial tone".
        let idd: String = international_prefix
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let after_idd = self.accrued_input.strip_prefix(idd.as_str())?;
        let (country_calling_code, digits) = self.util.extract_country_code(after_idd)?;
        let territory = self
            .util
            .territory_index()
            .main_territory_for_code(country_calling_code)?;
        let mut buf = itoa::Buffer::new();
        let country_calling_code_str = buf.format(country_calling_code);
        Some(NationalPart {
            leading: fast_cat::concat_str!(&idd, " ", country_calling_code_str, " "),
            territory,
            digits,
            intent: FormatIntent::International,
        })
    }
}

/// Maps full-width plus signs and Unicode decimal digits to their ASCII
/// forms. Everything else is not part of a number.
fn normalize_input_char(c: char) -> Option<char> {
    match c {
        '+' | '\u{FF0B}' => Some('+'),
        '0'..='9' => Some(c),
        _ if c.is_decimal_utf8() => {
            let mut buf = [0u8; 4];
            dec_from_char::normalize_decimals(c.encode_utf8(&mut buf))
                .chars()
                .next()
                .filter(char::is_ascii_digit)
        }
        _ => None,
    }
}
