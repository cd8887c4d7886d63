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

use std::{borrow::Cow, collections::HashSet, sync::Arc};

use log::{error, trace, warn};
use strum::IntoEnumIterator;

use super::{
    FormatIntent, LengthContext, NumberLengthType, NumberValidity, PhoneNumberFormat,
    PhoneNumberType,
    errors::{MetadataError, ValidationError},
    format_template::{TemplateCache, TemplateToken, TemplateValues},
    helper_constants::{
        DEFAULT_EXTN_PREFIX, MAX_LENGTH_COUNTRY_CODE, NANPA_COUNTRY_CODE, NATIONAL_PREFIX_TOKEN,
        RFC3966_EXTN_PREFIX,
    },
    helper_functions::{
        admits_length, get_number_desc_by_type, get_supported_types_for_territory,
        is_digit_string, prefix_number_with_country_calling_code, test_number_length,
    },
    helper_types::{RenderedNumber, StrippedNationalNumber},
    phone_number_regexps_and_mappings::PhoneNumberRegExps,
    territory_index::TerritoryIndex,
};
use crate::{
    i18n,
    interfaces::MatcherApi,
    metadata::{FormatRule, NumberDescriptor, Territory},
    regex_based_matcher::RegexBasedMatcher,
    regexp_cache::{InvalidRegexError, RegexCache},
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, InvalidRegexError>;

pub struct PhoneNumberUtil {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions.
    reg_exps: PhoneNumberRegExps,

    /// Every pattern of the metadata, compiled on construction.
    regexp_cache: Arc<RegexCache>,

    /// Format templates parsed into tokens on first use.
    template_cache: TemplateCache,

    territory_index: TerritoryIndex,
}

impl PhoneNumberUtil {
    /// Indexes the territories and compiles every pattern they carry. A
    /// malformed pattern or a duplicated region code rejects the whole
    /// collection.
    pub fn new<I>(territories: I) -> std::result::Result<Self, MetadataError>
    where
        I: IntoIterator<Item = Territory>,
    {
        let territory_index = TerritoryIndex::new(territories).inspect_err(|err| {
            error!("Could not index metadata: {}", err);
        })?;

        let regexp_cache = Arc::new(RegexCache::with_capacity(
            territory_index.territories().len() * 16,
        ));
        for territory in territory_index.territories() {
            for pattern in territory.patterns() {
                regexp_cache.get_regex(pattern).inspect_err(|err| {
                    error!("Invalid regex in metadata of {}! {}", territory.region_code, err);
                })?;
            }
        }
        trace!("Compiled {} distinct metadata patterns", regexp_cache.len());

        Ok(Self {
            matcher_api: Box::new(RegexBasedMatcher::new(regexp_cache.clone())),
            reg_exps: PhoneNumberRegExps::new(),
            regexp_cache,
            template_cache: TemplateCache::new(),
            territory_index,
        })
    }

    pub fn territory_index(&self) -> &TerritoryIndex {
        &self.territory_index
    }

    pub fn get_supported_regions(&self) -> Vec<&str> {
        self.territory_index.supported_regions().collect()
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<u32> {
        self.territory_index.supported_calling_codes().collect()
    }

    /// Returns the types we have metadata for based on the territory passed
    /// in. `Unknown` is never part of the result.
    pub fn supported_types(&self, territory: &Territory) -> HashSet<PhoneNumberType> {
        get_supported_types_for_territory(territory)
    }

    pub fn example_number<'t>(
        &self,
        territory: &'t Territory,
        number_type: PhoneNumberType,
    ) -> Option<&'t str> {
        get_number_desc_by_type(territory, number_type)?
            .example_number
            .as_deref()
    }

    /// Determines the type of a national significant number. Descriptors are
    /// tried in the priority order of [`PhoneNumberType`], each one length
    /// first and pattern second; only local-only lengths are ignored.
    pub fn classify(&self, territory: &Territory, national_number: &str) -> Result<NumberValidity> {
        self.classify_with_context(territory, national_number, LengthContext::National)
    }

    pub fn classify_with_context(
        &self,
        territory: &Territory,
        national_number: &str,
        context: LengthContext,
    ) -> Result<NumberValidity> {
        if !is_digit_string(national_number) {
            trace!("Number '{national_number}' is not a digit string, can't be valid");
            return Ok(NumberValidity::Invalid);
        }
        for number_type in PhoneNumberType::iter() {
            let Some(number_desc) =
                get_number_desc_by_type(territory, number_type).filter(|desc| desc.has_data())
            else {
                continue;
            };
            if self.is_number_matching_desc(territory, national_number, number_desc, context)? {
                trace!(
                    "Number '{national_number}' is of type {:?} in {}",
                    number_type, territory.region_code
                );
                return Ok(NumberValidity::Valid(number_type));
            }
        }
        trace!(
            "Number '{national_number}' doesn't match the general description of {}",
            territory.region_code
        );
        Ok(NumberValidity::Invalid)
    }

    pub fn is_valid_number_for_territory(
        &self,
        territory: &Territory,
        national_number: &str,
    ) -> Result<bool> {
        Ok(self.classify(territory, national_number)?.is_valid())
    }

    /// Length-only check against the national lengths of the type. No
    /// pattern is evaluated.
    pub fn is_possible_length(
        &self,
        territory: &Territory,
        national_number: &str,
        number_type: PhoneNumberType,
    ) -> bool {
        is_digit_string(national_number)
            && get_number_desc_by_type(territory, number_type).is_some_and(|number_desc| {
                admits_length(
                    territory,
                    number_desc,
                    national_number.len(),
                    LengthContext::National,
                )
            })
    }

    /// Like [`Self::is_possible_length`] but tells why a length is rejected.
    pub fn check_number_length(
        &self,
        territory: &Territory,
        national_number: &str,
        number_type: PhoneNumberType,
    ) -> std::result::Result<NumberLengthType, ValidationError> {
        test_number_length(national_number, territory, number_type)
    }

    /// Checks the number against the general possible lengths of the
    /// territory, or against its possible number pattern for metadata that
    /// carries no lengths.
    pub fn is_possible_number(&self, territory: &Territory, national_number: &str) -> Result<bool> {
        if !is_digit_string(national_number) {
            return Ok(false);
        }
        let Some(general_desc) = territory.general_desc() else {
            return Ok(true);
        };
        if general_desc.national_lengths().is_some() || general_desc.local_only_lengths().is_some()
        {
            return Ok(
                test_number_length(national_number, territory, PhoneNumberType::Unknown).is_ok(),
            );
        }
        self.matcher_api
            .match_possible_number(national_number, general_desc)
    }

    /// Returns the region code of the territory the number belongs to, or the
    /// unknown region if no territory of the calling code claims it.
    pub fn region_for_number(&self, country_calling_code: u32, national_number: &str) -> Result<&str> {
        Ok(self
            .territory_for_number(country_calling_code, national_number)?
            .map(|territory| territory.region_code.as_str())
            .unwrap_or(i18n::RegionCode::get_unknown()))
    }

    pub fn territory_for_number(
        &self,
        country_calling_code: u32,
        national_number: &str,
    ) -> Result<Option<&Territory>> {
        let territories = self.territory_index.by_calling_code(country_calling_code);
        match territories.as_slice() {
            [] => {
                trace!("Missing/invalid country calling code ({country_calling_code})");
                Ok(None)
            }
            [territory] => Ok(Some(*territory)),
            _ => self.territory_for_number_from_list(&territories, national_number),
        }
    }

    fn territory_for_number_from_list<'t>(
        &self,
        territories: &[&'t Territory],
        national_number: &str,
    ) -> Result<Option<&'t Territory>> {
        for &territory in territories {
            // If leading_digits is present, use this. Otherwise, do full
            // validation.
            if let Some(leading_digits) = territory.leading_digits.as_deref() {
                if self
                    .regexp_cache
                    .get_regex(leading_digits)?
                    .matches_start(national_number)
                {
                    return Ok(Some(territory));
                }
            } else if matches!(
                self.classify(territory, national_number)?,
                NumberValidity::Valid(number_type) if number_type != PhoneNumberType::Unknown
            ) {
                return Ok(Some(territory));
            }
        }
        Ok(None)
    }

    /// Picks the format rule for the number and renders it. With no
    /// `leading_digits` the national number itself selects the rule.
    pub fn select_format<'t>(
        &self,
        territory: &'t Territory,
        national_number: &str,
        leading_digits: Option<&str>,
        intent: FormatIntent,
    ) -> Result<Option<(&'t FormatRule, String)>> {
        self.select_format_for_input(territory, national_number, leading_digits, intent, None)
    }

    /// As [`Self::select_format`], telling whether the dialled digits carried
    /// a national prefix. `None` renders the canonical form.
    pub fn select_format_for_input<'t>(
        &self,
        territory: &'t Territory,
        national_number: &str,
        leading_digits: Option<&str>,
        intent: FormatIntent,
        national_prefix_in_source: Option<bool>,
    ) -> Result<Option<(&'t FormatRule, String)>> {
        Ok(self
            .select_and_render(
                territory,
                national_number,
                leading_digits,
                intent,
                national_prefix_in_source,
            )?
            .map(|(rule, rendered)| (rule, rendered.text)))
    }

    pub(crate) fn select_and_render<'t>(
        &self,
        territory: &'t Territory,
        national_number: &str,
        leading_digits: Option<&str>,
        intent: FormatIntent,
        national_prefix_in_source: Option<bool>,
    ) -> Result<Option<(&'t FormatRule, RenderedNumber)>> {
        let Some(rule) =
            self.choose_formatting_rule(territory, national_number, leading_digits, intent)?
        else {
            trace!(
                "No format rule of {} for '{national_number}'",
                territory.region_code
            );
            return Ok(None);
        };
        let rendered = self.render_with_rule(
            territory,
            rule,
            national_number,
            intent,
            national_prefix_in_source,
            "",
        )?;
        Ok(Some((rule, rendered)))
    }

    fn choose_formatting_rule<'t>(
        &self,
        territory: &'t Territory,
        national_number: &str,
        leading_digits: Option<&str>,
        intent: FormatIntent,
    ) -> Result<Option<&'t FormatRule>> {
        let leading_digits = leading_digits.unwrap_or(national_number);
        for rule in &territory.number_formats {
            let Some(pattern) = rule.pattern.as_deref() else {
                continue;
            };
            if matches!(intent, FormatIntent::International) && !rule.is_internationally_formattable()
            {
                continue;
            }
            if !self.leading_digits_accept(rule, leading_digits)? {
                continue;
            }
            if self.regexp_cache.get_regex(pattern)?.matches(national_number) {
                trace!("Format rule '{pattern}' selected for '{national_number}'");
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }

    fn leading_digits_accept(&self, rule: &FormatRule, leading_digits: &str) -> Result<bool> {
        if rule.leading_digits_patterns.is_empty() {
            return Ok(true);
        }
        for pattern in &rule.leading_digits_patterns {
            if self.regexp_cache.get_regex(pattern)?.matches_start(leading_digits) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // Note that carrier_code is optional - if an empty string, no carrier code
    // replacement will take place.
    pub(crate) fn render_with_rule(
        &self,
        territory: &Territory,
        rule: &FormatRule,
        national_number: &str,
        intent: FormatIntent,
        national_prefix_in_source: Option<bool>,
        carrier_code: &str,
    ) -> Result<RenderedNumber> {
        let unformatted = || RenderedNumber {
            text: national_number.to_owned(),
            national_prefix_applied: false,
        };
        let template = match intent {
            FormatIntent::National => rule.format.as_deref(),
            FormatIntent::International => rule
                .intl_format
                .as_deref()
                .filter(|_| rule.is_internationally_formattable())
                .or(rule.format.as_deref()),
        };
        let (Some(pattern), Some(template)) =
            (rule.pattern.as_deref(), template.filter(|t| !t.is_empty()))
        else {
            return Ok(unformatted());
        };
        let pattern_to_match = self.regexp_cache.get_regex(pattern)?;
        let Some(captures) = pattern_to_match.captures(national_number) else {
            return Ok(unformatted());
        };

        let template = self.template_cache.get_template(template);
        let values = TemplateValues {
            national_prefix: territory.national_prefix.as_deref().unwrap_or_default(),
            carrier_code,
        };
        if matches!(intent, FormatIntent::International) {
            return Ok(RenderedNumber {
                text: template.render(&captures, values),
                national_prefix_applied: false,
            });
        }

        let first_group_rule = match rule
            .domestic_carrier_code_formatting_rule
            .as_deref()
            .filter(|carrier_rule| !carrier_rule.is_empty() && !carrier_code.is_empty())
        {
            // Replace the $CC in the formatting rule with the desired carrier code.
            Some(carrier_rule) => Some(carrier_rule),
            // Use the national prefix formatting rule instead.
            None => national_prefix_formatting_rule(territory, rule, national_prefix_in_source),
        };
        let Some(first_group_rule) = first_group_rule else {
            return Ok(RenderedNumber {
                text: template.render(&captures, values),
                national_prefix_applied: false,
            });
        };

        let first_group_rule = self.template_cache.get_template(first_group_rule);
        let mut text = String::with_capacity(national_number.len() * 2);
        let spliced =
            template.render_with_first_group_rule(&mut text, &captures, values, &first_group_rule);
        Ok(RenderedNumber {
            text,
            national_prefix_applied: spliced
                && !values.national_prefix.is_empty()
                && first_group_rule
                    .tokens()
                    .contains(&TemplateToken::NationalPrefix),
        })
    }

    /// Formatting rules for a calling code shared by several territories live
    /// with one of them: NANPA rules are contained by US, the Russian ones by
    /// Russia.
    fn formatting_territory<'t>(&'t self, territory: &'t Territory) -> &'t Territory {
        if !territory.number_formats.is_empty() {
            return territory;
        }
        self.territory_index
            .main_territory_for_code(territory.country_code)
            .unwrap_or(territory)
    }

    fn format_nsn(
        &self,
        territory: &Territory,
        national_number: &str,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Result<String> {
        let territory = self.formatting_territory(territory);
        let intent = match number_format {
            PhoneNumberFormat::National => FormatIntent::National,
            _ => FormatIntent::International,
        };
        let Some(rule) = self.choose_formatting_rule(territory, national_number, None, intent)?
        else {
            return Ok(national_number.to_owned());
        };
        let mut formatted_number = self
            .render_with_rule(territory, rule, national_number, intent, None, carrier_code)?
            .text;

        if matches!(number_format, PhoneNumberFormat::RFC3966) {
            // First consume any leading punctuation, if any was present.
            let start = self
                .reg_exps
                .separator_pattern
                .find(&formatted_number)
                .filter(|separator| separator.start() == 0)
                .map_or(0, |separator| separator.end());
            // Then replace all separators with a "-".
            formatted_number = self
                .reg_exps
                .separator_pattern
                .replace_all(&formatted_number[start..], "-")
                .into_owned();
        }
        Ok(formatted_number)
    }

    /// Formats a national significant number of the territory. Numbers no
    /// rule matches come out ungrouped.
    pub fn format(
        &self,
        territory: &Territory,
        national_number: &str,
        number_format: PhoneNumberFormat,
    ) -> Result<String> {
        let mut formatted_number = if matches!(number_format, PhoneNumberFormat::E164) {
            // Early exit for E164 case since no formatting of the national
            // number needs to be applied.
            national_number.to_owned()
        } else {
            self.format_nsn(territory, national_number, number_format, "")?
        };
        prefix_number_with_country_calling_code(
            territory.country_code,
            number_format,
            &mut formatted_number,
        );
        Ok(formatted_number)
    }

    /// Extensions are not formatted for E164.
    pub fn format_with_extension(
        &self,
        territory: &Territory,
        national_number: &str,
        extension: &str,
        number_format: PhoneNumberFormat,
    ) -> Result<String> {
        let mut formatted_number = self.format(territory, national_number, number_format)?;
        if let Some(formatted_extension) =
            Self::get_formatted_extension(territory, extension, number_format)
        {
            formatted_number.push_str(&formatted_extension);
        }
        Ok(formatted_number)
    }

    // Returns the formatted extension of a phone number, if the phone number had an
    // extension specified else None.
    fn get_formatted_extension(
        territory: &Territory,
        extension: &str,
        number_format: PhoneNumberFormat,
    ) -> Option<String> {
        if extension.is_empty() || matches!(number_format, PhoneNumberFormat::E164) {
            return None;
        }
        let prefix = if matches!(number_format, PhoneNumberFormat::RFC3966) {
            RFC3966_EXTN_PREFIX
        } else {
            territory
                .preferred_extn_prefix
                .as_deref()
                .unwrap_or(DEFAULT_EXTN_PREFIX)
        };
        Some(fast_cat::concat_str!(prefix, extension))
    }

    /// National format with the domestic carrier code spliced in by the rule's
    /// carrier code formatting rule. Rules without one format as usual.
    pub fn format_with_carrier_code(
        &self,
        territory: &Territory,
        national_number: &str,
        carrier_code: &str,
    ) -> Result<String> {
        self.format_nsn(
            territory,
            national_number,
            PhoneNumberFormat::National,
            carrier_code,
        )
    }

    /// Formats the number the way it has to be dialled from `calling_from`.
    /// The international prefix of that region is used when it is a single
    /// one, `+` otherwise.
    pub fn format_out_of_country_calling_number(
        &self,
        territory: &Territory,
        national_number: &str,
        calling_from: &str,
    ) -> Result<String> {
        let Some(calling_from_territory) = self.territory_index.by_region(calling_from) else {
            warn!(
                "Trying to format number from invalid region {calling_from}. International formatting applied."
            );
            return self.format(territory, national_number, PhoneNumberFormat::International);
        };
        let country_calling_code = territory.country_code;
        let mut buf = itoa::Buffer::new();
        let country_calling_code_str = buf.format(country_calling_code);
        if country_calling_code == NANPA_COUNTRY_CODE {
            if calling_from_territory.country_code == NANPA_COUNTRY_CODE {
                // For NANPA regions, return the national format for these
                // regions but prefix it with the country calling code.
                let national =
                    self.format(territory, national_number, PhoneNumberFormat::National)?;
                return Ok(fast_cat::concat_str!(country_calling_code_str, " ", &national));
            }
        } else if country_calling_code == calling_from_territory.country_code {
            // If regions share a country calling code, the country calling code
            // need not be dialled.
            return self.format(territory, national_number, PhoneNumberFormat::National);
        }

        let mut formatted_number = self.format_nsn(
            territory,
            national_number,
            PhoneNumberFormat::International,
            "",
        )?;
        match self.single_international_prefix(calling_from_territory) {
            Some(international_prefix) => {
                formatted_number = fast_cat::concat_str!(
                    international_prefix,
                    " ",
                    country_calling_code_str,
                    " ",
                    &formatted_number
                );
            }
            None => prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::International,
                &mut formatted_number,
            ),
        }
        Ok(formatted_number)
    }

    /// The international prefix of the territory if it is a plain digit
    /// sequence rather than a pattern of alternatives.
    pub fn single_international_prefix<'t>(&self, territory: &'t Territory) -> Option<&'t str> {
        territory
            .international_prefix
            .as_deref()
            .filter(|prefix| self.reg_exps.single_international_prefix.is_match(prefix))
    }

    /// Strips any national prefix (such as 0, 1) present in the number
    /// provided, applying the territory's transform rule when the prefix
    /// pattern captured something. The prefix is kept if removing it would
    /// turn a number matching the general description into one that does
    /// not. The first capture group, if the prefix has more than one (or
    /// one without transform), is the carrier code.
    pub fn maybe_strip_national_prefix<'a>(
        &self,
        territory: &Territory,
        number: &'a str,
    ) -> Result<StrippedNationalNumber<'a>> {
        let unchanged = StrippedNationalNumber::unchanged(number);
        let Some(possible_national_prefix) = territory.national_prefix_for_parsing() else {
            return Ok(unchanged);
        };
        if number.is_empty() {
            return Ok(unchanged);
        }
        // Attempt to parse the first digits as a national prefix.
        let prefix_pattern = self.regexp_cache.get_regex(possible_national_prefix)?;
        let Some(captures) = prefix_pattern.captures_start(number) else {
            return Ok(unchanged);
        };
        let prefix_end = captures.get(0).map_or(0, |prefix| prefix.end());
        if prefix_end == 0 {
            return Ok(unchanged);
        }

        let general_desc = territory.general_desc();
        // We check if the original number is viable; if it is, we make sure
        // the stripped number is too.
        let is_viable_original_number = match general_desc {
            Some(general_desc) => {
                self.matcher_api
                    .match_national_number(number, general_desc, false)?
            }
            None => false,
        };
        let stays_viable = |candidate: &str| -> Result<bool> {
            match general_desc {
                Some(general_desc) if is_viable_original_number => self
                    .matcher_api
                    .match_national_number(candidate, general_desc, false),
                _ => Ok(true),
            }
        };

        // Group 0 counts as the last group when the pattern has none.
        let num_of_groups = captures.len() - 1;
        let last_group_captured = captures.get(num_of_groups).is_some();
        let national_prefix = &number[..prefix_end];

        let transform_rule = territory
            .national_prefix_transform_rule
            .as_deref()
            .filter(|rule| !rule.is_empty());
        match transform_rule {
            Some(transform_rule) if last_group_captured => {
                let template = self.template_cache.get_template(transform_rule);
                let mut transformed_number = template.render(&captures, TemplateValues::default());
                transformed_number.push_str(&number[prefix_end..]);
                if !stays_viable(&transformed_number)? {
                    trace!("Transforming '{number}' to '{transformed_number}' breaks it, keeping it");
                    return Ok(unchanged);
                }
                let carrier_code = (num_of_groups > 1)
                    .then(|| captures.get(1).map(|group| group.as_str()))
                    .flatten();
                Ok(StrippedNationalNumber {
                    national_number: Cow::Owned(transformed_number),
                    national_prefix,
                    carrier_code,
                    transformed: true,
                })
            }
            _ => {
                let stripped_number = &number[prefix_end..];
                if !stays_viable(stripped_number)? {
                    trace!("Stripping '{national_prefix}' off '{number}' breaks it, keeping it");
                    return Ok(unchanged);
                }
                let carrier_code = (num_of_groups > 0 && last_group_captured)
                    .then(|| captures.get(1).map(|group| group.as_str()))
                    .flatten();
                Ok(StrippedNationalNumber {
                    national_number: Cow::Borrowed(stripped_number),
                    national_prefix,
                    carrier_code,
                    transformed: false,
                })
            }
        }
    }

    /// Splits a known country calling code off the front of `digits`.
    /// Country calling codes never begin with 0.
    pub fn extract_country_code<'a>(&self, digits: &'a str) -> Option<(u32, &'a str)> {
        if digits.is_empty() || digits.starts_with('0') {
            return None;
        }
        let max_length = MAX_LENGTH_COUNTRY_CODE.min(digits.len());
        // Byte-wise slicing below needs ASCII digits.
        if !digits.as_bytes()[..max_length].iter().all(u8::is_ascii_digit) {
            return None;
        }
        for length in 1..=max_length {
            let Ok(country_calling_code) = digits[..length].parse::<u32>() else {
                return None;
            };
            if self.territory_index.has_calling_code(country_calling_code) {
                return Some((country_calling_code, &digits[length..]));
            }
        }
        None
    }

    fn is_number_matching_desc(
        &self,
        territory: &Territory,
        national_number: &str,
        number_desc: &NumberDescriptor,
        context: LengthContext,
    ) -> Result<bool> {
        // Possible lengths are cheap, so they rule numbers out before the
        // validation pattern is looked at.
        if !admits_length(territory, number_desc, national_number.len(), context) {
            return Ok(false);
        }
        self.matcher_api
            .match_national_number(national_number, number_desc, false)
    }
}

/// The national prefix formatting rule a national rendering uses, if any.
fn national_prefix_formatting_rule<'t>(
    territory: &'t Territory,
    rule: &'t FormatRule,
    national_prefix_in_source: Option<bool>,
) -> Option<&'t str> {
    let prefix_rule = rule
        .national_prefix_formatting_rule
        .as_deref()
        .or(territory.national_prefix_formatting_rule.as_deref())
        .filter(|prefix_rule| !prefix_rule.is_empty())?;
    if rule.national_prefix_optional_when_formatting && national_prefix_in_source == Some(false) {
        return None;
    }
    let has_national_prefix = territory
        .national_prefix
        .as_deref()
        .is_some_and(|national_prefix| !national_prefix.is_empty());
    if !has_national_prefix && prefix_rule.contains(NATIONAL_PREFIX_TOKEN) {
        // We don't want to have a rule for how to format the national prefix
        // if there isn't one.
        return None;
    }
    Some(prefix_rule)
}
