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

use serde::Deserialize;

use crate::phonenumberutil::helper_constants::INTL_FORMAT_NOT_APPLICABLE;

/// One candidate way of grouping a national significant number.
///
/// Templates use `$1`..`$9` for the groups captured by `pattern`. The
/// national prefix formatting rule additionally understands `$NP` (national
/// prefix) and `$FG` (first group); the carrier code rule understands `$CC`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatRule {
    pub pattern: Option<String>,
    pub format: Option<String>,
    pub intl_format: Option<String>,
    /// Tried in list order; the first pattern matching a prefix of the
    /// leading digits accepts the rule. An empty list accepts everything.
    pub leading_digits_patterns: Vec<String>,
    pub national_prefix_formatting_rule: Option<String>,
    pub national_prefix_optional_when_formatting: bool,
    pub domestic_carrier_code_formatting_rule: Option<String>,
}

impl FormatRule {
    pub fn new(pattern: &str, format: &str) -> Self {
        Self {
            pattern: Some(pattern.to_owned()),
            format: Some(format.to_owned()),
            ..Default::default()
        }
    }

    pub fn with_leading_digits<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_digits_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_intl_format(mut self, intl_format: &str) -> Self {
        self.intl_format = Some(intl_format.to_owned());
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: &str) -> Self {
        self.national_prefix_formatting_rule = Some(rule.to_owned());
        self
    }

    pub fn with_national_prefix_optional_when_formatting(mut self, optional: bool) -> Self {
        self.national_prefix_optional_when_formatting = optional;
        self
    }

    pub fn with_domestic_carrier_code_formatting_rule(mut self, rule: &str) -> Self {
        self.domestic_carrier_code_formatting_rule = Some(rule.to_owned());
        self
    }

    /// `"NA"` as international template marks a rule that must not be used
    /// when formatting internationally.
    pub fn is_internationally_formattable(&self) -> bool {
        self.intl_format.as_deref() != Some(INTL_FORMAT_NOT_APPLICABLE)
    }

    pub(crate) fn patterns(&self) -> impl Iterator<Item = &str> {
        self.pattern
            .iter()
            .chain(self.leading_digits_patterns.iter())
            .map(String::as_str)
    }
}
