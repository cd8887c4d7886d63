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

use std::sync::Arc;

use log::error;

use crate::{
    interfaces,
    metadata::NumberDescriptor,
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub struct RegexBasedMatcher {
    cache: Arc<RegexCache>,
}

impl RegexBasedMatcher {
    pub fn new(cache: Arc<RegexCache>) -> Self {
        Self { cache }
    }

    fn match_number(
        &self,
        phone_number: &str,
        number_pattern: &str,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(number_pattern).inspect_err(|err| {
            error!("Invalid regex in metadata! {}", err);
        })?;

        if allow_prefix_match {
            Ok(regexp.matches_start(phone_number))
        } else {
            Ok(regexp.matches(phone_number))
        }
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self,
        number: &str,
        number_desc: &NumberDescriptor,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError> {
        let Some(national_number_pattern) = number_desc.national_number_pattern.as_deref() else {
            return Ok(true);
        };
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        if national_number_pattern.is_empty() {
            return Ok(false);
        }
        self.match_number(number, national_number_pattern, allow_prefix_match)
    }

    fn match_possible_number(
        &self,
        number: &str,
        number_desc: &NumberDescriptor,
    ) -> Result<bool, InvalidRegexError> {
        match number_desc.possible_number_pattern.as_deref() {
            Some(pattern) if !pattern.is_empty() => self.match_number(number, pattern, false),
            _ => Ok(true),
        }
    }
}
