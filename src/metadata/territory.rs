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

use std::collections::HashMap;

use serde::Deserialize;

use super::{FormatRule, NumberDescType, NumberDescriptor};

/// One region's complete numbering ruleset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Territory {
    pub region_code: String,
    pub country_code: u32,
    /// Several regions may share a calling code (NANPA regions share 1,
    /// Russia and Kazakhstan share 7); exactly one of them is the main one
    /// and holds the formatting rules used for the whole code.
    pub main_country_for_code: bool,
    /// May be a pattern when the region has several international prefixes.
    pub international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    pub national_prefix_for_parsing: Option<String>,
    pub national_prefix_transform_rule: Option<String>,
    pub national_prefix_formatting_rule: Option<String>,
    pub preferred_extn_prefix: Option<String>,
    pub descriptors: HashMap<NumberDescType, NumberDescriptor>,
    pub number_formats: Vec<FormatRule>,
    /// Distinguishes this territory from others sharing its calling code.
    pub leading_digits: Option<String>,
}

impl Territory {
    pub fn new(region_code: &str, country_code: u32) -> Self {
        Self {
            region_code: region_code.to_owned(),
            country_code,
            ..Default::default()
        }
    }

    pub fn descriptor(&self, desc_type: NumberDescType) -> Option<&NumberDescriptor> {
        self.descriptors.get(&desc_type)
    }

    pub fn general_desc(&self) -> Option<&NumberDescriptor> {
        self.descriptor(NumberDescType::General)
    }

    pub fn with_descriptor(mut self, desc_type: NumberDescType, desc: NumberDescriptor) -> Self {
        self.descriptors.insert(desc_type, desc);
        self
    }

    pub fn with_number_format(mut self, format: FormatRule) -> Self {
        self.number_formats.push(format);
        self
    }

    /// Pattern used to recognise a national prefix in dialled digits. When
    /// the metadata does not carry a dedicated one, the national prefix
    /// itself is used.
    pub fn national_prefix_for_parsing(&self) -> Option<&str> {
        self.national_prefix_for_parsing
            .as_deref()
            .or(self.national_prefix.as_deref())
            .filter(|prefix| !prefix.is_empty())
    }

    /// Every regular expression the territory carries, so that they can be
    /// compiled (and rejected) before any number is looked at.
    pub(crate) fn patterns(&self) -> impl Iterator<Item = &str> {
        self.descriptors
            .values()
            .flat_map(NumberDescriptor::patterns)
            .chain(self.number_formats.iter().flat_map(FormatRule::patterns))
            .chain(
                [&self.international_prefix, &self.leading_digits]
                    .into_iter()
                    .flatten()
                    .map(String::as_str),
            )
            .chain(self.national_prefix_for_parsing())
    }
}
