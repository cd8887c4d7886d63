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

use std::str::FromStr;

use serde::Deserialize;

use crate::phonenumberutil::errors::InvalidLengthSpecError;

/// Sorted, deduplicated set of digit counts parsed from a metadata length
/// spec such as `"10"`, `"8,10"`, `"[4-6]"` or `"6,[8-10]"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct LengthSet(Vec<usize>);

impl LengthSet {
    pub fn contains(&self, length: usize) -> bool {
        self.0.binary_search(&length).is_ok()
    }

    pub fn min(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn max(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl FromStr for LengthSet {
    type Err = InvalidLengthSpecError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidLengthSpecError(spec.to_owned());
        let parse_len = |s: &str| s.trim().parse::<usize>().map_err(|_| invalid());

        let mut lengths = Vec::new();
        for token in spec.split(',').map(str::trim) {
            if let Some(range) = token.strip_prefix('[') {
                let range = range.strip_suffix(']').ok_or_else(invalid)?;
                let (from, to) = range.split_once('-').ok_or_else(invalid)?;
                let (from, to) = (parse_len(from)?, parse_len(to)?);
                if from > to {
                    return Err(invalid());
                }
                lengths.extend(from..=to);
            } else {
                lengths.push(parse_len(token)?);
            }
        }
        lengths.sort_unstable();
        lengths.dedup();
        Ok(Self(lengths))
    }
}

impl TryFrom<String> for LengthSet {
    type Error = InvalidLengthSpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Vec<usize>> for LengthSet {
    fn from(mut lengths: Vec<usize>) -> Self {
        lengths.sort_unstable();
        lengths.dedup();
        Self(lengths)
    }
}

/// Possible lengths of a number type: one set for nationally significant
/// numbers, one for numbers only diallable inside a local area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PossibleLengths {
    pub national: Option<LengthSet>,
    pub local_only: Option<LengthSet>,
}

impl PossibleLengths {
    pub fn new(national: Option<LengthSet>, local_only: Option<LengthSet>) -> Self {
        Self { national, local_only }
    }
}
