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
use strum::EnumIter;

use super::possible_lengths::PossibleLengths;

/// Key of a number descriptor inside a territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberDescType {
    /// Covers every number of the territory; the fallback for classification.
    General,
    FixedLine,
    Mobile,
    Pager,
    PersonalNumber,
    PremiumRate,
    SharedCost,
    TollFree,
    Voicemail,
    Voip,
    Uan,
    Emergency,
}

/// Description of one kind of number. An absent field means "no constraint
/// of this kind", not "reject everything".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberDescriptor {
    pub example_number: Option<String>,
    pub national_number_pattern: Option<String>,
    pub possible_number_pattern: Option<String>,
    pub possible_lengths: Option<PossibleLengths>,
}

impl NumberDescriptor {
    pub fn national_lengths(&self) -> Option<&super::LengthSet> {
        self.possible_lengths.as_ref()?.national.as_ref()
    }

    pub fn local_only_lengths(&self) -> Option<&super::LengthSet> {
        self.possible_lengths.as_ref()?.local_only.as_ref()
    }

    /// Returns `true` if there is any data set for this descriptor. A
    /// descriptor that carries nothing is treated as if it were absent.
    pub fn has_data(&self) -> bool {
        // We don't bother checking the local-only lengths, since if this is
        // the only thing that's present we don't really support the type at
        // all.
        self.example_number.is_some()
            || self.national_number_pattern.is_some()
            || self.possible_number_pattern.is_some()
            || self.national_lengths().is_some()
    }

    pub(crate) fn patterns(&self) -> impl Iterator<Item = &str> {
        self.national_number_pattern
            .iter()
            .chain(self.possible_number_pattern.iter())
            .map(String::as_str)
    }
}
