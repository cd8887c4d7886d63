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

use std::borrow::Cow;

/// Dialled digits after national prefix handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedNationalNumber<'a> {
    /// Borrowed when the prefix was only cut off, owned when the territory's
    /// transform rule rewrote it.
    pub national_number: Cow<'a, str>,
    /// The digits recognised as national prefix (and carrier code, if any).
    /// Empty when nothing was stripped.
    pub national_prefix: &'a str,
    pub carrier_code: Option<&'a str>,
    /// The prefix was rewritten by the transform rule instead of removed.
    pub transformed: bool,
}

impl<'a> StrippedNationalNumber<'a> {
    pub(super) fn unchanged(number: &'a str) -> Self {
        Self {
            national_number: Cow::Borrowed(number),
            national_prefix: "",
            carrier_code: None,
            transformed: false,
        }
    }

    pub fn is_stripped(&self) -> bool {
        !self.national_prefix.is_empty()
    }
}

/// A national number rendered through a format rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RenderedNumber {
    pub text: String,
    /// The national prefix formatting rule was spliced into the output.
    pub national_prefix_applied: bool,
}
