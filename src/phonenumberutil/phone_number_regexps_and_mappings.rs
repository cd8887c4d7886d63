// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use regex::Regex;

use super::helper_constants::{SINGLE_INTERNATIONAL_PREFIX, VALID_PUNCTUATION};

/// Fixed regular expressions that do not come from metadata.
pub(super) struct PhoneNumberRegExps {
    /// Regular expression of groups of valid punctuation characters.
    pub separator_pattern: Regex,

    /// Pattern that makes it easy to distinguish whether a region has a single
    /// international dialing prefix or not. If a region has a single international
    /// prefix (e.g. 011 in USA), it will be represented as a string that contains
    /// a sequence of ASCII digits, and possibly a tilde, which signals waiting for
    /// the tone. If there are multiple available international prefixes in a
    /// region, they will be represented as a regex string that always contains one
    /// or more characters that are not ASCII digits or a tilde.
    pub single_international_prefix: Regex,
}

impl PhoneNumberRegExps {
    pub fn new() -> Self {
        Self {
            separator_pattern: Regex::new(&fast_cat::concat_str!("[", VALID_PUNCTUATION, "]+"))
                .expect("Invalid constant pattern!"),
            single_international_prefix: Regex::new(&fast_cat::concat_str!(
                "^(?:",
                SINGLE_INTERNATIONAL_PREFIX,
                ")$"
            ))
            .expect("Invalid constant pattern!"),
        }
    }
}
