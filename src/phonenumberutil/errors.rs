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

use thiserror::Error;

pub use crate::regexp_cache::InvalidRegexError;

/// Two territories of one metadata collection share a region code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Region code {0} is defined by more than one territory")]
pub struct DuplicateRegionError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid possible length spec: {0:?}")]
pub struct InvalidLengthSpecError(pub String);

/// Fatal problems with a metadata collection. Any of these aborts
/// construction instead of surfacing later as a failed match.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetadataError {
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),

    #[error("{0}")]
    DuplicateRegion(#[from] DuplicateRegionError),
}

/// Possible outcomes when testing if a number has a plausible length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// The number is shorter than all valid numbers for this type.
    #[error("The number is shorter than all valid numbers for this type")]
    TooShort,
    /// The number is longer than the shortest valid numbers for this type,
    /// shorter than the longest valid numbers for this type, and does not
    /// itself have a number length that matches valid numbers for this type.
    /// This is also returned when the territory has no numbers of this type
    /// at all.
    #[error("\
    The number is longer than the shortest valid numbers for this type, \
    shorter than the longest valid numbers for this type, and does not \
    itself have a number length that matches valid numbers for this type\
    ")]
    InvalidLength,
    /// The number is longer than all valid numbers for this type.
    #[error("The number is longer than all valid numbers for this type")]
    TooLong,
}
