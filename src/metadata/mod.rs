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

//! Record shapes of the per-territory numbering metadata.
//!
//! Every record is immutable value data. Decoding them from a concrete
//! storage format is left to the caller; the types only derive
//! `serde::Deserialize` so any serde format can produce them.

mod number_desc;
mod number_format;
mod possible_lengths;
mod territory;

pub use number_desc::{NumberDescType, NumberDescriptor};
pub use number_format::FormatRule;
pub use possible_lengths::{LengthSet, PossibleLengths};
pub use territory::Territory;
