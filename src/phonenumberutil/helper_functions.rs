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

use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::metadata::{LengthSet, NumberDescriptor, Territory};

use super::{
    LengthContext, NumberLengthType, PhoneNumberFormat, PhoneNumberType,
    errors::ValidationError,
    helper_constants::{PLUS_SIGN, RFC3966_PREFIX},
};

/// Returns the descriptor for the given type. `Unknown` maps to the general
/// descriptor.
pub(super) fn get_number_desc_by_type(
    territory: &Territory,
    phone_number_type: PhoneNumberType,
) -> Option<&NumberDescriptor> {
    territory.descriptor(phone_number_type.desc_type())
}

/// Returns `true` for strings made of ASCII digits only. Classification and
/// formatting treat everything else as a number that cannot match.
pub(super) fn is_digit_string(number: &str) -> bool {
    !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
}

/// A helper function that is used by Format and FormatByPattern.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: u32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    match number_format {
        PhoneNumberFormat::E164 => {
            *formatted_number =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, &formatted_number);
        }
        PhoneNumberFormat::International => {
            *formatted_number =
                fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", &formatted_number);
        }
        PhoneNumberFormat::RFC3966 => {
            *formatted_number = fast_cat::concat_str!(
                RFC3966_PREFIX,
                PLUS_SIGN,
                country_calling_code_str,
                "-",
                &formatted_number
            );
        }
        PhoneNumberFormat::National => {}
    }
}

/// Possible lengths of a type's descriptor, falling back to the general
/// descriptor's. For size efficiency, where a sub-description (e.g.
/// fixed-line) has the same possible lengths as the parent, they are
/// missing. `None` means the metadata puts no length constraint at all.
pub(super) fn national_lengths_for_type<'a>(
    territory: &'a Territory,
    desc: &'a NumberDescriptor,
) -> Option<&'a LengthSet> {
    desc.national_lengths()
        .or_else(|| territory.general_desc()?.national_lengths())
}

/// Length pre-check of a number against a descriptor. Runs before any
/// pattern is evaluated since length sets are tiny.
pub(super) fn admits_length(
    territory: &Territory,
    desc: &NumberDescriptor,
    length: usize,
    context: LengthContext,
) -> bool {
    let national = national_lengths_for_type(territory, desc).is_none_or(|set| set.contains(length));
    match context {
        LengthContext::National => national,
        LengthContext::IncludingLocalOnly => {
            national
                || desc
                    .local_only_lengths()
                    .is_some_and(|set| set.contains(length))
        }
    }
}

/// Helper method to check a number against possible lengths for this number
/// type, and determine whether it matches, or is too short or too long.
pub(super) fn test_number_length(
    phone_number: &str,
    territory: &Territory,
    phone_number_type: PhoneNumberType,
) -> Result<NumberLengthType, ValidationError> {
    // The type is not supported at all in this territory.
    let Some(desc_for_type) = get_number_desc_by_type(territory, phone_number_type) else {
        return Err(ValidationError::InvalidLength);
    };

    let actual_length = phone_number.len();
    // This is safe because there is never an overlap beween the possible lengths
    // and the local-only lengths.
    if desc_for_type
        .local_only_lengths()
        .is_some_and(|set| set.contains(actual_length))
    {
        return Ok(NumberLengthType::IsPossibleLocalOnly);
    }

    let Some(possible_lengths) = national_lengths_for_type(territory, desc_for_type) else {
        return Ok(NumberLengthType::IsPossible);
    };
    let (Some(minimum_length), Some(maximum_length)) =
        (possible_lengths.min(), possible_lengths.max())
    else {
        return Err(ValidationError::InvalidLength);
    };

    if actual_length < minimum_length {
        Err(ValidationError::TooShort)
    } else if actual_length > maximum_length {
        Err(ValidationError::TooLong)
    } else if possible_lengths.contains(actual_length) {
        Ok(NumberLengthType::IsPossible)
    } else {
        Err(ValidationError::InvalidLength)
    }
}

/// Returns the types we have metadata for based on the territory passed in.
pub(super) fn get_supported_types_for_territory(territory: &Territory) -> HashSet<PhoneNumberType> {
    PhoneNumberType::iter()
        // Never return UNKNOWN (the non-type).
        .filter(|number_type| !matches!(number_type, PhoneNumberType::Unknown))
        .filter(|number_type| {
            get_number_desc_by_type(territory, *number_type).is_some_and(NumberDescriptor::has_data)
        })
        .collect()
}
