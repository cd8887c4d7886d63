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

use strum::EnumIter;

use crate::metadata::NumberDescType;

/// Defines the various standardized formats for representing phone numbers.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without formatting)
/// - **RFC3966**: `tel:+41-44-668-1800` (hyphen-separated with a "tel:" prefix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// `+` followed by the country code and the ungrouped national number.
    E164,
    /// Country code and the number grouped by the international template.
    International,
    /// Grouped by the national template, national prefix applied.
    National,
    /// `tel:` URI with hyphens as the only separators.
    RFC3966,
}

/// Which template a format rule renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatIntent {
    National,
    International,
}

/// Categorizes phone numbers based on their primary use.
///
/// Declaration order is the classification priority: types whose patterns
/// may overlap with broader ones come first, and `Unknown` (a number only
/// matching the general description) comes last.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// Numbers reserved for emergency services.
    Emergency,
    /// These numbers charge a higher rate than normal calls.
    PremiumRate,
    /// Calls to these numbers are free for the caller.
    TollFree,
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// Numbers used to directly access a voicemail service.
    VoiceMail,
    /// A number associated with a person, not a location or device.
    PersonalNumber,
    /// Numbers used for sending messages to paging devices.
    Pager,
    /// Universal Access Numbers: one number routed to different offices.
    UAN,
    /// Voice over IP numbers.
    VoIP,
    /// Numbers assigned to wireless devices.
    Mobile,
    /// Traditional landline numbers tied to a geographic location.
    FixedLine,
    /// The number only matches the general description of its territory.
    Unknown,
}

impl PhoneNumberType {
    /// The descriptor describing numbers of this type. `Unknown` maps to the
    /// general descriptor.
    pub fn desc_type(self) -> NumberDescType {
        match self {
            PhoneNumberType::Emergency => NumberDescType::Emergency,
            PhoneNumberType::PremiumRate => NumberDescType::PremiumRate,
            PhoneNumberType::TollFree => NumberDescType::TollFree,
            PhoneNumberType::SharedCost => NumberDescType::SharedCost,
            PhoneNumberType::VoiceMail => NumberDescType::Voicemail,
            PhoneNumberType::PersonalNumber => NumberDescType::PersonalNumber,
            PhoneNumberType::Pager => NumberDescType::Pager,
            PhoneNumberType::UAN => NumberDescType::Uan,
            PhoneNumberType::VoIP => NumberDescType::Voip,
            PhoneNumberType::Mobile => NumberDescType::Mobile,
            PhoneNumberType::FixedLine => NumberDescType::FixedLine,
            PhoneNumberType::Unknown => NumberDescType::General,
        }
    }

    pub fn from_desc_type(desc_type: NumberDescType) -> Self {
        match desc_type {
            NumberDescType::Emergency => PhoneNumberType::Emergency,
            NumberDescType::PremiumRate => PhoneNumberType::PremiumRate,
            NumberDescType::TollFree => PhoneNumberType::TollFree,
            NumberDescType::SharedCost => PhoneNumberType::SharedCost,
            NumberDescType::Voicemail => PhoneNumberType::VoiceMail,
            NumberDescType::PersonalNumber => PhoneNumberType::PersonalNumber,
            NumberDescType::Pager => PhoneNumberType::Pager,
            NumberDescType::Uan => PhoneNumberType::UAN,
            NumberDescType::Voip => PhoneNumberType::VoIP,
            NumberDescType::Mobile => PhoneNumberType::Mobile,
            NumberDescType::FixedLine => PhoneNumberType::FixedLine,
            NumberDescType::General => PhoneNumberType::Unknown,
        }
    }
}

/// Verdict of classifying a national number against its territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberValidity {
    /// The number matched a descriptor. `PhoneNumberType::Unknown` means
    /// that only the general descriptor matched.
    Valid(PhoneNumberType),
    /// Not even the general descriptor matched.
    Invalid,
}

impl NumberValidity {
    pub fn is_valid(self) -> bool {
        matches!(self, NumberValidity::Valid(_))
    }

    pub fn number_type(self) -> Option<PhoneNumberType> {
        match self {
            NumberValidity::Valid(number_type) => Some(number_type),
            NumberValidity::Invalid => None,
        }
    }
}

/// Which possible-length sets a length check may consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthContext {
    /// Only lengths of nationally significant numbers.
    #[default]
    National,
    /// Local-only lengths are accepted as well.
    IncludingLocalOnly,
}

/// Represents the possible outcomes when checking if a phone number's length is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    /// **The length is valid for a dialable number.**
    IsPossible,
    /// **The length is valid for a local-only number.**
    /// The number's length is too short for a full national number but matches a pattern
    /// for a number that can be dialed within a specific local area (e.g., without the area code).
    IsPossibleLocalOnly,
}
