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

//! Small hand-made territories modelled after real numbering plans. They
//! are not accurate, only shaped to exercise the rules.

use crate::metadata::{
    FormatRule, NumberDescType, NumberDescriptor, PossibleLengths, Territory,
};

/// Territories in the JSON shape an external loader would decode.
pub const JSON_METADATA: &str = include_str!("test_metadata.json");

pub fn desc(pattern: &str, example: Option<&str>, lengths: Option<&str>) -> NumberDescriptor {
    NumberDescriptor {
        example_number: example.map(str::to_owned),
        national_number_pattern: Some(pattern.to_owned()),
        possible_number_pattern: None,
        possible_lengths: lengths.map(|national| {
            PossibleLengths::new(Some(national.parse().unwrap()), None)
        }),
    }
}

fn with_local_only(mut number_desc: NumberDescriptor, local_only: &str) -> NumberDescriptor {
    let lengths = number_desc.possible_lengths.get_or_insert_with(PossibleLengths::default);
    lengths.local_only = Some(local_only.parse().unwrap());
    number_desc
}

fn us() -> Territory {
    Territory {
        main_country_for_code: true,
        international_prefix: Some("011".to_owned()),
        national_prefix: Some("1".to_owned()),
        ..Territory::new("US", 1)
    }
    .with_descriptor(
        NumberDescType::General,
        with_local_only(desc(r"[2-9]\d{9}|[2-9]\d{6}", None, Some("10")), "7"),
    )
    .with_descriptor(
        NumberDescType::FixedLine,
        desc(r"20[1-9][2-9]\d{6}", Some("2015550123"), None),
    )
    .with_descriptor(
        NumberDescType::Mobile,
        desc(r"30[1-9][2-9]\d{6}", Some("3015550123"), None),
    )
    .with_descriptor(
        NumberDescType::TollFree,
        desc(r"8(?:00|66|77|88)[2-9]\d{6}", Some("8002530000"), Some("10")),
    )
    .with_descriptor(
        NumberDescType::PremiumRate,
        desc(r"900[2-9]\d{6}", Some("9002530000"), Some("10")),
    )
    .with_descriptor(NumberDescType::Emergency, desc("911", Some("911"), Some("3")))
    .with_number_format(
        FormatRule::new(r"(\d{3})(\d{4})", "$1-$2")
            .with_leading_digits(["[2-9]"])
            .with_intl_format("NA"),
    )
    .with_number_format(
        FormatRule::new(r"(\d{3})(\d{3})(\d{4})", "$1-$2-$3").with_leading_digits(["[2-9]"]),
    )
}

fn bs() -> Territory {
    Territory {
        international_prefix: Some("011".to_owned()),
        national_prefix: Some("1".to_owned()),
        leading_digits: Some("242".to_owned()),
        ..Territory::new("BS", 1)
    }
    .with_descriptor(NumberDescType::General, desc(r"242\d{7}", None, Some("10")))
    .with_descriptor(
        NumberDescType::FixedLine,
        desc(r"242[2-9]\d{6}", Some("2423651234"), None),
    )
}

fn gb() -> Territory {
    Territory {
        main_country_for_code: true,
        international_prefix: Some("00".to_owned()),
        national_prefix: Some("0".to_owned()),
        national_prefix_formatting_rule: Some("$NP$FG".to_owned()),
        ..Territory::new("GB", 44)
    }
    .with_descriptor(
        NumberDescType::General,
        desc(r"[1-9]\d{6,9}", None, Some("7,[9-10]")),
    )
    .with_descriptor(
        NumberDescType::FixedLine,
        desc(r"[1-6]\d{9}", Some("2070313000"), Some("10")),
    )
    .with_descriptor(
        NumberDescType::Mobile,
        desc(r"7[1-57-9]\d{8}", Some("7912345678"), Some("10")),
    )
    .with_descriptor(
        NumberDescType::TollFree,
        desc(r"800\d{4}", Some("8001234"), Some("7")),
    )
    .with_number_format(
        FormatRule::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3").with_leading_digits(["2"]),
    )
    .with_number_format(
        FormatRule::new(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3")
            .with_leading_digits(["1"])
            .with_national_prefix_formatting_rule("($NP$FG)"),
    )
    .with_number_format(
        FormatRule::new(r"(\d{4})(\d{6})", "$1 $2").with_leading_digits(["7"]),
    )
    .with_number_format(
        FormatRule::new(r"(800)(\d{4})", "$1 $2")
            .with_leading_digits(["80", "800"])
            .with_national_prefix_optional_when_formatting(true),
    )
}

fn ar() -> Territory {
    Territory {
        main_country_for_code: true,
        international_prefix: Some("00".to_owned()),
        national_prefix: Some("0".to_owned()),
        national_prefix_for_parsing: Some(r"0?(?:(11)15)?".to_owned()),
        national_prefix_transform_rule: Some("9$1".to_owned()),
        national_prefix_formatting_rule: Some("$NP$FG".to_owned()),
        ..Territory::new("AR", 54)
    }
    .with_descriptor(
        NumberDescType::General,
        desc(r"9?11\d{8}", None, Some("10,11")),
    )
    .with_descriptor(
        NumberDescType::FixedLine,
        desc(r"11\d{8}", Some("1187654321"), Some("10")),
    )
    .with_descriptor(
        NumberDescType::Mobile,
        desc(r"911\d{8}", Some("91187654321"), Some("11")),
    )
    .with_number_format(
        FormatRule::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2-$3").with_leading_digits(["11"]),
    )
    .with_number_format(
        FormatRule::new(r"(9)(11)(\d{4})(\d{4})", "$2 15-$3-$4")
            .with_leading_digits(["911"])
            .with_intl_format("$1 $2 $3-$4"),
    )
}

fn br() -> Territory {
    Territory {
        main_country_for_code: true,
        // Several international prefixes, so this is a pattern.
        international_prefix: Some(r"00(?:1[245]|2[1-35]|31|4[13]|[56]5|99)".to_owned()),
        national_prefix: Some("0".to_owned()),
        national_prefix_for_parsing: Some(r"0(1[245])?".to_owned()),
        national_prefix_formatting_rule: Some("($FG)".to_owned()),
        ..Territory::new("BR", 55)
    }
    .with_descriptor(
        NumberDescType::General,
        desc(r"[1-9]\d{9,10}", None, Some("[10-11]")),
    )
    .with_descriptor(
        NumberDescType::FixedLine,
        desc(r"[1-9][1-9][2-5]\d{7}", Some("2123456789"), Some("10")),
    )
    .with_descriptor(
        NumberDescType::Mobile,
        desc(r"[1-9][1-9]9\d{8}", Some("11961234567"), Some("11")),
    )
    .with_number_format(
        FormatRule::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2-$3")
            .with_leading_digits(["[1-9][1-9][2-5]"])
            .with_domestic_carrier_code_formatting_rule("$NP $CC ($FG)"),
    )
    .with_number_format(
        FormatRule::new(r"(\d{2})(\d{5})(\d{4})", "$1 $2-$3")
            .with_leading_digits(["[1-9][1-9]9"])
            .with_domestic_carrier_code_formatting_rule("$NP $CC ($FG)"),
    )
}

fn ru() -> Territory {
    Territory {
        main_country_for_code: true,
        international_prefix: Some("810".to_owned()),
        national_prefix: Some("8".to_owned()),
        national_prefix_formatting_rule: Some("$NP ($FG)".to_owned()),
        preferred_extn_prefix: Some(" доб. ".to_owned()),
        ..Territory::new("RU", 7)
    }
    .with_descriptor(
        NumberDescType::General,
        desc(r"[3489]\d{9}", None, Some("10")),
    )
    .with_descriptor(
        NumberDescType::FixedLine,
        desc(r"[348]\d{9}", Some("4955553535"), None),
    )
    .with_descriptor(
        NumberDescType::Mobile,
        desc(r"9\d{9}", Some("9123456789"), None),
    )
    .with_number_format(FormatRule::new(
        r"(\d{3})(\d{3})(\d{2})(\d{2})",
        "$1 $2-$3-$4",
    ))
}

fn kz() -> Territory {
    Territory {
        international_prefix: Some("8~10".to_owned()),
        national_prefix: Some("8".to_owned()),
        leading_digits: Some("7".to_owned()),
        ..Territory::new("KZ", 7)
    }
    .with_descriptor(NumberDescType::General, desc(r"7\d{9}", None, Some("10")))
    .with_descriptor(
        NumberDescType::FixedLine,
        desc(r"7[12]\d{8}", Some("7123456789"), None),
    )
    .with_descriptor(
        NumberDescType::Mobile,
        desc(r"7[05-7]\d{8}", Some("7012345678"), None),
    )
}

fn aq() -> Territory {
    Territory {
        main_country_for_code: true,
        ..Territory::new("AQ", 672)
    }
    .with_descriptor(
        NumberDescType::General,
        desc(r"1\d{5}", Some("106442"), Some("6")),
    )
}

pub fn test_territories() -> Vec<Territory> {
    vec![us(), bs(), gb(), ar(), br(), ru(), kz(), aq()]
}
