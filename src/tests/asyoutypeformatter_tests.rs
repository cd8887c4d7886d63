use super::{get_phone_util, region_code::RegionCode};
use crate::{AsYouTypeFormatter, FormatterState};

/// Types every character and returns the rendering after each one.
fn type_number(formatter: &mut AsYouTypeFormatter<'_>, input: &str) -> Vec<String> {
    input
        .chars()
        .map(|c| formatter.input_digit(c).unwrap().to_owned())
        .collect()
}

fn last_rendering(formatter: &mut AsYouTypeFormatter<'_>, input: &str) -> String {
    type_number(formatter, input).pop().unwrap_or_default()
}

#[test]
fn formats_us_number_while_typing() {
    let phone_util = get_phone_util();
    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::us());
    assert_eq!(FormatterState::Empty, formatter.state());
    assert_eq!("", formatter.current_rendering());

    let renderings = type_number(&mut formatter, "2025551234");
    assert_eq!("2", renderings[0]);
    assert_eq!("202555", renderings[5]);
    // Seven digits form a local number.
    assert_eq!("202-5551", renderings[6]);
    assert_eq!("20255512", renderings[7]);
    assert_eq!("202-555-1234", renderings[9]);
    assert_eq!(FormatterState::Rendered, formatter.state());
}

#[test]
fn typed_national_prefix_is_kept() {
    let phone_util = get_phone_util();

    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::us());
    let renderings = type_number(&mut formatter, "12025551234");
    assert_eq!("1", renderings[0]);
    assert_eq!(FormatterState::Accumulating, formatter.state());
    assert_eq!("1 202-555-1234", renderings[10]);

    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::gb());
    assert_eq!("020 7031 3000", last_rendering(&mut formatter, "02070313000"));

    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::ru());
    assert_eq!("8 (495) 555-35-35", last_rendering(&mut formatter, "84955553535"));

    // The rule shows no prefix, so the typed one is put in front.
    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::br());
    assert_eq!("015 (21) 2345-6789", last_rendering(&mut formatter, "0152123456789"));
}

#[test]
fn national_prefix_transform_rule_applies_while_typing() {
    let phone_util = get_phone_util();
    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::ar());

    // "01115" is rewritten to the mobile prefix "911"; the rule puts the
    // typed digits back in place.
    assert_eq!("011 15-8765-4321", last_rendering(&mut formatter, "0111587654321"));
    assert_eq!(FormatterState::Rendered, formatter.state());

    formatter.reset();
    assert_eq!("011 8765-4321", last_rendering(&mut formatter, "01187654321"));
}

#[test]
fn optional_national_prefix_follows_the_input() {
    let phone_util = get_phone_util();

    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::gb());
    assert_eq!("0800 1234", last_rendering(&mut formatter, "08001234"));

    formatter.reset();
    assert_eq!("800 1234", last_rendering(&mut formatter, "8001234"));

    // Mandatory prefixes are shown even if not typed.
    formatter.reset();
    assert_eq!("020 7031 3000", last_rendering(&mut formatter, "2070313000"));
}

#[test]
fn plus_sign_selects_the_calling_code() {
    let phone_util = get_phone_util();
    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::us());

    let renderings = type_number(&mut formatter, "+442070313000");
    assert_eq!("+", renderings[0]);
    assert_eq!("+4", renderings[1]);
    assert_eq!("+44", renderings[2]);
    assert_eq!("+44 20 7031 3000", renderings[12]);

    formatter.reset();
    assert_eq!("+44", last_rendering(&mut formatter, "+44"));
    assert_eq!(FormatterState::Accumulating, formatter.state());

    // Full-width plus and digits are normalized.
    formatter.reset();
    assert_eq!("+1 202-555-1234", last_rendering(&mut formatter, "＋１２０２５５５１２３４"));
}

#[test]
fn international_prefix_of_default_region() {
    let phone_util = get_phone_util();

    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::us());
    assert_eq!("011 44 20 7031 3000", last_rendering(&mut formatter, "011442070313000"));

    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::gb());
    assert_eq!("00 1 202-555-1234", last_rendering(&mut formatter, "0012025551234"));
}

#[test]
fn punctuation_and_late_plus_are_ignored() {
    let phone_util = get_phone_util();
    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::us());

    assert_eq!("202-555-1234", last_rendering(&mut formatter, "(202) 555-1234"));
    assert_eq!("202-555-1234", formatter.input_digit('+').unwrap());
    assert_eq!("202-555-1234", formatter.input_digit('x').unwrap());
    assert_eq!(FormatterState::Rendered, formatter.state());
}

#[test]
fn removing_a_digit_restores_the_previous_rendering() {
    let phone_util = get_phone_util();
    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::gb());

    let renderings = type_number(&mut formatter, "02070313000");
    assert_eq!(renderings[9], formatter.remove_last_digit().unwrap());
    assert_eq!(FormatterState::Accumulating, formatter.state());
    assert_eq!("020 7031 3000", formatter.input_digit('0').unwrap());

    for expected in renderings.iter().rev().skip(1) {
        assert_eq!(expected, formatter.remove_last_digit().unwrap());
    }
    assert_eq!("", formatter.remove_last_digit().unwrap());
    assert_eq!(FormatterState::Empty, formatter.state());
    // Nothing left to remove.
    assert_eq!("", formatter.remove_last_digit().unwrap());
}

#[test]
fn reset_starts_a_new_session() {
    let phone_util = get_phone_util();
    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::us());

    last_rendering(&mut formatter, "+442070313000");
    formatter.reset();
    assert_eq!(FormatterState::Empty, formatter.state());
    assert_eq!("", formatter.current_rendering());
    assert_eq!("202-555-1234", last_rendering(&mut formatter, "2025551234"));
}

#[test]
fn unknown_default_region_only_formats_with_plus() {
    let phone_util = get_phone_util();
    let mut formatter = AsYouTypeFormatter::new(&phone_util, RegionCode::zz());

    assert_eq!("2025551234", last_rendering(&mut formatter, "2025551234"));
    assert_eq!(FormatterState::Accumulating, formatter.state());

    formatter.reset();
    assert_eq!("+1 202-555-1234", last_rendering(&mut formatter, "+12025551234"));
    assert_eq!(FormatterState::Rendered, formatter.state());
}
