use super::*;

#[test]
fn round_trips_two_digit_country_code() {
    let mobile = compose_mobile("+44", "7911123456");
    assert_eq!(mobile, "+447911123456");

    let parts = split_mobile(&mobile);
    assert_eq!(parts.country_code, "+44");
    assert_eq!(parts.digits, "7911123456");
}

#[test]
fn round_trips_one_and_three_digit_country_codes() {
    let us = split_mobile(&compose_mobile("+1", "2025550123"));
    assert_eq!(us.country_code, "+1");
    assert_eq!(us.digits, "2025550123");

    let kenya = split_mobile(&compose_mobile("+254", "7123456789"));
    assert_eq!(kenya.country_code, "+254");
    assert_eq!(kenya.digits, "7123456789");
}

#[test]
fn falls_back_to_prefix_rule_for_irregular_numbers() {
    let parts = split_mobile("+44 7911 123456");
    assert_eq!(parts.country_code, "+44");
    assert_eq!(parts.digits, "7911123456");
}

#[test]
fn falls_back_to_default_code_without_plus_prefix() {
    let parts = split_mobile("9876543210");
    assert_eq!(parts.country_code, DEFAULT_COUNTRY_CODE);
    assert_eq!(parts.digits, "9876543210");
}
