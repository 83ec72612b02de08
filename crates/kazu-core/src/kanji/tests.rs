use proptest::prelude::*;

use super::parse_kanji_numeral;

#[test]
fn parses_empty_as_zero() {
    assert_eq!(parse_kanji_numeral(""), 0);
}

#[test]
fn parses_single_digits() {
    assert_eq!(parse_kanji_numeral("一"), 1);
    assert_eq!(parse_kanji_numeral("五"), 5);
    assert_eq!(parse_kanji_numeral("九"), 9);
}

#[test]
fn parses_small_multipliers() {
    assert_eq!(parse_kanji_numeral("十"), 10);
    assert_eq!(parse_kanji_numeral("百"), 100);
    assert_eq!(parse_kanji_numeral("千"), 1000);
    assert_eq!(parse_kanji_numeral("二十"), 20);
    assert_eq!(parse_kanji_numeral("三百"), 300);
    assert_eq!(parse_kanji_numeral("九千"), 9000);
}

#[test]
fn parses_compound_groups() {
    assert_eq!(parse_kanji_numeral("十五"), 15);
    assert_eq!(parse_kanji_numeral("四十二"), 42);
    assert_eq!(parse_kanji_numeral("百九十"), 190);
    assert_eq!(parse_kanji_numeral("二千三百八"), 2308);
}

#[test]
fn digit_before_big_multiplier_stands_alone() {
    assert_eq!(parse_kanji_numeral("二万"), 20_000);
    assert_eq!(parse_kanji_numeral("五兆"), 5_000_000_000_000);
}

#[test]
fn subtotal_scales_big_multiplier() {
    assert_eq!(parse_kanji_numeral("十万"), 100_000);
    assert_eq!(parse_kanji_numeral("三千万"), 30_000_000);
    assert_eq!(parse_kanji_numeral("百九十万"), 1_900_000);
}

#[test]
fn parses_groups_after_big_multiplier() {
    assert_eq!(parse_kanji_numeral("一万二千三百四十五"), 12_345);
    assert_eq!(parse_kanji_numeral("一億一"), 100_000_001);
}

#[test]
fn parses_reference_numeral() {
    // 五億 = 500,000,000 + 百九十万 = 1,900,000 + 二千三百八 = 2,308
    assert_eq!(parse_kanji_numeral("五億百九十万二千三百八"), 501_902_308);
}

#[test]
fn bare_big_multiplier_contributes_its_value() {
    assert_eq!(parse_kanji_numeral("万"), 10_000);
    assert_eq!(parse_kanji_numeral("億"), 100_000_000);
}

#[test]
fn consecutive_big_multipliers_add_independently() {
    // Each big multiplier sees an empty subtotal and folds its bare value.
    assert_eq!(parse_kanji_numeral("万億"), 100_010_000);
}

#[test]
fn unrecognized_symbols_contribute_zero() {
    assert_eq!(parse_kanji_numeral("あ"), 0);
    // The fallback zero enters the digit branch, so a following multiplier
    // scales zero and a pending digit is clobbered.
    assert_eq!(parse_kanji_numeral("あ十"), 0);
    assert_eq!(parse_kanji_numeral("三あ"), 0);
    assert_eq!(parse_kanji_numeral("五十あ"), 50);
}

#[test]
fn zero_kanji_parse_like_the_fallback() {
    assert_eq!(parse_kanji_numeral("〇"), 0);
    assert_eq!(parse_kanji_numeral("零"), 0);
}

proptest! {
    #[test]
    fn parse_is_deterministic(s in "[一二三四五六七八九十百千万億兆〇零]{0,12}") {
        prop_assert_eq!(parse_kanji_numeral(&s), parse_kanji_numeral(&s));
    }

    #[test]
    fn arbitrary_text_never_panics(s in "\\PC{0,40}") {
        let _ = parse_kanji_numeral(&s);
    }
}
