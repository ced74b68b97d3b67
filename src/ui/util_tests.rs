#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Netflix Subscription", 8), "Netflix…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("बचत खाता", 4), "बचत…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("hello", 1), "…");
}

// ── format_amount / format_whole ──────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56), "₹"), "₹1,234.56");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0), "$"), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50), "₹"), "-₹42.50");
}

#[test]
fn test_format_amount_large() {
    assert_eq!(format_amount(dec!(1234567.89), "$"), "$1,234,567.89");
}

#[test]
fn test_format_amount_pads_decimals() {
    assert_eq!(format_amount(dec!(1.5), "₹"), "₹1.50");
}

#[test]
fn test_format_whole_basic() {
    assert_eq!(format_whole(dec!(23188), "₹"), "₹23,188");
    assert_eq!(format_whole(dec!(5000000), "₹"), "₹5,000,000");
}

#[test]
fn test_format_whole_rounds_half_up() {
    assert_eq!(format_whole(dec!(1239.5), "₹"), "₹1,240");
    assert_eq!(format_whole(dec!(1239.49), "₹"), "₹1,239");
}

#[test]
fn test_format_whole_tiny_negative_has_no_sign() {
    assert_eq!(format_whole(dec!(-0.2), "₹"), "₹0");
}

#[test]
fn test_format_whole_negative() {
    assert_eq!(format_whole(dec!(-1800), "₹"), "-₹1,800");
}

// ── percentages & bars ────────────────────────────────────────

#[test]
fn test_format_percent_rounds() {
    assert_eq!(format_percent(dec!(86.25)), "86%");
    assert_eq!(format_percent(dec!(136)), "136%");
    assert_eq!(format_percent(dec!(24.5)), "25%");
}

#[test]
fn test_bar_ratio_clamps_for_display() {
    assert_eq!(bar_ratio(dec!(50)), 0.5);
    assert_eq!(bar_ratio(dec!(136)), 1.0);
    assert_eq!(bar_ratio(dec!(-5)), 0.0);
}

#[test]
fn test_progress_bar() {
    assert_eq!(progress_bar(0.5, 4), "[██░░]");
    assert_eq!(progress_bar(1.0, 3), "[███]");
    assert_eq!(progress_bar(0.0, 2), "[░░]");
}

// ── cursor helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!((index, scroll), (3, 1));
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (4, 0);
    scroll_down(&mut index, &mut scroll, 5, 10);
    assert_eq!(index, 4);
}

#[test]
fn test_scroll_up_pulls_window() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
}

#[test]
fn test_clamp_index() {
    let mut index = 5;
    clamp_index(&mut index, 3);
    assert_eq!(index, 2);
    clamp_index(&mut index, 0);
    assert_eq!(index, 0);
}
