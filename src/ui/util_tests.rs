#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
    assert_eq!(format_amount(dec!(12.34)), "$12.34");
    assert_eq!(format_amount(dec!(999.99)), "$999.99");
}

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
    assert_eq!(format_amount(dec!(-1000)), "-$1,000.00");
}

#[test]
fn test_format_amount_rounding_display() {
    assert_eq!(format_amount(dec!(5.1)), "$5.10");
    assert_eq!(format_amount(dec!(5.125)), "$5.13");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 8), "hello w…");
    assert_eq!(truncate("hello", 3), "he…");
}

#[test]
fn test_truncate_zero_and_one() {
    assert_eq!(truncate("hello", 0), "");
    assert_eq!(truncate("hello", 1), "…");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("日本語テキスト", 4), "日本語…");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_and_clamps() {
    let (mut index, mut scroll) = (0, 0);
    scroll_down(&mut index, &mut scroll, 3, 10);
    assert_eq!((index, scroll), (1, 0));
    scroll_down(&mut index, &mut scroll, 3, 10);
    scroll_down(&mut index, &mut scroll, 3, 10);
    // Clamped at the last entry.
    assert_eq!((index, scroll), (2, 0));
}

#[test]
fn test_scroll_down_adjusts_scroll_past_page() {
    let (mut index, mut scroll) = (4, 0);
    scroll_down(&mut index, &mut scroll, 20, 5);
    assert_eq!((index, scroll), (5, 1));
}

#[test]
fn test_scroll_up_and_top() {
    let (mut index, mut scroll) = (5, 5);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (4, 4));

    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 50, 10);
    assert_eq!((index, scroll), (49, 40));

    scroll_to_bottom(&mut index, &mut scroll, 0, 10);
    // Empty list leaves the cursor alone.
    assert_eq!(index, 49);
}
