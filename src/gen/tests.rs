#![allow(clippy::unwrap_used)]

use chrono::Datelike;
use rust_decimal_macros::dec;

use super::*;

#[test]
fn test_batch_size() {
    let batch = generate_batch(Month::January, BATCH_SIZE);
    assert_eq!(batch.len(), 100);

    assert!(generate_batch(Month::May, 0).is_empty());
    assert_eq!(generate_batch(Month::May, 7).len(), 7);
}

#[test]
fn test_dates_stay_inside_month() {
    for month in Month::ALL {
        let batch = generate_batch(month, 200);
        for expense in &batch {
            assert_eq!(expense.date.year(), 2024);
            assert_eq!(expense.date.month(), month.number());
            assert!(expense.date.day() >= 1);
            assert!(expense.date.day() <= month.day_count());
            assert_eq!(expense.month, month);
        }
    }
}

#[test]
fn test_february_can_reach_leap_day() {
    // 400 draws over 29 days: the chance of never hitting day 29 is
    // (28/29)^400, well under one in a million.
    let batch = generate_batch(Month::February, 400);
    assert!(batch.iter().any(|e| e.date.day() == 29));
    assert!(batch.iter().all(|e| e.date.day() <= 29));
}

#[test]
fn test_amounts_in_range_with_two_decimals() {
    let batch = generate_batch(Month::June, 500);
    for expense in &batch {
        assert!(expense.amount_paid >= dec!(10.00));
        assert!(expense.amount_paid <= dec!(500.00));
        assert!(expense.cashback >= dec!(0.00));
        assert!(expense.cashback <= dec!(20.00));
        assert!(expense.amount_paid.scale() <= 2);
        assert!(expense.cashback.scale() <= 2);
    }
}

#[test]
fn test_enum_fields_drawn_from_full_sets() {
    // 500 draws over 10 categories / 6 modes should hit every value.
    let batch = generate_batch(Month::October, 500);
    for cat in Category::ALL {
        assert!(batch.iter().any(|e| e.category == cat), "missing {cat}");
    }
    for mode in PaymentMode::ALL {
        assert!(batch.iter().any(|e| e.payment_mode == mode), "missing {mode}");
    }
}

#[test]
fn test_description_shape() {
    let batch = generate_batch(Month::March, 50);
    for expense in &batch {
        assert!(expense.description.ends_with('.'));
        assert_eq!(expense.description.split_whitespace().count(), 6);
        let first = expense.description.chars().next().unwrap();
        assert!(first.is_ascii_uppercase());
    }
}
