#![allow(clippy::unwrap_used)]

use std::str::FromStr;

use rust_decimal_macros::dec;

use super::*;
use crate::error::Error;

// ── Month ─────────────────────────────────────────────────────

#[test]
fn test_month_all_twelve() {
    assert_eq!(Month::ALL.len(), 12);
    assert_eq!(Month::ALL[0], Month::January);
    assert_eq!(Month::ALL[11], Month::December);
}

#[test]
fn test_month_parse_any_case() {
    assert_eq!(Month::from_str("January").unwrap(), Month::January);
    assert_eq!(Month::from_str("january").unwrap(), Month::January);
    assert_eq!(Month::from_str("AUGUST").unwrap(), Month::August);
    assert_eq!(Month::from_str("  march ").unwrap(), Month::March);
}

#[test]
fn test_month_parse_unknown() {
    let err = Month::from_str("Janubry").unwrap_err();
    assert!(matches!(err, Error::UnknownMonth(_)));
    assert!(err.is_validation());

    assert!(Month::from_str("").is_err());
    assert!(Month::from_str("Jan").is_err());
}

#[test]
fn test_month_table_name_lowercase() {
    for month in Month::ALL {
        assert_eq!(month.table_name(), month.name().to_lowercase());
    }
}

#[test]
fn test_month_numbers_sequential() {
    for (i, month) in Month::ALL.into_iter().enumerate() {
        assert_eq!(month.number(), i as u32 + 1);
    }
}

#[test]
fn test_month_day_counts() {
    // 2024 is a leap year
    assert_eq!(Month::February.day_count(), 29);
    assert_eq!(Month::January.day_count(), 31);
    assert_eq!(Month::April.day_count(), 30);
    assert_eq!(Month::December.day_count(), 31);

    let total: u32 = Month::ALL.iter().map(|m| m.day_count()).sum();
    assert_eq!(total, 366);
}

#[test]
fn test_month_date_bounds() {
    assert!(Month::February.date(29).is_some());
    assert!(Month::February.date(30).is_none());
    assert!(Month::June.date(0).is_none());
    let d = Month::June.date(30).unwrap();
    assert_eq!(d.format("%Y-%m-%d").to_string(), "2024-06-30");
}

#[test]
fn test_month_roundtrip() {
    for month in Month::ALL {
        assert_eq!(Month::from_str(month.name()).unwrap(), month);
        assert_eq!(Month::from_str(month.table_name()).unwrap(), month);
    }
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_set_size() {
    assert_eq!(Category::ALL.len(), 10);
}

#[test]
fn test_category_roundtrip() {
    for cat in Category::ALL {
        assert_eq!(Category::from_str(cat.as_str()).unwrap(), cat);
    }
}

#[test]
fn test_category_parse_is_exact() {
    // Stored values are always canonical; parsing is case-sensitive.
    assert!(Category::from_str("food").is_err());
    assert!(matches!(
        Category::from_str("Rent").unwrap_err(),
        Error::UnknownCategory(_)
    ));
}

// ── PaymentMode ───────────────────────────────────────────────

#[test]
fn test_payment_mode_set_size() {
    assert_eq!(PaymentMode::ALL.len(), 6);
}

#[test]
fn test_payment_mode_roundtrip() {
    for mode in PaymentMode::ALL {
        assert_eq!(PaymentMode::from_str(mode.as_str()).unwrap(), mode);
    }
}

#[test]
fn test_payment_mode_display() {
    assert_eq!(format!("{}", PaymentMode::CreditCard), "Credit Card");
    assert_eq!(format!("{}", PaymentMode::NetBanking), "NetBanking");
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_expense_date_str() {
    let expense = Expense {
        date: Month::January.date(5).unwrap(),
        category: Category::Food,
        payment_mode: PaymentMode::Cash,
        description: "Quick snack order before commute.".into(),
        amount_paid: dec!(42.50),
        cashback: dec!(1.25),
        month: Month::January,
    };
    assert_eq!(expense.date_str(), "2024-01-05");
}
