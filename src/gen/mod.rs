use rand::Rng;
use rust_decimal::Decimal;

use crate::models::{Category, Expense, Month, PaymentMode};

/// Records produced per Generate action.
pub(crate) const BATCH_SIZE: usize = 100;

/// Amount bounds in cents: [10.00, 500.00].
const AMOUNT_CENTS: std::ops::RangeInclusive<i64> = 1_000..=50_000;
/// Cashback bounds in cents: [0.00, 20.00].
const CASHBACK_CENTS: std::ops::RangeInclusive<i64> = 0..=2_000;

const DESCRIPTION_WORDS: &[&str] = &[
    "weekly", "quick", "family", "late", "online", "card", "grocery", "dinner",
    "ticket", "refill", "monthly", "shared", "morning", "airport", "pharmacy",
    "order", "payment", "topup", "season", "class", "commute", "snack",
    "store", "visit", "evening", "weekend", "bulk", "repair", "service",
    "trip", "booking", "renewal", "checkup", "outing", "pass", "delivery",
];

const DESCRIPTION_LEN: usize = 6;

/// Generate `count` random expense records for `month`. Every field is drawn
/// independently and uniformly; dates cover the true length of the month in
/// 2024. Amounts are drawn as integer cents, so they carry exactly two
/// decimal places.
pub(crate) fn generate_batch(month: Month, count: usize) -> Vec<Expense> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_expense(&mut rng, month)).collect()
}

fn random_expense(rng: &mut impl Rng, month: Month) -> Expense {
    let day = rng.gen_range(1..=month.day_count());
    Expense {
        date: month.date(day).unwrap_or_default(),
        category: Category::ALL[rng.gen_range(0..Category::ALL.len())],
        payment_mode: PaymentMode::ALL[rng.gen_range(0..PaymentMode::ALL.len())],
        description: random_sentence(rng),
        amount_paid: Decimal::new(rng.gen_range(AMOUNT_CENTS), 2),
        cashback: Decimal::new(rng.gen_range(CASHBACK_CENTS), 2),
        month,
    }
}

/// Faker-style filler sentence: six random pool words, capitalized, with a
/// trailing period.
fn random_sentence(rng: &mut impl Rng) -> String {
    let mut words: Vec<&str> = (0..DESCRIPTION_LEN)
        .map(|_| DESCRIPTION_WORDS[rng.gen_range(0..DESCRIPTION_WORDS.len())])
        .collect();

    let mut sentence = String::new();
    if let Some(first) = words.first_mut() {
        let mut chars = first.chars();
        if let Some(c) = chars.next() {
            sentence.push(c.to_ascii_uppercase());
            sentence.push_str(chars.as_str());
        }
    }
    for word in &words[1..] {
        sentence.push(' ');
        sentence.push_str(word);
    }
    sentence.push('.');
    sentence
}

#[cfg(test)]
mod tests;
