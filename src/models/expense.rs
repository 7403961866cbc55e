use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Category, Month, PaymentMode};

/// One synthetic expense record. Created by the generator, appended to the
/// month table, never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: Category,
    pub payment_mode: PaymentMode,
    pub description: String,
    pub amount_paid: Decimal,
    pub cashback: Decimal,
    /// Redundant with `date`'s month; the original schema carries it and the
    /// catalog's `GROUP BY Month` queries read it.
    pub month: Month,
}

impl Expense {
    pub(crate) fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
