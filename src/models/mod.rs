mod category;
mod expense;
mod month;
mod payment;

pub use category::Category;
pub use expense::Expense;
pub use month::{Month, DATA_YEAR};
pub use payment::PaymentMode;

#[cfg(test)]
mod tests;
