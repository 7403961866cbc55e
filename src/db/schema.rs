/// Columns shared by all twelve month tables. Kept identical to the original
/// dataset layout: no surrogate key, seven columns, append-only.
pub(crate) const MONTH_TABLE_COLUMNS: &str = "
    Date         TEXT NOT NULL,
    Category     TEXT NOT NULL,
    Payment_Mode TEXT NOT NULL,
    Description  TEXT NOT NULL,
    Amount_Paid  REAL NOT NULL,
    Cashback     REAL NOT NULL,
    Month        TEXT NOT NULL
";

/// Column names in declaration order, used by exports and sanity checks.
pub(crate) const MONTH_TABLE_COLUMN_NAMES: [&str; 7] = [
    "Date",
    "Category",
    "Payment_Mode",
    "Description",
    "Amount_Paid",
    "Cashback",
    "Month",
];

pub(crate) const SCHEMA_VERSION_TABLE: &str = "
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);
";

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Migrations from version N to N+1.
/// Each entry is (from_version, sql).
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[
    // Future migrations go here:
    // (1, "CREATE INDEX IF NOT EXISTS idx_january_date ON january(Date);"),
];
