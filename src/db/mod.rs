mod schema;

use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::catalog::NamedQuery;
use crate::error::{Error, Result};
use crate::models::{Category, Expense, Month, PaymentMode};

/// Tabular result of an arbitrary read query: column names plus every row
/// rendered as display strings.
#[derive(Debug, Clone, Default)]
pub(crate) struct QueryOutput {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<Vec<String>>,
}

impl QueryOutput {
    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Preview table for a freshly generated batch, before any query runs.
    pub(crate) fn from_expenses(expenses: &[Expense]) -> Self {
        Self {
            columns: schema::MONTH_TABLE_COLUMN_NAMES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            rows: expenses
                .iter()
                .map(|e| {
                    vec![
                        e.date_str(),
                        e.category.to_string(),
                        e.payment_mode.to_string(),
                        e.description.clone(),
                        e.amount_paid.to_string(),
                        e.cashback.to_string(),
                        e.month.to_string(),
                    ]
                })
                .collect(),
        }
    }
}

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Idempotent schema setup: the version table, one table per month, and
    /// any registered migrations. Never drops or alters existing tables.
    fn migrate(&mut self) -> Result<()> {
        self.conn.execute_batch(schema::SCHEMA_VERSION_TABLE)?;

        for month in Month::ALL {
            let ddl = format!(
                "CREATE TABLE IF NOT EXISTS {} ({})",
                month.table_name(),
                schema::MONTH_TABLE_COLUMNS
            );
            self.conn.execute(&ddl, [])?;
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current == 0 {
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
        } else if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Append ────────────────────────────────────────────────

    /// Append a batch of records to the month table in one transaction.
    /// The table identifier comes from the `Month` enum; record values are
    /// bound as parameters.
    pub(crate) fn append_expenses(&mut self, expenses: &[Expense], month: Month) -> Result<usize> {
        let sql = format!(
            "INSERT INTO {} (Date, Category, Payment_Mode, Description, Amount_Paid, Cashback, Month)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            month.table_name()
        );

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(&sql)?;
            for expense in expenses {
                stmt.execute(params![
                    expense.date_str(),
                    expense.category.as_str(),
                    expense.payment_mode.as_str(),
                    expense.description,
                    expense.amount_paid.to_f64().unwrap_or(0.0),
                    expense.cashback.to_f64().unwrap_or(0.0),
                    expense.month.name(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(expenses.len())
    }

    // ── Typed readers ─────────────────────────────────────────

    pub(crate) fn month_expenses(&self, month: Month) -> Result<Vec<Expense>> {
        let sql = format!(
            "SELECT Date, Category, Payment_Mode, Description, Amount_Paid, Cashback, Month
             FROM {} ORDER BY Date, rowid",
            month.table_name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            let date_str: String = row.get(0)?;
            let category: String = row.get(1)?;
            let payment_mode: String = row.get(2)?;
            let amount: f64 = row.get(4)?;
            let cashback: f64 = row.get(5)?;
            let month_name: String = row.get(6)?;
            Ok(Expense {
                date: chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                    .map_err(|e| conversion_err(0, e))?,
                category: Category::from_str(&category).map_err(|e| conversion_err(1, e))?,
                payment_mode: PaymentMode::from_str(&payment_mode)
                    .map_err(|e| conversion_err(2, e))?,
                description: row.get(3)?,
                amount_paid: decimal_from_real(amount),
                cashback: decimal_from_real(cashback),
                month: Month::from_str(&month_name).map_err(|e| conversion_err(6, e))?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn month_row_count(&self, month: Month) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", month.table_name());
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }

    /// Per-category spending totals for one month, largest first. Backs the
    /// Insights charts.
    pub(crate) fn category_totals(&self, month: Month) -> Result<Vec<(String, Decimal)>> {
        let sql = format!(
            "SELECT Category, SUM(Amount_Paid) as Total_Spent
             FROM {} GROUP BY Category ORDER BY Total_Spent DESC",
            month.table_name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            let name: String = row.get(0)?;
            let total: f64 = row.get(1)?;
            Ok((name, decimal_from_real(total)))
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ── Arbitrary read queries ────────────────────────────────

    /// Execute user-supplied SQL after the read-only guard and return the
    /// result as displayable rows.
    pub(crate) fn run_select(&self, sql: &str) -> Result<QueryOutput> {
        ensure_read_only(sql)?;
        self.run_sql(sql)
    }

    /// Execute a catalog template against one month's table. Templates are
    /// read-only by contract, but they pass the same guard as ad-hoc input.
    pub(crate) fn run_named(&self, query: &NamedQuery, month: Month) -> Result<QueryOutput> {
        self.run_select(&crate::catalog::render_sql(query, month))
    }

    /// Full contents of one month table, in insertion-friendly order.
    pub(crate) fn view_month(&self, month: Month) -> Result<QueryOutput> {
        self.run_sql(&format!(
            "SELECT * FROM {} ORDER BY Date, rowid",
            month.table_name()
        ))
    }

    fn run_sql(&self, sql: &str) -> Result<QueryOutput> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let column_count = columns.len();

        let mut out_rows = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut rendered = Vec::with_capacity(column_count);
            for i in 0..column_count {
                rendered.push(render_value(row.get_ref(i)?));
            }
            out_rows.push(rendered);
        }

        Ok(QueryOutput {
            columns,
            rows: out_rows,
        })
    }

    // ── Export ────────────────────────────────────────────────

    /// Write one month table to a CSV file. Returns the row count.
    pub(crate) fn export_month_csv(&self, month: Month, path: &Path) -> Result<usize> {
        let expenses = self.month_expenses(month)?;
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(schema::MONTH_TABLE_COLUMN_NAMES)?;
        for expense in &expenses {
            writer.write_record([
                expense.date_str(),
                expense.category.to_string(),
                expense.payment_mode.to_string(),
                expense.description.clone(),
                expense.amount_paid.to_string(),
                expense.cashback.to_string(),
                expense.month.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(expenses.len())
    }
}

/// Reject anything but a single SELECT/WITH statement. The check is
/// best-effort: the database file is still local and single-user, but a
/// stray UPDATE pasted into the query box should bounce, not mutate.
pub(crate) fn ensure_read_only(sql: &str) -> Result<()> {
    let body = sql.trim().trim_end_matches(';').trim_end();
    if body.is_empty() || body.contains(';') {
        return Err(Error::NotReadOnly);
    }
    if !select_prefix().is_match(body) || write_keywords().is_match(body) {
        return Err(Error::NotReadOnly);
    }
    Ok(())
}

fn select_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Literal pattern; compilation cannot fail at runtime.
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"(?i)^\s*(select|with)\b").expect("literal pattern"))
}

fn write_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(insert|update|delete|drop|alter|create|replace|attach|detach|pragma|vacuum|reindex|begin|commit|rollback)\b",
        )
        .expect("literal pattern")
    })
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => format!("{r:.2}"),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<{} byte blob>", b.len()),
    }
}

/// REAL columns come back as f64; snap to two decimal places, which is the
/// precision every stored amount was generated with.
fn decimal_from_real(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default().round_dp(2)
}

fn conversion_err(
    idx: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

#[cfg(test)]
mod tests;
