#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::catalog;
use crate::gen;

fn make_expense(month: Month, day: u32, amount: Decimal, cashback: Decimal) -> Expense {
    Expense {
        date: month.date(day).unwrap(),
        category: Category::Groceries,
        payment_mode: PaymentMode::Cash,
        description: "Weekly grocery store visit payment order.".into(),
        amount_paid: amount,
        cashback,
        month,
    }
}

// ── Schema ────────────────────────────────────────────────────

#[test]
fn test_all_month_tables_exist_with_declared_columns() {
    let db = Database::open_in_memory().unwrap();
    for month in Month::ALL {
        let mut stmt = db
            .conn
            .prepare(&format!("PRAGMA table_info({})", month.table_name()))
            .unwrap();
        let cols: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(cols, schema::MONTH_TABLE_COLUMN_NAMES);
    }
}

#[test]
fn test_schema_version_set() {
    let db = Database::open_in_memory().unwrap();
    let version: i32 = db
        .conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
}

#[test]
fn test_double_migrate_idempotent() {
    let mut db = Database::open_in_memory().unwrap();
    db.migrate().unwrap();
    let count: i64 = db
        .conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_reopen_preserves_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expensetui.db");

    {
        let mut db = Database::open(&path).unwrap();
        let batch = vec![make_expense(Month::April, 10, dec!(25.00), dec!(1.00))];
        db.append_expenses(&batch, Month::April).unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.month_row_count(Month::April).unwrap(), 1);
}

// ── Append / round trip ───────────────────────────────────────

#[test]
fn test_append_then_fetch_round_trip() {
    let mut db = Database::open_in_memory().unwrap();
    let batch = gen::generate_batch(Month::January, 100);
    let written = db.append_expenses(&batch, Month::January).unwrap();
    assert_eq!(written, 100);

    let mut fetched = db.month_expenses(Month::January).unwrap();
    assert_eq!(fetched.len(), 100);

    // month_expenses orders by date; compare as sorted multisets.
    let mut expected = batch.clone();
    let key = |e: &Expense| (e.date, e.description.clone(), e.amount_paid);
    expected.sort_by_key(key);
    fetched.sort_by_key(key);
    assert_eq!(fetched, expected);
}

#[test]
fn test_months_are_isolated() {
    let mut db = Database::open_in_memory().unwrap();
    let batch = vec![make_expense(Month::March, 3, dec!(99.99), dec!(0.50))];
    db.append_expenses(&batch, Month::March).unwrap();

    assert_eq!(db.month_row_count(Month::March).unwrap(), 1);
    for month in Month::ALL {
        if month != Month::March {
            assert_eq!(db.month_row_count(month).unwrap(), 0);
        }
    }
}

#[test]
fn test_append_empty_batch() {
    let mut db = Database::open_in_memory().unwrap();
    assert_eq!(db.append_expenses(&[], Month::July).unwrap(), 0);
    assert_eq!(db.month_row_count(Month::July).unwrap(), 0);
}

// ── Typed readers ─────────────────────────────────────────────

#[test]
fn test_category_totals_grouped_and_sorted() {
    let mut db = Database::open_in_memory().unwrap();
    let mut a = make_expense(Month::May, 1, dec!(100.00), dec!(1.00));
    a.category = Category::Travel;
    let mut b = make_expense(Month::May, 2, dec!(40.00), dec!(1.00));
    b.category = Category::Food;
    let mut c = make_expense(Month::May, 3, dec!(60.00), dec!(1.00));
    c.category = Category::Food;
    db.append_expenses(&[a, b, c], Month::May).unwrap();

    let totals = db.category_totals(Month::May).unwrap();
    assert_eq!(totals.len(), 2);
    // Equal totals; order between them is unspecified but both appear.
    assert!(totals.contains(&("Travel".to_string(), dec!(100.00))));
    assert!(totals.contains(&("Food".to_string(), dec!(100.00))));
}

#[test]
fn test_category_totals_empty_month() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.category_totals(Month::November).unwrap().is_empty());
}

#[test]
fn test_view_month_empty_has_all_columns() {
    let db = Database::open_in_memory().unwrap();
    let out = db.view_month(Month::September).unwrap();
    assert!(out.is_empty());
    assert_eq!(out.columns, schema::MONTH_TABLE_COLUMN_NAMES);
}

// ── Ad-hoc queries ────────────────────────────────────────────

#[test]
fn test_run_select_renders_rows() {
    let mut db = Database::open_in_memory().unwrap();
    let batch = vec![make_expense(Month::June, 15, dec!(123.45), dec!(6.70))];
    db.append_expenses(&batch, Month::June).unwrap();

    let out = db.run_select("SELECT Date, Amount_Paid, Cashback FROM june").unwrap();
    assert_eq!(out.columns, ["Date", "Amount_Paid", "Cashback"]);
    assert_eq!(out.rows, [["2024-06-15", "123.45", "6.70"]]);
}

#[test]
fn test_run_select_allows_cte() {
    let db = Database::open_in_memory().unwrap();
    let out = db
        .run_select("WITH t(n) AS (SELECT 1) SELECT n FROM t")
        .unwrap();
    assert_eq!(out.rows, [["1"]]);
}

#[test]
fn test_run_select_rejects_writes() {
    let db = Database::open_in_memory().unwrap();
    for sql in [
        "DELETE FROM january",
        "INSERT INTO january VALUES ('x','Food','Cash','d',1.0,0.0,'January')",
        "UPDATE january SET Cashback = 0",
        "DROP TABLE january",
        "PRAGMA journal_mode=DELETE",
        "SELECT 1; DROP TABLE january",
        "",
    ] {
        let err = db.run_select(sql).unwrap_err();
        assert!(matches!(err, Error::NotReadOnly), "accepted: {sql}");
    }
    // Nothing was mutated along the way.
    assert_eq!(db.month_row_count(Month::January).unwrap(), 0);
}

#[test]
fn test_run_select_surfaces_sql_errors() {
    let db = Database::open_in_memory().unwrap();
    let err = db.run_select("SELECT * FROM no_such_table").unwrap_err();
    assert!(matches!(err, Error::Sqlite(_)));
    assert!(!err.is_validation());
}

#[test]
fn test_ensure_read_only_trailing_semicolon_ok() {
    assert!(ensure_read_only("SELECT * FROM january;").is_ok());
    assert!(ensure_read_only("  select 1  ").is_ok());
}

// ── Catalog execution ─────────────────────────────────────────

#[test]
fn test_every_catalog_query_runs_on_empty_table() {
    let db = Database::open_in_memory().unwrap();
    for query in catalog::CATALOG {
        let out = db.run_named(query, Month::March);
        assert!(out.is_ok(), "failed: {}", query.name);
        assert!(!out.unwrap().columns.is_empty(), "no columns: {}", query.name);
    }
}

#[test]
fn test_total_cashback_matches_generated_sum() {
    let mut db = Database::open_in_memory().unwrap();
    let batch = gen::generate_batch(Month::January, 100);
    db.append_expenses(&batch, Month::January).unwrap();

    let expected: Decimal = batch.iter().map(|e| e.cashback).sum();
    let query = catalog::find("Total Cashback Earned").unwrap();
    let out = db.run_named(query, Month::January).unwrap();
    assert_eq!(out.columns, ["Total_Cashback"]);
    assert_eq!(out.rows.len(), 1);

    let total: f64 = out.rows[0][0].parse().unwrap();
    let expected_f = expected.to_f64().unwrap();
    assert!((total - expected_f).abs() < 0.01, "{total} vs {expected_f}");
}

#[test]
fn test_top_spending_query_orders_descending() {
    let mut db = Database::open_in_memory().unwrap();
    let batch = vec![
        make_expense(Month::August, 1, dec!(50.00), dec!(0.00)),
        make_expense(Month::August, 2, dec!(400.00), dec!(0.00)),
        make_expense(Month::August, 3, dec!(125.00), dec!(0.00)),
    ];
    db.append_expenses(&batch, Month::August).unwrap();

    let query = catalog::find("Top 5 Highest Spending Transactions").unwrap();
    let out = db.run_named(query, Month::August).unwrap();
    assert_eq!(out.rows.len(), 3);
    let amounts: Vec<f64> = out
        .rows
        .iter()
        .map(|r| r[4].parse::<f64>().unwrap())
        .collect();
    assert_eq!(amounts, [400.00, 125.00, 50.00]);
}

// ── Export ────────────────────────────────────────────────────

#[test]
fn test_export_month_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("january.csv");

    let mut db = Database::open_in_memory().unwrap();
    let batch = vec![
        make_expense(Month::January, 5, dec!(20.00), dec!(0.25)),
        make_expense(Month::January, 9, dec!(30.00), dec!(0.75)),
    ];
    db.append_expenses(&batch, Month::January).unwrap();

    let count = db.export_month_csv(Month::January, &path).unwrap();
    assert_eq!(count, 2);

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Date,Category,Payment_Mode,Description,Amount_Paid,Cashback,Month"
    );
    assert_eq!(lines.count(), 2);
    assert!(contents.contains("2024-01-05"));
}

#[test]
fn test_export_empty_month() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.export_month_csv(Month::December, &path).unwrap(), 0);
}
