#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use super::*;
use crate::error::Error;

#[test]
fn test_catalog_size_and_unique_names() {
    assert_eq!(CATALOG.len(), 29);
    let names: HashSet<&str> = CATALOG.iter().map(|q| q.name).collect();
    assert_eq!(names.len(), CATALOG.len());
}

#[test]
fn test_every_template_has_one_placeholder() {
    for query in CATALOG {
        assert_eq!(
            query.sql.matches("{table}").count(),
            1,
            "bad template: {}",
            query.name
        );
    }
}

#[test]
fn test_every_template_is_a_select() {
    for query in CATALOG {
        assert!(
            query.sql.trim_start().to_ascii_uppercase().starts_with("SELECT"),
            "not a select: {}",
            query.name
        );
    }
}

#[test]
fn test_find_known_and_unknown() {
    let q = find("Total Cashback Earned").unwrap();
    assert!(q.sql.contains("SUM(Cashback)"));

    let err = find("Total Cashback").unwrap_err();
    assert!(matches!(err, Error::UnknownQuery(_)));
    assert!(err.is_validation());
}

#[test]
fn test_render_sql_substitutes_table() {
    let q = find("Top 5 Highest Spending Transactions").unwrap();
    let sql = render_sql(q, Month::February);
    assert_eq!(sql, "SELECT * FROM february ORDER BY Amount_Paid DESC LIMIT 5");
    assert!(!sql.contains('{'));
}

#[test]
fn test_render_sql_never_leaves_braces() {
    for query in CATALOG {
        for month in Month::ALL {
            let sql = render_sql(query, month);
            assert!(!sql.contains('{') && !sql.contains('}'));
            assert!(sql.contains(month.table_name()));
        }
    }
}
