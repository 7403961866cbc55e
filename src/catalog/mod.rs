use crate::error::{Error, Result};
use crate::models::Month;

/// A named read-only SQL template. `sql` contains exactly one `{table}`
/// placeholder, substituted with `Month::table_name()` before execution.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NamedQuery {
    pub(crate) name: &'static str,
    pub(crate) sql: &'static str,
}

const TABLE_PLACEHOLDER: &str = "{table}";

/// The predefined query catalog, in display order. Adding an entry here is
/// the whole change needed to expose a new query.
pub(crate) const CATALOG: &[NamedQuery] = &[
    NamedQuery {
        name: "Total Spending by Category",
        sql: "SELECT Category, SUM(Amount_Paid) as Total_Spent FROM {table} GROUP BY Category",
    },
    NamedQuery {
        name: "Top 5 Highest Spending Transactions",
        sql: "SELECT * FROM {table} ORDER BY Amount_Paid DESC LIMIT 5",
    },
    NamedQuery {
        name: "Total Cashback Earned",
        sql: "SELECT SUM(Cashback) as Total_Cashback FROM {table}",
    },
    NamedQuery {
        name: "Monthly Spending Breakdown",
        sql: "SELECT Month, SUM(Amount_Paid) as Total_Spent FROM {table} GROUP BY Month",
    },
    NamedQuery {
        name: "Average Transaction Amount",
        sql: "SELECT AVG(Amount_Paid) as Average_Transaction FROM {table}",
    },
    NamedQuery {
        name: "Total Spending Per Payment Mode",
        sql: "SELECT Payment_Mode, SUM(Amount_Paid) as Total_Spent FROM {table} GROUP BY Payment_Mode",
    },
    NamedQuery {
        name: "Transaction Count by Category",
        sql: "SELECT Category, COUNT(*) as Transaction_Count FROM {table} GROUP BY Category",
    },
    NamedQuery {
        name: "Total Spending on Groceries",
        sql: "SELECT SUM(Amount_Paid) as Grocery_Spending FROM {table} WHERE Category = 'Groceries'",
    },
    NamedQuery {
        name: "Highest Cashback Transactions",
        sql: "SELECT * FROM {table} WHERE Cashback > 0 ORDER BY Cashback DESC LIMIT 5",
    },
    NamedQuery {
        name: "Daily Spending Breakdown",
        sql: "SELECT Date, SUM(Amount_Paid) as Total_Spent FROM {table} GROUP BY Date ORDER BY Date ASC",
    },
    NamedQuery {
        name: "Spending on Food and Dining",
        sql: "SELECT SUM(Amount_Paid) as Food_And_Dining_Spending FROM {table} WHERE Category IN ('Food', 'Dining')",
    },
    NamedQuery {
        name: "Categories with Cashback",
        sql: "SELECT Category, SUM(Cashback) as Total_Cashback FROM {table} GROUP BY Category",
    },
    NamedQuery {
        name: "Spending Above 300",
        sql: "SELECT * FROM {table} WHERE Amount_Paid > 300 ORDER BY Amount_Paid DESC",
    },
    NamedQuery {
        name: "Transaction Count by Payment Mode",
        sql: "SELECT Payment_Mode, COUNT(*) as Transaction_Count FROM {table} GROUP BY Payment_Mode",
    },
    NamedQuery {
        name: "Top 3 Days with Highest Spending",
        sql: "SELECT Date, SUM(Amount_Paid) as Total_Spent FROM {table} GROUP BY Date ORDER BY Total_Spent DESC LIMIT 3",
    },
    NamedQuery {
        name: "Lowest Spending Days",
        sql: "SELECT Date, SUM(Amount_Paid) as Total_Spent FROM {table} GROUP BY Date ORDER BY Total_Spent ASC LIMIT 5",
    },
    NamedQuery {
        name: "Spending on Transportation",
        sql: "SELECT SUM(Amount_Paid) as Transportation_Spending FROM {table} WHERE Category = 'Transportation'",
    },
    NamedQuery {
        name: "Transactions with Cashback",
        sql: "SELECT * FROM {table} WHERE Cashback > 0",
    },
    NamedQuery {
        name: "Spending Trends by Week",
        sql: "SELECT strftime('%W', Date) as Week, SUM(Amount_Paid) as Total_Spent FROM {table} GROUP BY Week",
    },
    NamedQuery {
        name: "Maximum Spending per Category",
        sql: "SELECT Category, MAX(Amount_Paid) as Max_Spent FROM {table} GROUP BY Category",
    },
    NamedQuery {
        name: "Cash Transactions Only",
        sql: "SELECT * FROM {table} WHERE Payment_Mode = 'Cash'",
    },
    NamedQuery {
        name: "Online Transactions Only",
        sql: "SELECT * FROM {table} WHERE Payment_Mode = 'Online'",
    },
    NamedQuery {
        name: "Spending on Entertainment",
        sql: "SELECT SUM(Amount_Paid) as Entertainment_Spending FROM {table} WHERE Category = 'Entertainment'",
    },
    NamedQuery {
        name: "Total Transactions per Month",
        sql: "SELECT Month, COUNT(*) as Transaction_Count FROM {table} GROUP BY Month",
    },
    NamedQuery {
        name: "Average Cashback Earned",
        sql: "SELECT AVG(Cashback) as Avg_Cashback FROM {table}",
    },
    NamedQuery {
        name: "High Spending Categories",
        sql: "SELECT Category, SUM(Amount_Paid) as Total_Spent FROM {table} GROUP BY Category HAVING Total_Spent > 1000",
    },
    NamedQuery {
        name: "Transactions with No Cashback",
        sql: "SELECT * FROM {table} WHERE Cashback = 0",
    },
    NamedQuery {
        name: "Spending Split by Payment Mode",
        sql: "SELECT Payment_Mode, SUM(Amount_Paid) as Total_Spent FROM {table} GROUP BY Payment_Mode ORDER BY Total_Spent DESC",
    },
    NamedQuery {
        name: "Spending Summary",
        sql: "SELECT Category, Payment_Mode, SUM(Amount_Paid) as Total_Spent FROM {table} GROUP BY Category, Payment_Mode ORDER BY Total_Spent DESC",
    },
];

/// Look up a catalog entry by its exact display name.
pub(crate) fn find(name: &str) -> Result<&'static NamedQuery> {
    CATALOG
        .iter()
        .find(|q| q.name == name)
        .ok_or_else(|| Error::UnknownQuery(name.to_string()))
}

/// Substitute the table placeholder. The identifier comes from the `Month`
/// enum, never from user text.
pub(crate) fn render_sql(query: &NamedQuery, month: Month) -> String {
    query.sql.replace(TABLE_PLACEHOLDER, month.table_name())
}

#[cfg(test)]
mod tests;
