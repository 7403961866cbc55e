use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::catalog;
use crate::db::{Database, QueryOutput};
use crate::gen;
use crate::models::Month;

pub(crate) fn as_cli(args: &[String], db: &mut Database) -> Result<()> {
    match args[1].as_str() {
        "generate" | "g" => cli_generate(&args[2..], db),
        "view" => cli_view(&args[2..], db),
        "summary" | "s" => cli_summary(&args[2..], db),
        "query" | "q" => cli_query(&args[2..], db),
        "run" => cli_run(&args[2..], db),
        "queries" => {
            cli_queries();
            Ok(())
        }
        "export" => cli_export(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expensetui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("ExpenseTUI — local synthetic expense dashboard");
    println!();
    println!("Usage: expensetui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive dashboard");
    println!("  generate <month>              Generate and load 100 records for a month");
    println!("  view <month>                  Print a month's records");
    println!("  summary <month>               Print a month's spending summary");
    println!("  query <sql>                   Run a read-only SQL query");
    println!("  run <query-name> <month>      Run a predefined query against a month");
    println!("  queries                       List predefined queries");
    println!("  export <month> [path]         Export a month's records to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn parse_month(args: &[String], usage: &str) -> Result<Month> {
    let name = args.first().ok_or_else(|| anyhow::anyhow!("{usage}"))?;
    Ok(Month::from_str(name)?)
}

fn cli_generate(args: &[String], db: &mut Database) -> Result<()> {
    let month = parse_month(args, "Usage: expensetui generate <month>")?;
    let batch = gen::generate_batch(month, gen::BATCH_SIZE);
    let written = db.append_expenses(&batch, month)?;
    println!("Generated and loaded {written} records for {month}");
    println!();
    print_table(&QueryOutput::from_expenses(&batch[..5.min(batch.len())]));
    Ok(())
}

fn cli_view(args: &[String], db: &mut Database) -> Result<()> {
    let month = parse_month(args, "Usage: expensetui view <month>")?;
    let out = db.view_month(month)?;
    if out.is_empty() {
        println!("No records for {month}");
    } else {
        print_table(&out);
        println!("{} records", out.rows.len());
    }
    Ok(())
}

fn cli_summary(args: &[String], db: &mut Database) -> Result<()> {
    let month = parse_month(args, "Usage: expensetui summary <month>")?;
    let expenses = db.month_expenses(month)?;
    let total_spent: Decimal = expenses.iter().map(|e| e.amount_paid).sum();
    let total_cashback: Decimal = expenses.iter().map(|e| e.cashback).sum();

    println!("ExpenseTUI — {month} 2024");
    println!("{}", "─".repeat(40));
    println!("  Records:        {}", expenses.len());
    println!("  Total Spent:    ${total_spent:.2}");
    println!("  Total Cashback: ${total_cashback:.2}");
    if !expenses.is_empty() {
        let avg = total_spent / Decimal::from(expenses.len());
        println!("  Avg Amount:     ${:.2}", avg.round_dp(2));
    }

    let totals = db.category_totals(month)?;
    if !totals.is_empty() {
        println!();
        println!("Spending by Category:");
        for (name, amount) in &totals {
            println!("  {name:<16} ${amount:.2}");
        }
    }
    Ok(())
}

fn cli_query(args: &[String], db: &mut Database) -> Result<()> {
    let sql = args.join(" ");
    if sql.trim().is_empty() {
        anyhow::bail!("Usage: expensetui query <sql>");
    }
    let out = db.run_select(&sql)?;
    print_table(&out);
    println!("{} rows", out.rows.len());
    Ok(())
}

fn cli_run(args: &[String], db: &mut Database) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: expensetui run <query-name> <month>");
    }
    let month = Month::from_str(&args[args.len() - 1])?;
    let name = args[..args.len() - 1].join(" ");
    let query = catalog::find(&name)?;
    let out = db.run_named(query, month)?;
    println!("{} — {month}", query.name);
    print_table(&out);
    Ok(())
}

fn cli_queries() {
    println!("Predefined queries:");
    for query in catalog::CATALOG {
        println!("  {}", query.name);
    }
}

fn cli_export(args: &[String], db: &mut Database) -> Result<()> {
    let month = parse_month(args, "Usage: expensetui export <month> [path]")?;
    let path = args
        .get(1)
        .map(|p| shellexpand(p))
        .unwrap_or_else(|| format!("expensetui-{}.csv", month.table_name()));
    let count = db.export_month_csv(month, Path::new(&path))?;
    if count == 0 {
        println!("No records for {month}");
    } else {
        println!("Exported {count} records to {path}");
    }
    Ok(())
}

/// Print a result set as a fixed-width text table.
fn print_table(out: &QueryOutput) {
    if out.columns.is_empty() {
        return;
    }

    let widths: Vec<usize> = out
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let cell_max = out
                .rows
                .iter()
                .map(|r| r.get(i).map_or(0, |c| c.chars().count()))
                .max()
                .unwrap_or(0);
            col.chars().count().max(cell_max).min(40)
        })
        .collect();

    let header: Vec<String> = out
        .columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!("{c:<w$}"))
        .collect();
    println!("{}", header.join("  "));
    println!("{}", "─".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));

    for row in &out.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| {
                let clipped = crate::ui::util::truncate(c, *w);
                format!("{clipped:<w$}")
            })
            .collect();
        println!("{}", cells.join("  "));
    }
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
