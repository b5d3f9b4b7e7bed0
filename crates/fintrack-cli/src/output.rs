//! Report rendering: transaction tables, totals, and JSON payloads.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use fintrack_core::{RangeReport, Summary, Transaction};

use crate::ui::{styled, styles, UiContext};

/// Render an amount with two decimal places.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Build the transaction listing table, rows in store order.
pub fn transactions_table(transactions: &[Transaction]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Date", "Amount", "Category", "Description"]);

    for tx in transactions {
        table.add_row([
            Cell::new(fintrack_core::date::format_canonical(tx.date)),
            Cell::new(format_amount(tx.amount)).set_alignment(CellAlignment::Right),
            Cell::new(tx.category.label()),
            Cell::new(&tx.description),
        ]);
    }

    table
}

/// Print the three totals, two decimals each.
pub fn print_summary(ctx: &UiContext, summary: &Summary) {
    let label = |text: &str| styled(text, styles::dim(), ctx.color);
    println!(
        "{} {}",
        label("Total income: "),
        format_amount(summary.total_income)
    );
    println!(
        "{} {}",
        label("Total expense:"),
        format_amount(summary.total_expense)
    );
    println!(
        "{} {}",
        styled("Net balance:  ", styles::bold(), ctx.color),
        format_amount(summary.net_balance)
    );
}

/// Machine-readable payload for `report --json`.
///
/// `summary` is null when nothing matched, mirroring the textual
/// empty-result notice.
pub fn report_json(report: &RangeReport) -> serde_json::Value {
    serde_json::json!({
        "transactions": report.transactions,
        "skipped": report.skipped,
        "summary": report.summary(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fintrack_core::Category;

    fn tx(date: (i32, u32, u32), amount: f64, category: &str, description: &str) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            amount,
            category: Category::from(category),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(500.0), "500.00");
        assert_eq!(format_amount(49.999), "50.00");
        assert_eq!(format_amount(-12.5), "-12.50");
    }

    #[test]
    fn test_table_lists_rows_in_order() {
        let table = transactions_table(&[
            tx((2024, 1, 1), 500.0, "Income", "Salary"),
            tx((2024, 1, 5), 50.0, "Expense", "Food"),
        ]);

        let rendered = table.to_string();
        assert!(rendered.contains("01-01-2024"));
        assert!(rendered.contains("500.00"));
        assert!(rendered.contains("Salary"));
        let salary_at = rendered.find("Salary").unwrap();
        let food_at = rendered.find("Food").unwrap();
        assert!(salary_at < food_at);
    }

    #[test]
    fn test_report_json_with_matches() {
        let report = RangeReport {
            transactions: vec![tx((2024, 1, 1), 500.0, "Income", "Salary")],
            skipped: 1,
        };

        let value = report_json(&report);
        assert_eq!(value["skipped"], 1);
        assert_eq!(value["transactions"][0]["date"], "01-01-2024");
        assert_eq!(value["summary"]["total_income"], 500.0);
        assert_eq!(value["summary"]["net_balance"], 500.0);
    }

    #[test]
    fn test_report_json_empty_has_null_summary() {
        let report = RangeReport {
            transactions: Vec::new(),
            skipped: 0,
        };

        let value = report_json(&report);
        assert!(value["summary"].is_null());
        assert_eq!(value["transactions"].as_array().unwrap().len(), 0);
    }
}
