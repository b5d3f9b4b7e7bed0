//! Report command: range query, listing, and totals.

use std::io::IsTerminal;

use fintrack_core::{date, transactions_in_range, DateRange};

use crate::app::AppContext;
use crate::cli::ReportArgs;
use crate::output::{print_summary, report_json, transactions_table};
use crate::ui::{print_info, print_warning, prompt_validated, styled, styles, UiContext};

pub fn handle_report(ctx: &AppContext, ui: &UiContext, args: &ReportArgs) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal() && !args.no_input && !args.json;

    let from = bound(args.from.as_deref(), "Start date", "from", interactive)?;
    let to = bound(args.to.as_deref(), "End date", "to", interactive)?;

    // Bad bounds fail the whole query before the store is touched.
    let range = DateRange::parse(&from, &to)?;

    let store = ctx.store()?;
    let report = transactions_in_range(&store, range)?;

    if report.skipped > 0 && !args.json {
        print_warning(
            ui,
            &format!(
                "Skipped {} row(s) with unreadable dates.\nHint: Run `fintrack normalize` to repair legacy date layouts.",
                report.skipped
            ),
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
        return Ok(());
    }

    if report.is_empty() {
        print_info(ui, "No transactions found in the given range.");
        return Ok(());
    }

    if !ui.quiet {
        println!(
            "{}",
            styled(
                &format!(
                    "Transactions {} to {}",
                    date::format_canonical(range.start),
                    date::format_canonical(range.end)
                ),
                styles::bold(),
                ui.color
            )
        );
    }
    println!("{}", transactions_table(&report.transactions));

    // summary() is Some whenever the listing is non-empty
    if let Some(summary) = report.summary() {
        print_summary(ui, &summary);
    }

    Ok(())
}

fn bound(
    value: Option<&str>,
    prompt: &str,
    flag: &str,
    interactive: bool,
) -> anyhow::Result<String> {
    match value {
        Some(text) => Ok(text.to_string()),
        None if interactive => prompt_validated(
            &format!("{} ({})", prompt, date::DATE_FORMAT_NAME),
            None,
            |text| {
                date::parse_canonical(text)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            },
        ),
        None => Err(anyhow::anyhow!(
            "Missing date bound.\nHint: Pass --{} DD-MM-YYYY or run interactively.",
            flag
        )),
    }
}
