//! Normalize command: the destructive date repair pass.

use std::io::IsTerminal;

use fintrack_core::normalize_dates;

use crate::app::AppContext;
use crate::cli::NormalizeArgs;
use crate::ui::{print_info, print_kv, print_success, print_warning, prompt_confirm, UiContext};

pub fn handle_normalize(ctx: &AppContext, ui: &UiContext, args: &NormalizeArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;

    if !args.yes {
        if !std::io::stdin().is_terminal() {
            return Err(anyhow::anyhow!(
                "Normalization rewrites the ledger and drops unreadable rows.\nHint: Re-run with --yes to confirm."
            ));
        }
        let proceed = prompt_confirm(
            "Rewrite the ledger and permanently drop rows whose dates cannot be repaired?",
            false,
        )?;
        if !proceed {
            print_info(ui, "Cancelled.");
            return Ok(());
        }
    }

    let report = normalize_dates(&store)?;

    // Every discarded row is accounted for; the pass never drops data
    // silently.
    for dropped in &report.dropped {
        print_warning(
            ui,
            &format!("Dropped line {}: unreadable date {:?}", dropped.line, dropped.date),
        );
    }

    if report.was_canonical() {
        print_success(ui, "Ledger already canonical; nothing to rewrite.");
    } else {
        print_success(ui, "Ledger normalized.");
    }
    print_kv(ui, "Rows kept", &report.kept.to_string());
    print_kv(ui, "Dates repaired", &report.repaired.to_string());
    print_kv(ui, "Rows dropped", &report.dropped.len().to_string());

    Ok(())
}
