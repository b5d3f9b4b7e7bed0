//! Fintrack CLI - a personal finance ledger for the command line
//!
//! This is the command-line interface for Fintrack. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod output;
mod ui;

use clap::Parser;
use fintrack_core::{LedgerError, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{add, init, misc, normalize, report};
use crate::constants::exit_codes;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);
    let ui = UiContext::from_env(cli.quiet);

    if let Err(e) = run(&ctx, &ui, &cli) {
        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);

        print_error(&ui, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split an inline `Hint:` line out of an error message, or attach a
/// contextual hint for common error shapes.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        return (&error[..idx], Some(error[idx + 1..].to_string()));
    }
    (error, contextual_hint(error))
}

fn contextual_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("no ledger found") {
        return Some(
            "Hint: Run `fintrack init` to create the ledger, or pass --ledger <path>.".to_string(),
        );
    }

    if error_lower.contains("invalid date") {
        return Some("Hint: Dates use the DD-MM-YYYY format, e.g. 05-01-2024.".to_string());
    }

    if error_lower.contains("unexpected header") {
        return Some(
            "Hint: The ledger header must be `date,amount,category,description`.".to_string(),
        );
    }

    if error_lower.contains("failed to parse config") {
        return Some(
            "Hint: Fix the config file or point FINTRACK_CONFIG at a different one.".to_string(),
        );
    }

    None
}

/// Map an error chain to the process exit code.
fn exit_code_for(error: &anyhow::Error) -> i32 {
    let not_found = error
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<LedgerError>(), Some(LedgerError::NotFound(_))));
    if not_found {
        exit_codes::NOT_FOUND
    } else {
        1
    }
}

fn run(ctx: &AppContext, ui: &UiContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, ui, args)?;
        }
        Some(Commands::Add(args)) => {
            add::handle_add(ctx, ui, args)?;
        }
        Some(Commands::Report(args)) => {
            report::handle_report(ctx, ui, args)?;
        }
        Some(Commands::Normalize(args)) => {
            normalize::handle_normalize(ctx, ui, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Fintrack v{}", VERSION);
            println!("\nQuickstart:");
            println!("  fintrack init");
            println!("  fintrack add --amount 500 --category Income --description \"Salary\"");
            println!("  fintrack report --from 01-01-2024 --to 31-01-2024");
            println!("\nRun `fintrack --help` for full usage.");
        }
    }

    Ok(())
}
