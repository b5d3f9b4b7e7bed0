//! Add command: record one transaction, prompting for missing fields.

use std::io::IsTerminal;

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input};

use fintrack_core::{date, Category, NewTransaction, TransactionStore};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::ui::{print_kv, print_success, prompt_input, prompt_select, prompt_validated, UiContext};

pub fn handle_add(ctx: &AppContext, ui: &UiContext, args: &AddArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let interactive = std::io::stdin().is_terminal() && !args.no_input;

    let date_text = match args.date {
        Some(ref value) => value.clone(),
        None => prompt_date(interactive)?,
    };
    let amount = match args.amount {
        Some(value) => value,
        None => prompt_amount(interactive)?,
    };
    let category = match args.category {
        Some(ref value) => Category::from(value.as_str()),
        None => prompt_category(interactive)?,
    };
    let description = match args.description {
        Some(ref value) => value.clone(),
        None => prompt_description(interactive)?,
    };

    let tx = store.append(&NewTransaction::new(date_text, amount, category, description))?;

    print_success(ui, "Entry added successfully.");
    print_kv(ui, "Date", &date::format_canonical(tx.date));
    print_kv(ui, "Amount", &format!("{:.2}", tx.amount));
    print_kv(ui, "Category", tx.category.label());

    Ok(())
}

fn missing_field(flag: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Missing required field.\nHint: Pass --{} or drop --no-input to be prompted.",
        flag
    )
}

/// Date prompt; Enter accepts today in canonical form.
fn prompt_date(interactive: bool) -> anyhow::Result<String> {
    if !interactive {
        return Err(missing_field("date"));
    }
    let today = date::format_canonical(Local::now().date_naive());
    prompt_validated(
        &format!("Date ({})", date::DATE_FORMAT_NAME),
        Some(&today),
        |value| {
            date::parse_canonical(value)
                .map(|_| ())
                .map_err(|e| e.to_string())
        },
    )
}

/// Amount prompt; re-asks until the text parses as a number.
fn prompt_amount(interactive: bool) -> anyhow::Result<f64> {
    if !interactive {
        return Err(missing_field("amount"));
    }
    let theme = ColorfulTheme::default();
    Ok(Input::<f64>::with_theme(&theme)
        .with_prompt("Amount")
        .interact_text()?)
}

fn prompt_category(interactive: bool) -> anyhow::Result<Category> {
    if !interactive {
        return Err(missing_field("category"));
    }
    let options = ["Income", "Expense", "Other (custom label)"];
    match prompt_select("Category", &options, 0)? {
        0 => Ok(Category::Income),
        1 => Ok(Category::Expense),
        _ => {
            let label = prompt_validated("Category label", None, |value| {
                if value.trim().is_empty() {
                    Err("Label cannot be empty".to_string())
                } else {
                    Ok(())
                }
            })?;
            Ok(Category::from(label.trim()))
        }
    }
}

fn prompt_description(interactive: bool) -> anyhow::Result<String> {
    if !interactive {
        // The note is genuinely optional; absent means empty.
        return Ok(String::new());
    }
    prompt_input("Description", None)
}
