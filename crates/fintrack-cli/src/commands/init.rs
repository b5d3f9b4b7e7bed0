//! Init command: create the ledger file and a default config.

use std::path::PathBuf;

use fintrack_core::{CsvStore, TransactionStore};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, FintrackConfig};
use crate::ui::{print_kv, print_success, UiContext};

pub fn handle_init(ctx: &AppContext, ui: &UiContext, args: &InitArgs) -> anyhow::Result<()> {
    let ledger_path = match args.path {
        Some(ref path) => PathBuf::from(path),
        None => ctx.ledger_path()?,
    };

    // First run records where the ledger lives; an existing config is
    // left alone so re-running init never moves a ledger.
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        write_config(&config_path, &FintrackConfig::new(ledger_path.clone()))?;
    }

    let store = CsvStore::new(&ledger_path);
    let existed = store.path().exists();
    store.initialize()?;

    if existed {
        print_success(ui, "Ledger already exists.");
    } else {
        print_success(ui, "Ledger created.");
    }
    print_kv(ui, "Path", &ledger_path.display().to_string());

    Ok(())
}
