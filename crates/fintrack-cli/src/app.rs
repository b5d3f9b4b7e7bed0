//! Application context: resolved ledger path and store construction.

use std::path::PathBuf;

use fintrack_core::CsvStore;

use crate::cli::Cli;
use crate::config::{default_config_path, default_ledger_path, read_config};

/// Shared state for command handlers, built once from parsed CLI args.
pub struct AppContext {
    ledger_override: Option<String>,
    quiet: bool,
}

impl AppContext {
    pub fn new(cli: &Cli) -> Self {
        Self {
            ledger_override: cli.ledger.clone(),
            quiet: cli.quiet,
        }
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Resolve the ledger file path.
    ///
    /// Precedence: `--ledger` flag or `FINTRACK_LEDGER` env (clap folds
    /// the env var into the flag), then the config file, then the
    /// default location under the XDG data dir.
    pub fn ledger_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(ref path) = self.ledger_override {
            return Ok(PathBuf::from(path));
        }

        let config_path = resolve_config_path()?;
        if config_path.exists() {
            let config = read_config(&config_path)?;
            return Ok(PathBuf::from(config.ledger.path));
        }

        default_ledger_path()
    }

    /// Build the store for the resolved ledger path.
    pub fn store(&self) -> anyhow::Result<CsvStore> {
        Ok(CsvStore::new(self.ledger_path()?))
    }
}

/// Resolve the config file path, checking FINTRACK_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("FINTRACK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}
