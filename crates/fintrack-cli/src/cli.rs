use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use fintrack_core::VERSION;

/// Fintrack - a personal finance ledger for the command line
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger CSV file
    #[arg(short, long, global = true, env = "FINTRACK_LEDGER")]
    pub ledger: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the ledger file (and a default config) if absent
    Init(InitArgs),

    /// Record a transaction
    Add(AddArgs),

    /// List transactions in a date range with income/expense totals
    Report(ReportArgs),

    /// Rewrite legacy date layouts into the canonical DD-MM-YYYY form
    Normalize(NormalizeArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the ledger will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Transaction date (DD-MM-YYYY)
    #[arg(long)]
    pub date: Option<String>,

    /// Transaction amount
    #[arg(long)]
    pub amount: Option<f64>,

    /// Category label (Income and Expense drive the totals)
    #[arg(long)]
    pub category: Option<String>,

    /// Free-text note
    #[arg(long)]
    pub description: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `report` command
#[derive(Args)]
pub struct ReportArgs {
    /// Start date, inclusive (DD-MM-YYYY)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// End date, inclusive (DD-MM-YYYY)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `normalize` command
#[derive(Args)]
pub struct NormalizeArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
