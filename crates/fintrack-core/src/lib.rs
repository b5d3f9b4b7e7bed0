//! # Fintrack Core
//!
//! Core library for Fintrack - a personal finance ledger for the command line.
//!
//! This crate provides the record store and the query/summarization engine,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Transaction store trait, CSV flat-file backend, data model
//! - **report**: Date-range queries and income/expense aggregation
//! - **normalize**: One-time repair pass for legacy date layouts
//! - **date**: Canonical `DD-MM-YYYY` parsing and rendering

pub mod date;
pub mod error;
pub mod normalize;
pub mod report;
pub mod storage;

pub use error::{LedgerError, Result};
pub use normalize::{normalize_dates, DroppedRow, NormalizeReport};
pub use report::{transactions_in_range, RangeReport};
pub use storage::{
    Category, CsvStore, DateRange, LedgerRow, NewTransaction, Summary, Transaction,
    TransactionStore,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
