//! Storage abstraction for the ledger.
//!
//! This module defines the `TransactionStore` trait, the data model, and
//! the CSV flat-file backend that owns the persisted collection.
//!
//! ## Architecture
//!
//! The backing file carries a header row plus one record per line, in a
//! fixed four-column order. Appends go to the end of the file; reads
//! always load the whole collection into memory. The only whole-store
//! rewrite is the explicit date repair pass.

pub mod csv_file;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod mem;

// Re-export public types
pub use csv_file::{CsvStore, HEADER};
pub use traits::TransactionStore;
pub use types::{
    Category, DateRange, LedgerRow, NewTransaction, Summary, Transaction, EXPENSE_LABEL,
    INCOME_LABEL,
};
