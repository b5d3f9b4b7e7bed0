//! One-time repair pass for inconsistently formatted dates.
//!
//! Early versions of the store accepted whatever date text the caller
//! supplied, so long-lived files can mix layouts. The pass rewrites the
//! whole store with canonical dates and discards rows nothing can
//! interpret. Destructive and non-reversible, so the outcome enumerates
//! exactly what was dropped.

use crate::date;
use crate::error::Result;
use crate::storage::traits::TransactionStore;
use crate::storage::types::Transaction;

/// A row discarded by the repair pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRow {
    /// 1-based line number in the file, counting the header as line 1
    pub line: usize,

    /// The date text that matched no accepted layout
    pub date: String,
}

/// Outcome of a repair pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeReport {
    /// Rows remaining in the store after the rewrite
    pub kept: usize,

    /// Rows whose date was rewritten from a legacy layout
    pub repaired: usize,

    /// Rows discarded because no accepted layout matched
    pub dropped: Vec<DroppedRow>,
}

impl NormalizeReport {
    /// True when the store was already fully canonical and the rewrite
    /// changed nothing.
    pub fn was_canonical(&self) -> bool {
        self.repaired == 0 && self.dropped.is_empty()
    }
}

/// Reinterpret every stored date and rewrite the store canonically.
///
/// Two passes per row: the strict canonical parse first, then the
/// documented day-first fallback layouts. Rows failing both are dropped
/// permanently and enumerated in the report. Running the pass on an
/// already-canonical store keeps every row and repairs none, so a second
/// application is a no-op.
///
/// # Errors
///
/// Returns `LedgerError::NotFound` if the store does not exist.
pub fn normalize_dates<S: TransactionStore>(store: &S) -> Result<NormalizeReport> {
    let rows = store.read_all()?;

    let mut survivors = Vec::with_capacity(rows.len());
    let mut repaired = 0;
    let mut dropped = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        // The header occupies line 1, so data rows start at line 2.
        let line = index + 2;

        let parsed = match date::parse_canonical(&row.date) {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                let fallback = date::parse_fallback(&row.date);
                if fallback.is_some() {
                    repaired += 1;
                }
                fallback
            }
        };

        match parsed {
            Some(parsed) => survivors.push(Transaction {
                date: parsed,
                amount: row.amount,
                category: row.category,
                description: row.description,
            }),
            None => dropped.push(DroppedRow {
                line,
                date: row.date,
            }),
        }
    }

    store.replace_all(&survivors)?;

    Ok(NormalizeReport {
        kept: survivors.len(),
        repaired,
        dropped,
    })
}
