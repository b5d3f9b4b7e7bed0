//! Date-range queries and aggregation over the ledger.

use crate::error::Result;
use crate::storage::traits::TransactionStore;
use crate::storage::types::{DateRange, Summary, Transaction};

/// Result of a range query.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeReport {
    /// Matching transactions, in original store order
    pub transactions: Vec<Transaction>,

    /// Rows excluded before filtering because their date text failed the
    /// canonical parse. Surfaced so dropped data stays visible.
    pub skipped: usize,
}

impl RangeReport {
    /// Totals over the matched set, or `None` when nothing matched.
    ///
    /// An empty result gets a notice from the caller, not a summary of
    /// zeroes.
    pub fn summary(&self) -> Option<Summary> {
        if self.transactions.is_empty() {
            None
        } else {
            Some(Summary::of(&self.transactions))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Fetch every transaction whose date lies within `range`, in store
/// order.
///
/// Rows whose date text does not parse canonically never reach the
/// filter; they are counted in the report instead. An inverted range
/// matches nothing and yields an empty report.
///
/// # Errors
///
/// Returns `LedgerError::NotFound` if the store does not exist, and
/// passes through codec errors for rows the store cannot decode at all.
pub fn transactions_in_range<S: TransactionStore>(
    store: &S,
    range: DateRange,
) -> Result<RangeReport> {
    let rows = store.read_all()?;

    let mut transactions = Vec::new();
    let mut skipped = 0;
    for row in rows {
        match Transaction::try_from(row) {
            Ok(tx) => {
                if range.contains(tx.date) {
                    transactions.push(tx);
                }
            }
            Err(_) => skipped += 1,
        }
    }

    Ok(RangeReport {
        transactions,
        skipped,
    })
}
