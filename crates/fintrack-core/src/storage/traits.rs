//! Store trait definition.
//!
//! The `TransactionStore` trait is the interface the query engine sees.
//! The production backend is a CSV flat file; the abstraction keeps the
//! engine testable against an in-memory double.

use crate::error::Result;
use crate::storage::types::{LedgerRow, NewTransaction, Transaction};

/// Interface to the durable, append-only transaction collection.
///
/// Implementations own the persisted collection exclusively. Readers get
/// a transient in-memory copy; the only whole-store rewrite is
/// `replace_all`, reserved for the date repair pass.
pub trait TransactionStore {
    /// Ensure the backing store exists, creating it with only the header
    /// row if absent.
    ///
    /// Idempotent: calling it on an existing store changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the store cannot be created.
    fn initialize(&self) -> Result<()>;

    /// Validate and append one record.
    ///
    /// The date must parse under the canonical `DD-MM-YYYY` format. On
    /// success the returned transaction is exactly what was serialized,
    /// date re-rendered canonically.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidDate` if the date does not parse;
    /// nothing is written and the store is left unchanged.
    fn append(&self, new: &NewTransaction) -> Result<Transaction>;

    /// Read the full ordered sequence of stored rows.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` if the store does not exist.
    fn read_all(&self) -> Result<Vec<LedgerRow>>;

    /// Overwrite the store so it holds exactly the given transactions.
    ///
    /// Used by the date repair pass. The header row is preserved and the
    /// rewrite replaces the previous contents as a single step.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` if the store does not exist.
    fn replace_all(&self, transactions: &[Transaction]) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Implementations are tested in their own modules; this just keeps
    // the trait usable as a bound and as a trait object.

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_store<S: TransactionStore>(_store: &S) {}
        fn _accepts_dyn_store(_store: &dyn TransactionStore) {}
    }
}
