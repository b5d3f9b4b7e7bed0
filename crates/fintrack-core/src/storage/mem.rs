//! In-memory store double for engine tests.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::date;
use crate::error::{LedgerError, Result};
use crate::storage::traits::TransactionStore;
use crate::storage::types::{LedgerRow, NewTransaction, Transaction};

/// Holds rows in memory behind the store trait. `None` models a store
/// whose backing file does not exist.
pub struct MemStore {
    rows: RefCell<Option<Vec<LedgerRow>>>,
}

impl MemStore {
    pub fn absent() -> Self {
        Self {
            rows: RefCell::new(None),
        }
    }

    pub fn with_rows(rows: Vec<LedgerRow>) -> Self {
        Self {
            rows: RefCell::new(Some(rows)),
        }
    }

    /// Snapshot of the current contents, empty if absent.
    pub fn rows(&self) -> Vec<LedgerRow> {
        self.rows.borrow().clone().unwrap_or_default()
    }
}

impl TransactionStore for MemStore {
    fn initialize(&self) -> Result<()> {
        let mut rows = self.rows.borrow_mut();
        if rows.is_none() {
            *rows = Some(Vec::new());
        }
        Ok(())
    }

    fn append(&self, new: &NewTransaction) -> Result<Transaction> {
        let tx = Transaction {
            date: date::parse_canonical(&new.date)?,
            amount: new.amount,
            category: new.category.clone(),
            description: new.description.clone(),
        };
        self.rows
            .borrow_mut()
            .get_or_insert_with(Vec::new)
            .push(LedgerRow::from(&tx));
        Ok(tx)
    }

    fn read_all(&self) -> Result<Vec<LedgerRow>> {
        self.rows
            .borrow()
            .clone()
            .ok_or_else(|| LedgerError::NotFound(PathBuf::from("<memory>")))
    }

    fn replace_all(&self, transactions: &[Transaction]) -> Result<()> {
        let mut rows = self.rows.borrow_mut();
        if rows.is_none() {
            return Err(LedgerError::NotFound(PathBuf::from("<memory>")));
        }
        *rows = Some(transactions.iter().map(LedgerRow::from).collect());
        Ok(())
    }
}
