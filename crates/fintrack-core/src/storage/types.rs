//! Core data types for the ledger.
//!
//! `LedgerRow` is the on-disk shape (date still raw text, straight from
//! the CSV codec); `Transaction` is the parsed domain record the query
//! engine works with.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date;
use crate::error::{LedgerError, Result};

/// Reserved category label that feeds the income total.
pub const INCOME_LABEL: &str = "Income";

/// Reserved category label that feeds the expense total.
pub const EXPENSE_LABEL: &str = "Expense";

/// Transaction category.
///
/// The two reserved labels drive aggregation; any other label is stored
/// verbatim and listed without contributing to either total. Matching is
/// exact and case-sensitive, so `"income"` is an ordinary label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Income,
    Expense,
    Other(String),
}

impl Category {
    pub fn is_income(&self) -> bool {
        matches!(self, Category::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Category::Expense)
    }

    /// The label exactly as written in the store.
    pub fn label(&self) -> &str {
        match self {
            Category::Income => INCOME_LABEL,
            Category::Expense => EXPENSE_LABEL,
            Category::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.as_str() {
            INCOME_LABEL => Category::Income,
            EXPENSE_LABEL => Category::Expense,
            _ => Category::Other(label),
        }
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::from(label.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A stored row exactly as the CSV codec sees it.
///
/// The date is kept as text here: legacy stores may hold rows written in
/// other layouts, and those still have to survive a raw read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub date: String,
    pub amount: f64,
    pub category: Category,
    pub description: String,
}

/// A parsed transaction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date, rendered canonically as `DD-MM-YYYY`
    #[serde(with = "crate::date::canonical")]
    pub date: NaiveDate,

    /// Monetary amount (currency-agnostic unit)
    pub amount: f64,

    /// Free-text label; `Income` and `Expense` drive the totals
    pub category: Category,

    /// Free-text note
    pub description: String,
}

impl TryFrom<LedgerRow> for Transaction {
    type Error = LedgerError;

    fn try_from(row: LedgerRow) -> Result<Self> {
        Ok(Transaction {
            date: date::parse_canonical(&row.date)?,
            amount: row.amount,
            category: row.category,
            description: row.description,
        })
    }
}

impl From<&Transaction> for LedgerRow {
    fn from(tx: &Transaction) -> Self {
        LedgerRow {
            date: date::format_canonical(tx.date),
            amount: tx.amount,
            category: tx.category.clone(),
            description: tx.description.clone(),
        }
    }
}

/// Input for an append. The date stays text until the store validates it.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: String,
    pub amount: f64,
    pub category: Category,
    pub description: String,
}

impl NewTransaction {
    pub fn new(
        date: impl Into<String>,
        amount: f64,
        category: impl Into<Category>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
            description: description.into(),
        }
    }
}

/// Inclusive date range for queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive)
    pub start: NaiveDate,

    /// End date (inclusive)
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse canonical `DD-MM-YYYY` bounds.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidDate` for a malformed bound; the
    /// whole query fails before anything is read.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: date::parse_canonical(start)?,
            end: date::parse_canonical(end)?,
        })
    }

    /// Whether `date` lies within the range, inclusive on both ends.
    ///
    /// An inverted range (`start > end`) contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Aggregate totals over the two reserved categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_balance: f64,
}

impl Summary {
    /// Sum a set of transactions.
    ///
    /// Only the reserved `Income` and `Expense` labels feed the totals;
    /// everything else is counted by neither.
    pub fn of(transactions: &[Transaction]) -> Self {
        let total_income: f64 = transactions
            .iter()
            .filter(|tx| tx.category.is_income())
            .map(|tx| tx.amount)
            .sum();
        let total_expense: f64 = transactions
            .iter()
            .filter(|tx| tx.category.is_expense())
            .map(|tx| tx.amount)
            .sum();
        Summary {
            total_income,
            total_expense,
            net_balance: total_income - total_expense,
        }
    }
}
