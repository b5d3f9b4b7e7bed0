//! CSV flat-file store backend.
//!
//! One UTF-8 file, a header row naming the four columns, one record per
//! line. Appends go straight to the end of the file; the repair rewrite
//! replaces the whole file through a temp file and rename.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::date;
use crate::error::{LedgerError, Result};
use crate::storage::traits::TransactionStore;
use crate::storage::types::{LedgerRow, NewTransaction, Transaction};

/// Column names of the on-disk header row, in fixed order.
pub const HEADER: [&str; 4] = ["date", "amount", "category", "description"];

/// CSV-backed transaction store.
///
/// The backing path is fixed at construction; there is no other
/// configuration surface.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn require_exists(&self) -> Result<()> {
        if self.path.exists() {
            Ok(())
        } else {
            Err(LedgerError::NotFound(self.path.clone()))
        }
    }

    fn is_empty_file(&self) -> Result<bool> {
        Ok(fs::metadata(&self.path)?.len() == 0)
    }

    fn check_header(&self, headers: &StringRecord) -> Result<()> {
        if headers.iter().eq(HEADER) {
            Ok(())
        } else {
            Err(LedgerError::Storage(format!(
                "Unexpected header in {}: found {:?}, expected {}",
                self.path.display(),
                headers.iter().collect::<Vec<_>>().join(","),
                HEADER.join(",")
            )))
        }
    }

    /// Encode a header row plus the given rows as CSV bytes.
    fn encode(rows: &[LedgerRow]) -> Result<Vec<u8>> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        wtr.write_record(HEADER)?;
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        wtr.into_inner()
            .map_err(|e| LedgerError::Storage(format!("CSV buffer flush failed: {}", e)))
    }

    /// Replace the backing file with `data` through a temp file in the
    /// same directory, so readers never observe a half-written store.
    fn write_atomic(&self, data: &[u8]) -> Result<()> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| LedgerError::Storage("Invalid ledger path".to_string()))?;
        let filename = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| LedgerError::Storage("Invalid ledger filename".to_string()))?;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| LedgerError::Storage(format!("System time error: {}", e)))?
            .as_nanos();
        let temp_path = parent.join(format!("{}.{}.tmp", filename, nanos));

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .map_err(|e| LedgerError::Storage(format!("Temp file create failed: {}", e)))?;
        if let Err(e) = file.write_all(data).and_then(|_| file.sync_all()) {
            let _ = fs::remove_file(&temp_path);
            return Err(LedgerError::Storage(format!("Temp file write failed: {}", e)));
        }
        drop(file);

        // Plain rename fails on platforms where the target exists
        // (notably Windows); remove the target and retry once.
        if let Err(initial_err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&self.path);
            if let Err(retry_err) = fs::rename(&temp_path, &self.path) {
                let _ = fs::remove_file(&temp_path);
                return Err(LedgerError::Storage(format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                )));
            }
        }

        Ok(())
    }
}

impl TransactionStore for CsvStore {
    fn initialize(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, Self::encode(&[])?)?;
        Ok(())
    }

    fn append(&self, new: &NewTransaction) -> Result<Transaction> {
        // Validate before touching the file; a bad date must leave the
        // store byte-for-byte unchanged.
        let tx = Transaction {
            date: date::parse_canonical(&new.date)?,
            amount: new.amount,
            category: new.category.clone(),
            description: new.description.clone(),
        };

        let needs_header = !self.path.exists() || self.is_empty_file()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            wtr.write_record(HEADER)?;
        }
        wtr.serialize(LedgerRow::from(&tx))?;
        wtr.flush()?;

        Ok(tx)
    }

    fn read_all(&self) -> Result<Vec<LedgerRow>> {
        self.require_exists()?;
        if self.is_empty_file()? {
            return Ok(Vec::new());
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_path(&self.path)?;
        self.check_header(rdr.headers()?)?;

        let mut rows = Vec::new();
        for row in rdr.deserialize::<LedgerRow>() {
            rows.push(row?);
        }
        Ok(rows)
    }

    fn replace_all(&self, transactions: &[Transaction]) -> Result<()> {
        self.require_exists()?;

        let rows: Vec<LedgerRow> = transactions.iter().map(LedgerRow::from).collect();
        self.write_atomic(&Self::encode(&rows)?)
    }
}
