// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use thiserror::Error;
use uuid::Uuid;

use crate::db::{self, LEDGER_SLOT};
use crate::models::{ExpenseDraft, ExpenseRecord};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger storage error: {0}")]
    Storage(#[from] rusqlite::Error),
    #[error("ledger serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Owns the in-memory expense ledger and mirrors every mutation back to the
/// persisted slot as one whole-ledger snapshot. Newest-first by insertion.
///
/// Loading fails soft: a missing or unparseable slot is an empty ledger.
/// Writes are the only operations that can error.
pub struct LedgerStore {
    conn: Connection,
    records: Vec<ExpenseRecord>,
}

impl LedgerStore {
    pub fn open(conn: Connection) -> Self {
        let records = match db::read_slot(&conn, LEDGER_SLOT) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Self { conn, records }
    }

    /// The current snapshot, most recently added first.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Store a draft as a new record at the front of the ledger and persist
    /// the new snapshot. A draft with no date, no amount, or a negative
    /// amount is rejected: `Ok(None)`, ledger untouched, nothing written.
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<Option<ExpenseRecord>> {
        let (Some(date), Some(amount)) = (draft.date, draft.amount) else {
            return Ok(None);
        };
        if amount.is_sign_negative() {
            return Ok(None);
        }
        let record = ExpenseRecord {
            id: Uuid::new_v4().to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            amount,
            category: draft.category.unwrap_or_default(),
            description: draft.description,
            payment_method: draft.payment_method.unwrap_or_default(),
        };
        self.records.insert(0, record.clone());
        self.persist()?;
        Ok(Some(record))
    }

    /// Drop the record with the given id, if any, keeping the rest in order.
    /// Removing an absent id is a no-op and skips the write.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.records)?;
        db::write_slot(&self.conn, LEDGER_SLOT, &json)?;
        Ok(())
    }
}
