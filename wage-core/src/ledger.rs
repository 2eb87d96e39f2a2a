//! The in-memory ledger of submitted entries.
//!
//! Entries are kept in submission order. The ledger never rejects an append
//! and offers no delete, edit or reorder; the only mutation after an append
//! is flipping an entry's paid flag.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{LedgerEntry, WorkerId};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no ledger entry at position {index} (ledger has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Column sums over every entry in a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LedgerTotals {
    pub entries: usize,
    pub paid_entries: usize,
    pub worked_days: u32,
    pub gross_total: Decimal,
    pub repayment: Decimal,
    pub net_payment: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry at the end and returns its position.
    pub fn append(
        &mut self,
        entry: LedgerEntry,
    ) -> usize {
        debug!(
            worker = %entry.worker_id(),
            days = entry.worked_day_count(),
            total = %entry.gross_total(),
            "appending ledger entry"
        );
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Flips the paid flag of the entry at `index` and returns the new value.
    pub fn toggle_paid(
        &mut self,
        index: usize,
    ) -> Result<bool, LedgerError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(LedgerError::IndexOutOfRange { index, len })?;

        let paid = entry.toggle_paid();
        debug!(index, worker = %entry.worker_id(), paid, "toggled paid flag");
        Ok(paid)
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&LedgerEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LedgerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether any entry was recorded for this worker.
    pub fn contains_worker(
        &self,
        worker: WorkerId,
    ) -> bool {
        self.entries.iter().any(|entry| entry.worker_id() == worker)
    }

    pub fn totals(&self) -> LedgerTotals {
        self.entries
            .iter()
            .fold(LedgerTotals::default(), |mut totals, entry| {
                totals.entries += 1;
                if entry.is_paid() {
                    totals.paid_entries += 1;
                }
                totals.worked_days += u32::from(entry.worked_day_count());
                totals.gross_total += entry.gross_total();
                totals.repayment += entry.repayment();
                totals.net_payment += entry.net_payment();
                totals
            })
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a LedgerEntry;
    type IntoIter = std::slice::Iter<'a, LedgerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
