use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    Locale, WeekdayFlags, Worker, WorkerId,
    calculations::{gross_total, net_payment, worked_days_label},
};

/// One submitted week for one worker.
///
/// All figures are fixed when the entry is created. Only the paid flag can
/// change afterwards, through [`crate::Ledger::toggle_paid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    worker_id: WorkerId,
    worker_name: String,
    worked_days_label: String,
    worked_day_count: u8,
    gross_total: Decimal,
    repayment: Decimal,
    paid: bool,
}

impl LedgerEntry {
    /// Builds an unpaid entry, capturing names and labels in `locale`.
    pub fn new(
        worker: &Worker,
        days: &WeekdayFlags,
        repayment: Decimal,
        locale: Locale,
    ) -> Self {
        let worked_day_count = days.count();

        Self {
            worker_id: worker.id,
            worker_name: worker.display_name(locale).to_string(),
            worked_days_label: worked_days_label(days, locale),
            worked_day_count,
            gross_total: gross_total(worker.rate(), worked_day_count),
            repayment,
            paid: false,
        }
    }

    pub fn worker_id(&self) -> WorkerId {
        self.worker_id
    }

    pub fn worker_name(&self) -> &str {
        &self.worker_name
    }

    pub fn worked_days_label(&self) -> &str {
        &self.worked_days_label
    }

    pub fn worked_day_count(&self) -> u8 {
        self.worked_day_count
    }

    pub fn gross_total(&self) -> Decimal {
        self.gross_total
    }

    pub fn repayment(&self) -> Decimal {
        self.repayment
    }

    /// Always recomputed, never stored.
    pub fn net_payment(&self) -> Decimal {
        net_payment(self.gross_total, self.repayment)
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    pub(crate) fn toggle_paid(&mut self) -> bool {
        self.paid = !self.paid;
        self.paid
    }
}
