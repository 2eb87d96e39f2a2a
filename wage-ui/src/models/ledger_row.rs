use gpui::SharedString;
use wage_core::LedgerEntry;

use crate::utils::format_rupees;

/// Display-ready copy of one ledger entry for the submitted-entries table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    pub index: usize,
    pub worker: SharedString,
    pub days: SharedString,
    pub work_days: SharedString,
    pub total: SharedString,
    pub jama: SharedString,
    pub net_payment: SharedString,
    pub paid: bool,
}

impl LedgerRow {
    pub fn new(
        index: usize,
        entry: &LedgerEntry,
    ) -> Self {
        Self {
            index,
            worker: entry.worker_name().to_string().into(),
            days: entry.worked_days_label().to_string().into(),
            work_days: entry.worked_day_count().to_string().into(),
            total: format_rupees(entry.gross_total()).into(),
            jama: format_rupees(entry.repayment()).into(),
            net_payment: format_rupees(entry.net_payment()).into(),
            paid: entry.is_paid(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use wage_core::{Locale, Roster, Weekday, WeekdayFlags, WorkerId};

    #[test]
    fn row_shows_net_payment_from_entry() {
        let roster = Roster::default();
        let mani = roster.find(WorkerId::new("mani")).unwrap();
        let days: WeekdayFlags = [Weekday::Monday, Weekday::Wednesday, Weekday::Friday]
            .into_iter()
            .collect();
        let entry = LedgerEntry::new(mani, &days, dec!(100), Locale::English);

        let row = LedgerRow::new(0, &entry);

        assert_eq!(row.worker.to_string(), "Mani");
        assert_eq!(row.days.to_string(), "Monday, Wednesday, Friday");
        assert_eq!(row.work_days.to_string(), "3");
        assert_eq!(row.total.to_string(), "₹1200");
        assert_eq!(row.jama.to_string(), "₹100");
        assert_eq!(row.net_payment.to_string(), "₹1100");
        assert!(!row.paid);
    }
}
