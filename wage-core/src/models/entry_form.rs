use rust_decimal::Decimal;

use crate::{Locale, Weekday, WeekdayFlags, WorkerId, calculations::parse_repayment};

/// The entry currently being filled in.
///
/// Holds raw user input only. Anything that needs the roster or the ledger
/// (rates, availability, submit gating) lives on [`crate::Session`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    selected_worker: Option<WorkerId>,
    days: WeekdayFlags,
    repayment_input: String,
    locale: Locale,
}

impl EntryForm {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn selected_worker(&self) -> Option<WorkerId> {
        self.selected_worker
    }

    pub fn select_worker(
        &mut self,
        worker: Option<WorkerId>,
    ) {
        self.selected_worker = worker;
    }

    pub fn days(&self) -> &WeekdayFlags {
        &self.days
    }

    pub fn is_day_set(
        &self,
        day: Weekday,
    ) -> bool {
        self.days.is_set(day)
    }

    /// Flips one day and returns its new value.
    pub fn toggle_day(
        &mut self,
        day: Weekday,
    ) -> bool {
        self.days.toggle(day)
    }

    pub fn repayment_input(&self) -> &str {
        &self.repayment_input
    }

    pub fn set_repayment_input(
        &mut self,
        input: impl Into<String>,
    ) {
        self.repayment_input = input.into();
    }

    /// The repayment as it would be recorded right now.
    pub fn repayment(&self) -> Decimal {
        parse_repayment(&self.repayment_input)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(
        &mut self,
        locale: Locale,
    ) {
        self.locale = locale;
    }

    /// Clears selection, days and repayment. The language is kept.
    pub fn reset(&mut self) {
        self.selected_worker = None;
        self.days.clear();
        self.repayment_input.clear();
    }
}
