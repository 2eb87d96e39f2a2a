//! Session controller tying the entry form to the ledger.
//!
//! A [`Session`] owns the roster, the form being filled in and the ledger of
//! submitted entries. Every user action is one method call on it; the UI
//! renders from its accessors and never mutates the parts directly.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    Clock, EntryForm, ExportError, Ledger, LedgerEntry, LedgerError, Locale, Report, Roster,
    Weekday, Worker, WorkerId,
    calculations::{PayBreakdown, worked_days_label},
};

/// Reasons a session action was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no worker is selected")]
    NoWorkerSelected,

    #[error("no work days are selected")]
    NoDaysSelected,

    #[error("worker '{0}' is not on the roster")]
    UnknownWorker(WorkerId),

    #[error("worker '{0}' already has an entry this session")]
    WorkerAlreadyRecorded(WorkerId),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    roster: Roster,
    form: EntryForm,
    ledger: Ledger,
}

impl Session {
    /// Starts a session over the default roster.
    pub fn new(locale: Locale) -> Self {
        Self::with_roster(Roster::default(), locale)
    }

    pub fn with_roster(
        roster: Roster,
        locale: Locale,
    ) -> Self {
        Self {
            roster,
            form: EntryForm::new(locale),
            ledger: Ledger::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn locale(&self) -> Locale {
        self.form.locale()
    }

    /// Switches the display language. Recorded entries keep their text.
    pub fn set_locale(
        &mut self,
        locale: Locale,
    ) {
        if self.form.locale() != locale {
            info!(from = %self.form.locale(), to = %locale, "switching language");
            self.form.set_locale(locale);
        }
    }

    // -----------------------------------------------------------------------
    // Worker selection
    // -----------------------------------------------------------------------

    /// Workers without a ledger entry, sorted by name in the active language.
    ///
    /// Names compare by Unicode code point, not by a locale collation.
    pub fn available_workers(&self) -> Vec<&Worker> {
        let locale = self.locale();
        let mut workers: Vec<&Worker> = self
            .roster
            .workers()
            .iter()
            .filter(|worker| !self.ledger.contains_worker(worker.id))
            .collect();
        workers.sort_by(|a, b| a.display_name(locale).cmp(b.display_name(locale)));
        workers
    }

    /// Picks a worker, or clears the pick with `None`.
    pub fn select_worker(
        &mut self,
        worker: Option<WorkerId>,
    ) -> Result<(), SessionError> {
        if let Some(id) = worker {
            if self.roster.find(id).is_none() {
                return Err(SessionError::UnknownWorker(id));
            }
            if self.ledger.contains_worker(id) {
                return Err(SessionError::WorkerAlreadyRecorded(id));
            }
        }

        debug!(worker = ?worker.map(|id| id.as_str()), "worker selected");
        self.form.select_worker(worker);
        Ok(())
    }

    /// The selected worker, if it is still on the roster and not yet recorded.
    pub fn selected_worker(&self) -> Option<&Worker> {
        self.form
            .selected_worker()
            .filter(|id| !self.ledger.contains_worker(*id))
            .and_then(|id| self.roster.find(id))
    }

    // -----------------------------------------------------------------------
    // Form edits
    // -----------------------------------------------------------------------

    pub fn toggle_day(
        &mut self,
        day: Weekday,
    ) -> bool {
        self.form.toggle_day(day)
    }

    pub fn set_repayment_input(
        &mut self,
        input: impl Into<String>,
    ) {
        self.form.set_repayment_input(input);
    }

    // -----------------------------------------------------------------------
    // Derived values
    // -----------------------------------------------------------------------

    /// Daily rate of the selected worker, zero when nobody is selected.
    pub fn rate_per_day(&self) -> Decimal {
        self.selected_worker()
            .map(Worker::rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Live figures for the entry being built.
    pub fn preview(&self) -> PayBreakdown {
        PayBreakdown::compute(
            self.rate_per_day(),
            self.form.days(),
            self.form.repayment(),
        )
    }

    /// Worked days of the entry being built, in the active language.
    pub fn worked_days_label(&self) -> String {
        worked_days_label(self.form.days(), self.locale())
    }

    pub fn can_submit(&self) -> bool {
        self.selected_worker().is_some() && self.form.days().any()
    }

    // -----------------------------------------------------------------------
    // Ledger actions
    // -----------------------------------------------------------------------

    /// Records the entry being built and resets the form.
    ///
    /// # Errors
    ///
    /// * [`SessionError::NoWorkerSelected`] if no worker is picked, or the
    ///   picked worker already has an entry.
    /// * [`SessionError::NoDaysSelected`] if no day is flagged.
    pub fn submit(&mut self) -> Result<&LedgerEntry, SessionError> {
        let Some(worker) = self.selected_worker() else {
            warn!("submit refused: no worker selected");
            return Err(SessionError::NoWorkerSelected);
        };
        if !self.form.days().any() {
            warn!(worker = %worker.id, "submit refused: no days selected");
            return Err(SessionError::NoDaysSelected);
        }

        let entry = LedgerEntry::new(
            worker,
            self.form.days(),
            self.form.repayment(),
            self.locale(),
        );
        info!(
            worker = %entry.worker_id(),
            days = entry.worked_day_count(),
            total = %entry.gross_total(),
            jama = %entry.repayment(),
            "entry submitted"
        );

        let index = self.ledger.append(entry);
        self.form.reset();
        self.ledger
            .get(index)
            .ok_or(SessionError::Ledger(LedgerError::IndexOutOfRange {
                index,
                len: self.ledger.len(),
            }))
    }

    /// Flips the paid flag of one ledger entry and returns the new value.
    pub fn toggle_paid(
        &mut self,
        index: usize,
    ) -> Result<bool, SessionError> {
        Ok(self.ledger.toggle_paid(index)?)
    }

    /// Builds the CSV report of the whole ledger.
    pub fn export(
        &self,
        clock: &impl Clock,
    ) -> Result<Report, ExportError> {
        Report::build(&self.ledger, clock)
    }
}
