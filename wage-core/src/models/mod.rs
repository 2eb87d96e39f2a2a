mod entry_form;
mod ledger_entry;
mod locale;
mod weekday;
mod worker;

pub use entry_form::EntryForm;
pub use ledger_entry::LedgerEntry;
pub use locale::{Locale, UnknownLocale};
pub use weekday::{Weekday, WeekdayFlags};
pub use worker::{LocalizedName, Roster, RosterError, Worker, WorkerId};
