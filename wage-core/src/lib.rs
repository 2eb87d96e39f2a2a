pub mod calculations;
pub mod clock;
pub mod ledger;
pub mod models;
pub mod report;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::{Ledger, LedgerError, LedgerTotals};
pub use models::*;
pub use report::{ExportError, Report};
pub use session::{Session, SessionError};
