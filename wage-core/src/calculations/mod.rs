//! Pay calculations for a week of work.
//!
//! Everything here is a pure function of the entry being built: the worker's
//! daily rate, the flagged days and the repayment typed into the form.

pub mod pay;
pub mod repayment;

pub use pay::{PayBreakdown, gross_total, net_payment, worked_days_label};
pub use repayment::parse_repayment;
