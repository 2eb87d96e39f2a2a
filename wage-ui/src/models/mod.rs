mod ledger_row;
mod notice;

pub use ledger_row::LedgerRow;
pub use notice::{Notice, NoticeKind};
