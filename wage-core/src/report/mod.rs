//! CSV report of the ledger.
//!
//! ## Layout
//!
//! The first row is a fixed English header, whatever language the entries
//! were recorded in. Each ledger entry follows in ledger order.
//!
//! | Column             | Source                              |
//! |--------------------|-------------------------------------|
//! | `Resource`         | worker name as recorded             |
//! | `Days of the Week` | worked-days label, always quoted     |
//! | `Work Days`        | number of days worked               |
//! | `Total`            | gross total                         |
//! | `Jama`             | repayment                           |
//! | `Net Payment`      | `Total` − `Jama`                    |
//! | `Paid`             | `Yes` or `No`                       |
//!
//! Fields are comma separated and rows are separated by CRLF, with nothing
//! after the last row. The payload starts with a UTF-8 byte-order mark so
//! spreadsheet tools pick the right encoding for Kannada text.
//!
//! Only the days column is quoted. Roster names are checked for commas,
//! quotes and line breaks up front (see [`crate::Roster::new`]), and the
//! other columns are numbers or `Yes`/`No`.
//!
//! ### Example
//!
//! ```csv
//! Resource,Days of the Week,Work Days,Total,Jama,Net Payment,Paid
//! Mani,"Monday, Wednesday, Friday",3,1200,100,1100,No
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::{Clock, Ledger, LedgerEntry};

/// Column names of the header row.
pub const REPORT_HEADER: [&str; 7] = [
    "Resource",
    "Days of the Week",
    "Work Days",
    "Total",
    "Jama",
    "Net Payment",
    "Paid",
];

const UTF8_BOM: &str = "\u{feff}";

const ROW_SEPARATOR: &[u8] = b"\r\n";

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while building or saving a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A row could not be serialised.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer could not hand back its buffer.
    #[error("could not finish report: {0}")]
    Flush(#[source] io::Error),

    /// The finished report could not be written to disk.
    #[error("could not write report to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Serde row that mirrors the CSV layout
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    resource: &'a str,
    days_of_week: String,
    work_days: u8,
    total: Decimal,
    jama: Decimal,
    net_payment: Decimal,
    paid: &'static str,
}

impl<'a> From<&'a LedgerEntry> for ReportRow<'a> {
    fn from(entry: &'a LedgerEntry) -> Self {
        Self {
            resource: entry.worker_name(),
            days_of_week: quoted(entry.worked_days_label()),
            work_days: entry.worked_day_count(),
            total: entry.gross_total(),
            jama: entry.repayment(),
            net_payment: entry.net_payment(),
            paid: if entry.is_paid() { "Yes" } else { "No" },
        }
    }
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Suggested file name for a report generated on `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use wage_core::report::report_file_name;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(report_file_name(date), "resource-report-2024-03-15.csv");
/// ```
pub fn report_file_name(date: NaiveDate) -> String {
    format!("resource-report-{}.csv", date.format("%Y-%m-%d"))
}

/// Serialises the whole ledger, header first, into CSV bytes.
///
/// # Errors
///
/// * [`ExportError::Csv`] if a row cannot be written.
/// * [`ExportError::Flush`] if the writer cannot release its buffer.
pub fn write_csv(ledger: &Ledger) -> Result<Vec<u8>, ExportError> {
    let buffer = UTF8_BOM.as_bytes().to_vec();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false) // header is written explicitly so empty ledgers still get one
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(buffer);

    writer.write_record(REPORT_HEADER)?;
    for entry in ledger {
        writer.serialize(ReportRow::from(entry))?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(io::Error::new(e.error().kind(), e.to_string())))?;

    if bytes.ends_with(ROW_SEPARATOR) {
        bytes.truncate(bytes.len() - ROW_SEPARATOR.len());
    }
    Ok(bytes)
}

/// Wraps a field in double quotes, doubling any quote inside it.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// A finished report ready to hand to a file-save surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub file_name: String,
    pub contents: Vec<u8>,
    pub rows: usize,
}

impl Report {
    /// Builds the report for `ledger`, naming it after today's date.
    pub fn build(
        ledger: &Ledger,
        clock: &impl Clock,
    ) -> Result<Self, ExportError> {
        let file_name = report_file_name(clock.today());
        let contents = write_csv(ledger).inspect_err(|e| {
            error!(error = %e, "failed to build report");
        })?;

        info!(file = %file_name, entries = ledger.len(), "built report");
        Ok(Self {
            file_name,
            contents,
            rows: ledger.len() + 1,
        })
    }

    /// Writes the report to `path`, replacing any existing file.
    pub fn save_to(
        &self,
        path: &Path,
    ) -> Result<(), ExportError> {
        debug!(path = %path.display(), bytes = self.contents.len(), "saving report");
        fs::write(path, &self.contents).map_err(|source| {
            error!(path = %path.display(), error = %source, "failed to save report");
            ExportError::Write {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{FixedClock, Locale, Roster, Weekday, WeekdayFlags, WorkerId};

    const HEADER: &str = "Resource,Days of the Week,Work Days,Total,Jama,Net Payment,Paid";

    fn push_entry(
        ledger: &mut Ledger,
        id: &'static str,
        days: &[Weekday],
        repayment: Decimal,
        locale: Locale,
    ) {
        let roster = Roster::default();
        let worker = roster.find(WorkerId::new(id)).unwrap();
        let flags: WeekdayFlags = days.iter().copied().collect();
        ledger.append(LedgerEntry::new(worker, &flags, repayment, locale));
    }

    fn as_text(bytes: &[u8]) -> &str {
        std::str::from_utf8(bytes).unwrap()
    }

    #[test]
    fn empty_ledger_has_bom_and_header_only() {
        let bytes = write_csv(&Ledger::new()).unwrap();

        assert_eq!(as_text(&bytes), format!("{UTF8_BOM}{HEADER}"));
    }

    #[test]
    fn payload_starts_with_utf8_bom() {
        let bytes = write_csv(&Ledger::new()).unwrap();

        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn multi_day_label_is_quoted_in_one_field() {
        let mut ledger = Ledger::new();
        push_entry(
            &mut ledger,
            "mani",
            &[Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
            dec!(100),
            Locale::English,
        );

        let bytes = write_csv(&ledger).unwrap();

        assert_eq!(
            as_text(&bytes),
            format!(
                "{UTF8_BOM}{HEADER}\r\nMani,\"Monday, Wednesday, Friday\",3,1200,100,1100,No"
            )
        );
    }

    #[test]
    fn single_day_label_is_still_quoted() {
        let mut ledger = Ledger::new();
        push_entry(&mut ledger, "mohan", &[Weekday::Sunday], dec!(0), Locale::English);

        let bytes = write_csv(&ledger).unwrap();

        assert_eq!(
            as_text(&bytes),
            format!("{UTF8_BOM}{HEADER}\r\nMohan,\"Sunday\",1,500,0,500,No")
        );
    }

    #[test]
    fn rows_are_separated_not_terminated_by_crlf() {
        let mut ledger = Ledger::new();
        push_entry(&mut ledger, "mani", &[Weekday::Monday], dec!(0), Locale::English);
        push_entry(
            &mut ledger,
            "anni",
            &[Weekday::Tuesday, Weekday::Thursday],
            dec!(50),
            Locale::English,
        );

        let bytes = write_csv(&ledger).unwrap();

        let mut expected = UTF8_BOM.as_bytes().to_vec();
        expected.extend_from_slice(HEADER.as_bytes());
        expected.extend_from_slice(b"\r\nMani,\"Monday\",1,400,0,400,No");
        expected.extend_from_slice("\r\nAnni,\"Tuesday, Thursday\",2,800,50,750,No".as_bytes());
        assert_eq!(bytes, expected);
        assert!(!bytes.ends_with(ROW_SEPARATOR));
    }

    #[test]
    fn quoted_doubles_embedded_quotes() {
        assert_eq!(quoted("Monday"), "\"Monday\"");
        assert_eq!(quoted("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn paid_entries_are_marked_yes() {
        let mut ledger = Ledger::new();
        push_entry(&mut ledger, "mohan", &[Weekday::Sunday], dec!(0), Locale::English);
        ledger.toggle_paid(0).unwrap();

        let bytes = write_csv(&ledger).unwrap();

        assert!(as_text(&bytes).ends_with("\r\nMohan,\"Sunday\",1,500,0,500,Yes"));
    }

    #[test]
    fn kannada_text_is_written_verbatim() {
        let mut ledger = Ledger::new();
        push_entry(
            &mut ledger,
            "anni",
            &[Weekday::Monday, Weekday::Tuesday],
            dec!(0),
            Locale::Kannada,
        );

        let bytes = write_csv(&ledger).unwrap();

        assert!(as_text(&bytes).ends_with("\r\nಅನ್ನಿ,\"ಸೋಮವಾರ, ಮಂಗಳವಾರ\",2,800,0,800,No"));
    }

    #[test]
    fn negative_net_payment_is_exported() {
        let mut ledger = Ledger::new();
        push_entry(&mut ledger, "mani", &[Weekday::Monday], dec!(1000), Locale::English);

        let bytes = write_csv(&ledger).unwrap();

        assert!(as_text(&bytes).ends_with("\r\nMani,\"Monday\",1,400,1000,-600,No"));
    }

    #[test]
    fn build_names_report_after_clock_date() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        let mut ledger = Ledger::new();
        push_entry(&mut ledger, "mani", &[Weekday::Monday], dec!(0), Locale::English);

        let report = Report::build(&ledger, &clock).unwrap();

        assert_eq!(report.file_name, "resource-report-2024-03-15.csv");
        assert_eq!(report.rows, 2);
    }

    #[test]
    fn save_to_missing_directory_reports_path() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        let report = Report::build(&Ledger::new(), &clock).unwrap();
        let path = std::env::temp_dir()
            .join("wage-core-missing-dir")
            .join("nested")
            .join(&report.file_name);

        let err = report.save_to(&path).unwrap_err();

        match err {
            ExportError::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
