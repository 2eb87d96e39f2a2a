//! End-to-end tests of a tracking session: fill the form, submit, mark paid
//! and export, then read the CSV back the way a spreadsheet would.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use wage_core::{FixedClock, Locale, Session, Weekday, WorkerId};

const MANI: WorkerId = WorkerId::new("mani");
const MOHAN: WorkerId = WorkerId::new("mohan");
const ANNI: WorkerId = WorkerId::new("anni");

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
}

fn record(
    session: &mut Session,
    worker: WorkerId,
    days: &[Weekday],
    repayment: &str,
) {
    session.select_worker(Some(worker)).unwrap();
    for day in days {
        session.toggle_day(*day);
    }
    session.set_repayment_input(repayment);
    session.submit().unwrap();
}

/// Parses exported bytes into rows of fields, dropping the byte-order mark.
fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
    let text = std::str::from_utf8(bytes).unwrap();
    let text = text.strip_prefix('\u{feff}').expect("report starts with a BOM");

    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes())
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn mani_three_days_with_jama() {
    let mut session = Session::new(Locale::English);
    session.select_worker(Some(MANI)).unwrap();
    session.toggle_day(Weekday::Monday);
    session.toggle_day(Weekday::Wednesday);
    session.toggle_day(Weekday::Friday);
    session.set_repayment_input("100");

    let preview = session.preview();
    assert_eq!(preview.daily_rate, dec!(400));
    assert_eq!(preview.worked_day_count, 3);
    assert_eq!(preview.gross_total, dec!(1200));

    let entry = session.submit().unwrap();
    assert_eq!(entry.worker_name(), "Mani");
    assert_eq!(entry.worked_days_label(), "Monday, Wednesday, Friday");
    assert_eq!(entry.worked_day_count(), 3);
    assert_eq!(entry.gross_total(), dec!(1200));
    assert_eq!(entry.repayment(), dec!(100));
    assert!(!entry.is_paid());

    let report = session.export(&clock()).unwrap();
    let text = String::from_utf8(report.contents).unwrap();
    assert!(text.contains("\r\nMani,\"Monday, Wednesday, Friday\",3,1200,100,1100,No"));
    assert_eq!(report.file_name, "resource-report-2024-03-15.csv");
}

#[test]
fn empty_jama_means_net_equals_gross() {
    let mut session = Session::new(Locale::English);
    record(&mut session, MOHAN, &[Weekday::Tuesday, Weekday::Thursday], "");

    let entry = session.ledger().get(0).unwrap();

    assert_eq!(entry.repayment(), dec!(0));
    assert_eq!(entry.net_payment(), entry.gross_total());
    assert_eq!(entry.net_payment(), dec!(1000));
}

#[test]
fn export_has_one_row_per_entry_plus_header() {
    let mut session = Session::new(Locale::English);
    record(&mut session, MANI, &[Weekday::Monday], "5abc");
    record(&mut session, MOHAN, &Weekday::ALL, "1000");
    record(&mut session, ANNI, &[Weekday::Saturday, Weekday::Sunday], "x");

    let report = session.export(&clock()).unwrap();
    let rows = read_rows(&report.contents);

    assert_eq!(rows.len(), session.ledger().len() + 1);
    assert_eq!(report.rows, rows.len());
    assert_eq!(
        rows[0],
        vec![
            "Resource",
            "Days of the Week",
            "Work Days",
            "Total",
            "Jama",
            "Net Payment",
            "Paid"
        ]
    );

    for row in &rows[1..] {
        let total: i64 = row[3].parse().unwrap();
        let jama: i64 = row[4].parse().unwrap();
        let net: i64 = row[5].parse().unwrap();
        assert_eq!(net, total - jama, "row {row:?}");
    }
}

#[test]
fn toggling_paid_is_reflected_on_reexport() {
    let mut session = Session::new(Locale::English);
    record(&mut session, MANI, &[Weekday::Monday], "");
    record(&mut session, ANNI, &[Weekday::Tuesday], "");
    let first = read_rows(&session.export(&clock()).unwrap().contents);

    assert_eq!(session.toggle_paid(1), Ok(true));
    let second = read_rows(&session.export(&clock()).unwrap().contents);

    assert_eq!(second[1], first[1]);
    assert_eq!(first[2][6], "No");
    assert_eq!(second[2][6], "Yes");
    assert_eq!(second[2][..6], first[2][..6]);
}

#[test]
fn language_switch_only_changes_labels() {
    let mut session = Session::new(Locale::English);
    record(&mut session, MANI, &[Weekday::Monday, Weekday::Friday], "50");
    let before = read_rows(&session.export(&clock()).unwrap().contents);

    session.set_locale(Locale::Kannada);
    record(&mut session, MOHAN, &[Weekday::Monday, Weekday::Friday], "50");
    let after = read_rows(&session.export(&clock()).unwrap().contents);

    // The English entry is untouched by the switch.
    assert_eq!(after[1], before[1]);
    // The Kannada entry carries Kannada text but the same header.
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2][0], "ಮೋಹನ್");
    assert_eq!(after[2][1], "ಸೋಮವಾರ, ಶುಕ್ರವಾರ");
    assert_eq!(after[2][3], "1000");
}

#[test]
fn frozen_totals_ignore_later_selection_changes() {
    let mut session = Session::new(Locale::English);
    record(&mut session, MANI, &[Weekday::Monday], "");
    let recorded = session.ledger().get(0).unwrap().clone();

    session.select_worker(Some(MOHAN)).unwrap();
    for day in Weekday::ALL {
        session.toggle_day(day);
    }
    session.set_repayment_input("999");

    assert_eq!(session.ledger().get(0), Some(&recorded));
    assert_eq!(session.preview().gross_total, dec!(3500));
}

#[test]
fn full_roster_can_be_recorded_once_each() {
    let mut session = Session::new(Locale::Kannada);

    while let Some(worker) = session.available_workers().first().map(|w| w.id) {
        record(&mut session, worker, &[Weekday::Wednesday], "");
    }

    assert_eq!(session.ledger().len(), session.roster().len());
    assert!(session.available_workers().is_empty());
    assert_eq!(session.ledger().totals().gross_total, dec!(1800));
}

#[test]
fn single_day_export_keeps_quotes_and_no_trailing_break() {
    let mut session = Session::new(Locale::English);
    record(&mut session, MOHAN, &[Weekday::Sunday], "");

    let report = session.export(&clock()).unwrap();
    let text = String::from_utf8(report.contents).unwrap();

    assert!(text.ends_with("Paid\r\nMohan,\"Sunday\",1,500,0,500,No"));
    assert_eq!(text.matches("\r\n").count(), 1);
}
