//! Gross and net pay for one worker's week.
//!
//! | Value          | Rule                                  |
//! |----------------|---------------------------------------|
//! | worked days    | number of flagged weekdays (0 to 7)   |
//! | gross total    | daily rate × worked days              |
//! | net payment    | gross total − repayment               |
//! | days label     | flagged day labels joined with `", "` |

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{Locale, WeekdayFlags};

/// Separator between day names in a worked-days label.
pub const DAY_LABEL_SEPARATOR: &str = ", ";

/// Daily rate multiplied by the number of days worked.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wage_core::calculations::gross_total;
///
/// assert_eq!(gross_total(dec!(400), 3), dec!(1200));
/// assert_eq!(gross_total(dec!(0), 5), dec!(0));
/// ```
pub fn gross_total(
    daily_rate: Decimal,
    worked_day_count: u8,
) -> Decimal {
    daily_rate * Decimal::from(worked_day_count)
}

/// Amount still owed once the repayment is deducted. May be negative.
pub fn net_payment(
    gross_total: Decimal,
    repayment: Decimal,
) -> Decimal {
    gross_total - repayment
}

/// Human-readable list of the flagged days in the given locale.
///
/// Days are always listed Monday first. No flagged days gives an empty string.
pub fn worked_days_label(
    flags: &WeekdayFlags,
    locale: Locale,
) -> String {
    flags
        .worked_days()
        .map(|day| day.label(locale))
        .collect::<Vec<_>>()
        .join(DAY_LABEL_SEPARATOR)
}

/// Every derived figure for the entry currently being built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PayBreakdown {
    pub daily_rate: Decimal,
    pub worked_day_count: u8,
    pub gross_total: Decimal,
    pub repayment: Decimal,
    pub net_payment: Decimal,
}

impl PayBreakdown {
    pub fn compute(
        daily_rate: Decimal,
        flags: &WeekdayFlags,
        repayment: Decimal,
    ) -> Self {
        let worked_day_count = flags.count();
        let gross_total = gross_total(daily_rate, worked_day_count);

        Self {
            daily_rate,
            worked_day_count,
            gross_total,
            repayment,
            net_payment: net_payment(gross_total, repayment),
        }
    }
}
