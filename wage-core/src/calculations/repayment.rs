//! Parsing of the free-text repayment ("jama") field.
//!
//! The field is deliberately lenient. Leading whitespace and an optional sign
//! are accepted, then as many digits as follow; anything after the digits is
//! ignored. Input with no leading integer counts as zero.
//!
//! | Input      | Parsed |
//! |------------|--------|
//! | `""`       | 0      |
//! | `"100"`    | 100    |
//! | `" 250 "`  | 250    |
//! | `"5abc"`   | 5      |
//! | `"12.75"`  | 12     |
//! | `"-40"`    | -40    |
//! | `"abc"`    | 0      |

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("leading integer pattern is valid"));

/// Parses a repayment amount in whole rupees, defaulting to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use wage_core::calculations::parse_repayment;
///
/// assert_eq!(parse_repayment("100"), Decimal::from(100));
/// assert_eq!(parse_repayment("5abc"), Decimal::from(5));
/// assert_eq!(parse_repayment(""), Decimal::ZERO);
/// ```
pub fn parse_repayment(input: &str) -> Decimal {
    let Some(digits) = LEADING_INTEGER.captures(input).and_then(|c| c.get(1)) else {
        return Decimal::ZERO;
    };

    match digits.as_str().parse::<i64>() {
        Ok(value) => Decimal::from(value),
        Err(e) => {
            warn!(input, "repayment out of range, using 0: {}", e);
            Decimal::ZERO
        }
    }
}
