use rust_decimal::Decimal;
use wage_core::{Locale, Worker};

/// Formats a whole-rupee amount with the rupee sign, e.g. `₹1200` or `-₹600`.
pub fn format_rupees(amount: Decimal) -> String {
    if amount.is_sign_negative() && !amount.is_zero() {
        format!("-₹{}", amount.abs())
    } else {
        format!("₹{}", amount.abs())
    }
}

/// Label for a worker in the picker: name and daily rate.
pub fn worker_option_label(
    worker: &Worker,
    locale: Locale,
) -> String {
    format!(
        "{} ({})",
        worker.display_name(locale),
        format_rupees(worker.rate())
    )
}
