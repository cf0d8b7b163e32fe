//! Display formatting for amounts and dates.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with two decimals and comma-grouped thousands.
///
/// Midpoints round away from zero.
///
/// # Examples
///
/// ```
/// use payroll_docs::documents::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(12345, 1)), "1,234.50");
/// assert_eq!(format_amount(Decimal::new(-600000, 0)), "-600,000.00");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Payslip amount cell: `"NA"` for zero, otherwise [`format_amount`].
///
/// ```
/// use payroll_docs::documents::amount_or_na;
/// use rust_decimal::Decimal;
///
/// assert_eq!(amount_or_na(Decimal::ZERO), "NA");
/// assert_eq!(amount_or_na(Decimal::new(150, 0)), "150.00");
/// ```
pub fn amount_or_na(value: Decimal) -> String {
    if value.is_zero() {
        "NA".to_string()
    } else {
        format_amount(value)
    }
}

/// `15-Jan-2025`
pub fn offer_date(date: DateTime<Utc>) -> String {
    date.format("%d-%b-%Y").to_string()
}

/// `15 Jan 2025`
pub fn letter_date(date: DateTime<Utc>) -> String {
    date.format("%d %b %Y").to_string()
}

/// `January 2025`
pub fn month_year(date: DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}
