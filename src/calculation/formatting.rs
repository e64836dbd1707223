//! Overtime formatting helpers.
//!
//! Pure, deterministic functions of the minute count, used by upstream
//! reporting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats overtime minutes as `H:MM`.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::format_ot;
///
/// assert_eq!(format_ot(90), "1:30");
/// assert_eq!(format_ot(0), "0:00");
/// assert_eq!(format_ot(605), "10:05");
/// ```
pub fn format_ot(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Converts overtime minutes to decimal hours with two decimal places.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::ot_in_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(ot_in_hours(90).to_string(), "1.50");
/// assert_eq!(ot_in_hours(0).to_string(), "0.00");
/// ```
pub fn ot_in_hours(minutes: u32) -> Decimal {
    let mut hours = (Decimal::from(minutes) / Decimal::from(60))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    hours.rescale(2);
    hours
}
