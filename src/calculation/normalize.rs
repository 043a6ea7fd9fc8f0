//! Monthly gross normalization.
//!
//! This module converts the entered amount and its period into the monthly
//! gross figure every other calculation step works from.

use rust_decimal::Decimal;

use crate::models::{PayPeriod, months_per_year};

/// Normalizes an entered amount to a monthly gross figure.
///
/// Negative amounts clamp to zero (the input layer already coerces
/// non-numeric text to zero, so this is the last line of defense for a
/// caller bypassing [`SalaryInput`](crate::models::SalaryInput)); yearly
/// amounts are divided by twelve.
///
/// # Example
///
/// ```
/// use paie_engine::calculation::normalize_monthly_gross;
/// use paie_engine::models::PayPeriod;
/// use rust_decimal::Decimal;
///
/// let monthly = normalize_monthly_gross(Decimal::from(60000), PayPeriod::Year);
/// assert_eq!(monthly, Decimal::from(5000));
/// ```
pub fn normalize_monthly_gross(amount: Decimal, period: PayPeriod) -> Decimal {
    let clamped = if amount < Decimal::ZERO {
        Decimal::ZERO
    } else {
        amount
    };
    match period {
        PayPeriod::Month => clamped,
        PayPeriod::Year => clamped / months_per_year(),
    }
}
