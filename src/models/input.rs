//! Salary input model and raw-value coercion.
//!
//! This module defines [`SalaryInput`], the normalized form state consumed by
//! the calculation pipeline, and the coercion rule that turns the raw text of
//! the amount field into a usable number.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmploymentStatus, PayPeriod};

/// Coerces the raw text of the amount field into a non-negative amount.
///
/// Empty, non-numeric, and negative values all coerce to zero; the engine has
/// no input error state. A comma is accepted as the decimal separator in
/// addition to a dot, the amount field being a French-locale input.
///
/// The whole trimmed value must parse: there is no prefix parsing, so
/// `"12abc"` coerces to zero rather than 12, and `"2500,50"` is read as
/// 2500.50 rather than a truncated 2500.
///
/// # Example
///
/// ```
/// use paie_engine::models::coerce_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(coerce_amount("3000"), Decimal::from(3000));
/// assert_eq!(coerce_amount("2500,50"), Decimal::new(250050, 2));
/// assert_eq!(coerce_amount(""), Decimal::ZERO);
/// assert_eq!(coerce_amount("abc"), Decimal::ZERO);
/// assert_eq!(coerce_amount("-100"), Decimal::ZERO);
/// ```
pub fn coerce_amount(raw: &str) -> Decimal {
    let normalized = raw.trim().replace(',', ".");
    match Decimal::from_str(&normalized) {
        Ok(amount) if amount >= Decimal::ZERO => amount,
        _ => Decimal::ZERO,
    }
}

/// The normalized inputs of one simulation: amount, period, and status.
///
/// The amount is always non-negative; both constructors clamp negative values
/// to zero, so downstream calculation code never sees an invalid amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// The gross amount, in euros, as entered (non-negative).
    pub amount: Decimal,
    /// The period the amount refers to.
    pub period: PayPeriod,
    /// The employment status selecting the contribution rate pair.
    pub status: EmploymentStatus,
}

impl SalaryInput {
    /// Creates a salary input, clamping a negative amount to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use paie_engine::models::{EmploymentStatus, PayPeriod, SalaryInput};
    /// use rust_decimal::Decimal;
    ///
    /// let input = SalaryInput::new(
    ///     Decimal::from(-100),
    ///     PayPeriod::Month,
    ///     EmploymentStatus::NonCadre,
    /// );
    /// assert_eq!(input.amount, Decimal::ZERO);
    /// ```
    pub fn new(amount: Decimal, period: PayPeriod, status: EmploymentStatus) -> Self {
        let amount = if amount < Decimal::ZERO {
            Decimal::ZERO
        } else {
            amount
        };
        Self {
            amount,
            period,
            status,
        }
    }

    /// Creates a salary input from the raw text of the amount field.
    ///
    /// Applies [`coerce_amount`] to the raw value, so invalid text silently
    /// becomes a zero amount.
    pub fn from_raw(raw: &str, period: PayPeriod, status: EmploymentStatus) -> Self {
        Self {
            amount: coerce_amount(raw),
            period,
            status,
        }
    }
}
