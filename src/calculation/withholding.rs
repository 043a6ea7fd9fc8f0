//! Flat withholding tax calculation.
//!
//! This module derives the net salary after tax by applying the flat
//! prélèvement à la source estimate to the net-before-tax figure. The rate
//! is a single illustrative average, not a household tax bracket model.

use rust_decimal::Decimal;

/// Applies the flat withholding tax to a monthly net salary.
///
/// `net_after_tax = net × (1 − flat_tax)`.
///
/// # Example
///
/// ```
/// use paie_engine::calculation::net_after_tax;
/// use rust_decimal::Decimal;
///
/// let after_tax = net_after_tax(Decimal::from(2340), Decimal::new(5, 2));
/// assert_eq!(after_tax, Decimal::from(2223));
/// ```
pub fn net_after_tax(net_monthly: Decimal, flat_tax: Decimal) -> Decimal {
    net_monthly.saturating_mul(Decimal::ONE - flat_tax)
}
