//! Employee social contribution calculation.
//!
//! This module derives the net salary before withholding tax by deducting
//! employee-side social contributions (charges salariales) from the monthly
//! gross.

use rust_decimal::Decimal;

use crate::rates::ContributionRates;

/// Deducts employee social contributions from a monthly gross.
///
/// `net = gross × (1 − social)`, so a 22% non-cadre rate leaves 78% of the
/// gross and a 25% cadre rate leaves 75%.
///
/// # Example
///
/// ```
/// use paie_engine::calculation::net_before_tax;
/// use paie_engine::models::EmploymentStatus;
/// use paie_engine::rates::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::france_2025();
/// let rates = table.rates_for(EmploymentStatus::NonCadre);
/// let net = net_before_tax(Decimal::from(3000), rates);
/// assert_eq!(net, Decimal::from(2340));
/// ```
pub fn net_before_tax(gross_monthly: Decimal, rates: &ContributionRates) -> Decimal {
    gross_monthly.saturating_mul(Decimal::ONE - rates.social)
}
