//! Employer cost calculation.
//!
//! This module derives the total employer cost by adding employer-side
//! social contributions (charges patronales) on top of the monthly gross.

use rust_decimal::Decimal;

use crate::rates::ContributionRates;

/// Adds employer social contributions to a monthly gross.
///
/// `total_cost = gross × (1 + employer)`, so a 42% non-cadre rate costs the
/// employer 142% of the gross and a 45% cadre rate costs 145%. The
/// multiplication saturates at `Decimal::MAX`; no parseable amount can make
/// this step panic.
///
/// # Example
///
/// ```
/// use paie_engine::calculation::total_employer_cost;
/// use paie_engine::models::EmploymentStatus;
/// use paie_engine::rates::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::france_2025();
/// let rates = table.rates_for(EmploymentStatus::NonCadre);
/// let cost = total_employer_cost(Decimal::from(3000), rates);
/// assert_eq!(cost, Decimal::from(4260));
/// ```
pub fn total_employer_cost(gross_monthly: Decimal, rates: &ContributionRates) -> Decimal {
    gross_monthly.saturating_mul(Decimal::ONE + rates.employer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentStatus;
    use crate::rates::RateTable;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// EC-001: non-cadre cost is 142% of gross
    #[test]
    fn test_non_cadre_cost_is_142_percent() {
        let table = RateTable::france_2025();
        let cost = total_employer_cost(dec("3000"), table.rates_for(EmploymentStatus::NonCadre));
        assert_eq!(cost, dec("4260"));
    }

    /// EC-002: cadre cost is 145% of gross
    #[test]
    fn test_cadre_cost_is_145_percent() {
        let table = RateTable::france_2025();
        let cost = total_employer_cost(dec("5000"), table.rates_for(EmploymentStatus::Cadre));
        assert_eq!(cost, dec("7250"));
    }

    /// EC-003: zero gross costs nothing
    #[test]
    fn test_zero_gross_costs_nothing() {
        let table = RateTable::france_2025();
        let cost = total_employer_cost(Decimal::ZERO, table.rates_for(EmploymentStatus::Cadre));
        assert_eq!(cost, Decimal::ZERO);
    }

    /// EC-004: amounts near Decimal::MAX saturate instead of panicking
    #[test]
    fn test_extreme_gross_saturates() {
        let table = RateTable::france_2025();
        let huge = dec("70000000000000000000000000000");
        let cost = total_employer_cost(huge, table.rates_for(EmploymentStatus::NonCadre));
        assert_eq!(cost, Decimal::MAX);
    }

    #[test]
    fn test_cost_always_at_least_gross() {
        let table = RateTable::france_2025();
        let gross = dec("1234.56");
        for status in [EmploymentStatus::NonCadre, EmploymentStatus::Cadre] {
            assert!(total_employer_cost(gross, table.rates_for(status)) > gross);
        }
    }
}
