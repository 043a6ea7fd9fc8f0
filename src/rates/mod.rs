//! Contribution rate table for French salary estimates.
//!
//! This module contains the strongly-typed rate table consumed by the
//! calculation pipeline. Rates are approximate 2025 figures, built in as a
//! process-wide constant: the simulator deliberately has no configurable rate
//! source.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmploymentStatus;

/// The rate pair attached to one employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Employee-side social contribution rate (charges salariales).
    pub social: Decimal,
    /// Employer-side social contribution rate (charges patronales).
    pub employer: Decimal,
}

/// The full rate table: one rate pair per status plus the withholding rate.
///
/// # Example
///
/// ```
/// use paie_engine::models::EmploymentStatus;
/// use paie_engine::rates::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::france_2025();
/// assert_eq!(table.rates_for(EmploymentStatus::Cadre).social, Decimal::new(25, 2));
/// assert_eq!(table.flat_tax, Decimal::new(5, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Rates for non-cadre employment.
    pub non_cadre: ContributionRates,
    /// Rates for cadre employment.
    pub cadre: ContributionRates,
    /// Flat withholding tax rate (prélèvement à la source, estimated average,
    /// not a regulatory bracket model).
    pub flat_tax: Decimal,
}

impl RateTable {
    /// Returns the approximate 2025 French rate table.
    pub fn france_2025() -> Self {
        Self {
            non_cadre: ContributionRates {
                social: Decimal::new(22, 2),
                employer: Decimal::new(42, 2),
            },
            cadre: ContributionRates {
                social: Decimal::new(25, 2),
                employer: Decimal::new(45, 2),
            },
            flat_tax: Decimal::new(5, 2),
        }
    }

    /// Selects the rate pair for an employment status.
    pub fn rates_for(&self, status: EmploymentStatus) -> &ContributionRates {
        match status {
            EmploymentStatus::NonCadre => &self.non_cadre,
            EmploymentStatus::Cadre => &self.cadre,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::france_2025()
    }
}
