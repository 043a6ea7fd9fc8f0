//! Salary breakdown model.
//!
//! This module contains the [`SalaryBreakdown`] type that captures the four
//! monetary figures derived from one simulation, all normalized to monthly
//! values. Yearly variants are derived accessors (monthly × 12); they are
//! display projections, not independent state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::months_per_year;

/// The four monthly figures derived from one salary simulation.
///
/// All values are non-negative and recomputed from scratch on every input
/// change; a breakdown has no identity or lifecycle of its own.
///
/// # Example
///
/// ```
/// use paie_engine::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     gross_monthly: Decimal::from(3000),
///     net_monthly: Decimal::from(2340),
///     net_after_tax_monthly: Decimal::from(2223),
///     total_cost_monthly: Decimal::from(4260),
/// };
/// assert_eq!(breakdown.gross_yearly(), Decimal::from(36000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Gross salary per month.
    pub gross_monthly: Decimal,
    /// Net salary per month, before withholding tax.
    pub net_monthly: Decimal,
    /// Net salary per month, after the flat withholding tax.
    pub net_after_tax_monthly: Decimal,
    /// Total employer cost per month.
    pub total_cost_monthly: Decimal,
}

impl SalaryBreakdown {
    /// A breakdown with every figure at zero, as rendered before any input.
    pub fn zero() -> Self {
        Self {
            gross_monthly: Decimal::ZERO,
            net_monthly: Decimal::ZERO,
            net_after_tax_monthly: Decimal::ZERO,
            total_cost_monthly: Decimal::ZERO,
        }
    }

    // The ×12 projections saturate at Decimal::MAX rather than panic on
    // extreme monthly figures.

    /// Gross salary per year (monthly × 12).
    pub fn gross_yearly(&self) -> Decimal {
        self.gross_monthly.saturating_mul(months_per_year())
    }

    /// Net salary per year, before withholding tax (monthly × 12).
    pub fn net_yearly(&self) -> Decimal {
        self.net_monthly.saturating_mul(months_per_year())
    }

    /// Net salary per year, after withholding tax (monthly × 12).
    pub fn net_after_tax_yearly(&self) -> Decimal {
        self.net_after_tax_monthly.saturating_mul(months_per_year())
    }

    /// Total employer cost per year (monthly × 12).
    pub fn total_cost_yearly(&self) -> Decimal {
        self.total_cost_monthly.saturating_mul(months_per_year())
    }
}
