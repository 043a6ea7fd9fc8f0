//! The rendered view of one salary breakdown.
//!
//! A view carries the eight formatted display strings (four output fields ×
//! two periods) plus the raw breakdown they were built from. Display targets
//! in a concrete backend are tagged with a field and a period; the period tag
//! selects between the monthly figure and its ×12 variant.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::display::format_eur;
use crate::models::{PayPeriod, SalaryBreakdown, months_per_year};

/// The four derived output fields of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputField {
    /// Gross salary.
    Gross,
    /// Net salary before withholding tax.
    Net,
    /// Net salary after withholding tax.
    NetAfterTax,
    /// Total employer cost.
    TotalCost,
}

impl OutputField {
    /// All four fields, in display order.
    pub const ALL: [OutputField; 4] = [
        OutputField::Gross,
        OutputField::Net,
        OutputField::NetAfterTax,
        OutputField::TotalCost,
    ];

    /// Returns the lowercase tag used by display targets.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputField::Gross => "gross",
            OutputField::Net => "net",
            OutputField::NetAfterTax => "net_after_tax",
            OutputField::TotalCost => "total_cost",
        }
    }
}

impl fmt::Display for OutputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One formatted string destined for one display target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayValue {
    /// The output field this value belongs to.
    pub field: OutputField,
    /// The period tag of the target (month, or year for the ×12 variant).
    pub period: PayPeriod,
    /// The formatted euro string to write into the target.
    pub text: String,
}

/// The full rendered view of one breakdown.
///
/// # Example
///
/// ```
/// use paie_engine::models::{PayPeriod, SalaryBreakdown};
/// use paie_engine::ui::{OutputField, SalaryView};
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown {
///     gross_monthly: Decimal::from(3000),
///     net_monthly: Decimal::from(2340),
///     net_after_tax_monthly: Decimal::from(2223),
///     total_cost_monthly: Decimal::from(4260),
/// };
/// let view = SalaryView::from_breakdown(&breakdown);
/// assert_eq!(
///     view.text_for(OutputField::Gross, PayPeriod::Year),
///     Some("36\u{202F}000\u{A0}€")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryView {
    /// The breakdown the view was built from.
    pub breakdown: SalaryBreakdown,
    /// The eight formatted values, one per (field, period) pair.
    pub values: Vec<DisplayValue>,
}

impl SalaryView {
    /// Builds the view for a breakdown, formatting every field in both
    /// periods through [`format_eur`].
    pub fn from_breakdown(breakdown: &SalaryBreakdown) -> Self {
        let mut values = Vec::with_capacity(8);
        for field in OutputField::ALL {
            let monthly = Self::monthly_amount(breakdown, field);
            values.push(DisplayValue {
                field,
                period: PayPeriod::Month,
                text: format_eur(monthly),
            });
            values.push(DisplayValue {
                field,
                period: PayPeriod::Year,
                text: format_eur(monthly.saturating_mul(months_per_year())),
            });
        }
        Self {
            breakdown: *breakdown,
            values,
        }
    }

    /// Looks up the formatted text for a field/period pair.
    pub fn text_for(&self, field: OutputField, period: PayPeriod) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.field == field && v.period == period)
            .map(|v| v.text.as_str())
    }

    fn monthly_amount(breakdown: &SalaryBreakdown, field: OutputField) -> Decimal {
        match field {
            OutputField::Gross => breakdown.gross_monthly,
            OutputField::Net => breakdown.net_monthly,
            OutputField::NetAfterTax => breakdown.net_after_tax_monthly,
            OutputField::TotalCost => breakdown.total_cost_monthly,
        }
    }
}
