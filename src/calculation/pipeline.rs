//! The composed calculation pipeline.

use tracing::debug;

use crate::models::{SalaryBreakdown, SalaryInput};
use crate::rates::RateTable;

use super::{net_after_tax, net_before_tax, normalize_monthly_gross, total_employer_cost};

/// Derives the full salary breakdown for one input.
///
/// Pure and deterministic: identical inputs always yield identical outputs,
/// and the function has no side effects beyond a debug log line. It is safe
/// to call on every keystroke.
///
/// # Example
///
/// ```
/// use paie_engine::calculation::calculate;
/// use paie_engine::models::{EmploymentStatus, PayPeriod, SalaryInput};
/// use paie_engine::rates::RateTable;
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(
///     Decimal::from(3000),
///     PayPeriod::Month,
///     EmploymentStatus::NonCadre,
/// );
/// let breakdown = calculate(&input, &RateTable::france_2025());
/// assert_eq!(breakdown.net_monthly, Decimal::from(2340));
/// assert_eq!(breakdown.total_cost_monthly, Decimal::from(4260));
/// ```
pub fn calculate(input: &SalaryInput, table: &RateTable) -> SalaryBreakdown {
    let gross_monthly = normalize_monthly_gross(input.amount, input.period);
    let rates = table.rates_for(input.status);

    let net_monthly = net_before_tax(gross_monthly, rates);
    let net_after_tax_monthly = net_after_tax(net_monthly, table.flat_tax);
    let total_cost_monthly = total_employer_cost(gross_monthly, rates);

    debug!(
        amount = %input.amount,
        period = %input.period,
        status = %input.status,
        gross_monthly = %gross_monthly,
        net_monthly = %net_monthly,
        "Calculated salary breakdown"
    );

    SalaryBreakdown {
        gross_monthly,
        net_monthly,
        net_after_tax_monthly,
        total_cost_monthly,
    }
}
