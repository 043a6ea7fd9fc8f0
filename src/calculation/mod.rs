//! Calculation logic for the Salary Simulation Engine.
//!
//! This module contains the calculation steps for deriving the salary
//! breakdown: normalization of the entered amount to a monthly gross,
//! employee social contributions (net before tax), flat withholding tax
//! (net after tax), and employer-side contributions (total employer cost),
//! plus the [`calculate`] entry point that composes them.

mod contributions;
mod employer_cost;
mod normalize;
mod pipeline;
mod withholding;

pub use contributions::net_before_tax;
pub use employer_cost::total_employer_cost;
pub use normalize::normalize_monthly_gross;
pub use pipeline::calculate;
pub use withholding::net_after_tax;
