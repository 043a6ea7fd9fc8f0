//! Core data models for the Salary Simulation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod input;
mod period;
mod status;

pub use breakdown::SalaryBreakdown;
pub use input::{SalaryInput, coerce_amount};
pub use period::{PayPeriod, months_per_year};
pub use status::EmploymentStatus;
