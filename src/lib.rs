//! Salary Simulation Engine for French payroll estimates.
//!
//! This crate provides functionality for simulating French gross-to-net salary
//! conversions: given a gross amount, a pay period, and an employment status
//! (cadre or non-cadre), it derives the monthly net salary, net salary after
//! withholding tax, and total employer cost using fixed 2025 contribution
//! rates, and formats the results as French-locale euro strings for display.

#![warn(missing_docs)]

pub mod calculation;
pub mod display;
pub mod error;
pub mod models;
pub mod rates;
pub mod ui;
