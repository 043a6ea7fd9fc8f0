//! Input events from the form.

use crate::models::{EmploymentStatus, PayPeriod};

/// A change to one of the three input fields.
///
/// The amount arrives as the raw text of the field; coercion to a number
/// happens inside the engine so that a backend never has to pre-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The amount field changed; carries the raw field text.
    AmountChanged(String),
    /// The period selector changed.
    PeriodChanged(PayPeriod),
    /// The status selector changed.
    StatusChanged(EmploymentStatus),
}
