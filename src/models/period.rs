//! Pay period model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns the number of months in a year as a `Decimal`.
///
/// Yearly amounts are divided by this to normalize to monthly figures, and
/// monthly figures are multiplied by it for yearly display.
pub fn months_per_year() -> Decimal {
    Decimal::from(12)
}

/// The period a salary amount refers to.
///
/// The period selector on the input form carries these two values, and every
/// display target is tagged with one of them to select between the monthly
/// figure and its yearly (×12) variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriod {
    /// A monthly amount.
    Month,
    /// A yearly amount (twelve months, no 13th-month convention).
    Year,
}

impl PayPeriod {
    /// Returns the lowercase tag used by form values and display targets.
    ///
    /// # Example
    ///
    /// ```
    /// use paie_engine::models::PayPeriod;
    ///
    /// assert_eq!(PayPeriod::Month.as_str(), "month");
    /// assert_eq!(PayPeriod::Year.as_str(), "year");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PayPeriod::Month => "month",
            PayPeriod::Year => "year",
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_uses_snake_case_tags() {
        assert_eq!(serde_json::to_string(&PayPeriod::Month).unwrap(), "\"month\"");
        assert_eq!(serde_json::to_string(&PayPeriod::Year).unwrap(), "\"year\"");
    }

    #[test]
    fn test_deserialize_from_form_values() {
        let period: PayPeriod = serde_json::from_str("\"year\"").unwrap();
        assert_eq!(period, PayPeriod::Year);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(PayPeriod::Month.to_string(), "month");
        assert_eq!(PayPeriod::Year.to_string(), "year");
    }

    #[test]
    fn test_months_per_year_is_twelve() {
        assert_eq!(months_per_year(), Decimal::from(12));
    }
}
