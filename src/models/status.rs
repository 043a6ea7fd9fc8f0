//! Employment status model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// French employment classification for contribution purposes.
///
/// Cadre (executive/managerial) employees carry higher employee and employer
/// contribution rates than non-cadre employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Non-executive employment.
    NonCadre,
    /// Executive/managerial employment.
    Cadre,
}

impl EmploymentStatus {
    /// Returns true for cadre (executive) status.
    ///
    /// # Example
    ///
    /// ```
    /// use paie_engine::models::EmploymentStatus;
    ///
    /// assert!(EmploymentStatus::Cadre.is_cadre());
    /// assert!(!EmploymentStatus::NonCadre.is_cadre());
    /// ```
    pub fn is_cadre(&self) -> bool {
        *self == EmploymentStatus::Cadre
    }

    /// Returns the lowercase tag used by the status selector on the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::NonCadre => "non_cadre",
            EmploymentStatus::Cadre => "cadre",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
