//! Error types for the Salary Simulation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation pipeline itself is infallible (invalid input is coerced to
//! zero, never rejected), so the only errors in the crate come from the
//! presentation boundary where a concrete display backend can fail.

use thiserror::Error;

/// The main error type for the Salary Simulation Engine.
///
/// # Example
///
/// ```
/// use paie_engine::error::EngineError;
///
/// let error = EngineError::MissingTarget {
///     field: "net".to_string(),
///     period: "year".to_string(),
/// };
/// assert_eq!(error.to_string(), "No display target bound for 'net' (year)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A display backend has no target bound for a field/period pair.
    #[error("No display target bound for '{field}' ({period})")]
    MissingTarget {
        /// The output field that could not be displayed.
        field: String,
        /// The period tag of the missing target.
        period: String,
    },

    /// A display backend failed while writing to one of its targets.
    #[error("Failed to render display target '{target}': {message}")]
    RenderFailed {
        /// The target that failed.
        target: String,
        /// A description of the render failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
