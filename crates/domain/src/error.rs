//! Unified error types for the domain layer
//!
//! Every constructor that enforces an invariant on generation parameters
//! returns this error, so adapters never have to fall back to strings.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., inverted range, non-integral bound)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A value fell outside the bounds the node schema allows
    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfBounds {
        field: &'static str,
        min: i64,
        max: i64,
        actual: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants are violated:
    /// - `min` is greater than `max`
    /// - A bound that must be an integer has a fractional part
    /// - A value is not a finite number
    ///
    /// # Example
    /// ```ignore
    /// if min > max {
    ///     return Err(DomainError::validation("Min cannot be greater than Max"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an out-of-bounds error for a schema-limited field
    pub fn out_of_bounds(field: &'static str, min: i64, max: i64, actual: impl ToString) -> Self {
        Self::OutOfBounds {
            field,
            min,
            max,
            actual: actual.to_string(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant:
    ///
    /// ```ignore
    /// impl FromStr for Operation {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "integer" => Ok(Self::Integer),
    ///             _ => Err(DomainError::parse(format!("Unknown operation: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::OutOfBounds { .. })
    }
}
