//! # Error Types
//!
//! Structured error types for slab_core. These errors are designed to be
//! informative for both humans and machine consumers, providing enough
//! context to understand and fix issues programmatically.
//!
//! The engine is a pure, deterministic function, so no error is ever worth
//! retrying: the same input fails the same way every time.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::errors::{CalcError, CalcResult};
//!
//! fn check_depth(effective_depth_mm: f64) -> CalcResult<()> {
//!     if effective_depth_mm <= 0.0 {
//!         return Err(CalcError::degenerate_geometry(
//!             "effective_depth_mm",
//!             effective_depth_mm,
//!             "Cover leaves no effective depth",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_depth(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for slab_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Which material enumeration a grade key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeKind {
    Concrete,
    Steel,
}

impl std::fmt::Display for GradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GradeKind::Concrete => "concrete grade",
            GradeKind::Steel => "steel grade",
        };
        write!(f, "{}", name)
    }
}

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A grade key is not part of the material tables
    #[error("Unknown {kind}: '{grade}'")]
    UnknownGrade { kind: GradeKind, grade: String },

    /// Geometry or reinforcement collapsed to a value the procedure cannot divide by
    #[error("Degenerate geometry: {quantity} = {value} - {reason}")]
    DegenerateGeometry {
        quantity: String,
        value: f64,
        reason: String,
    },

    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an UnknownGrade error
    pub fn unknown_grade(kind: GradeKind, grade: impl Into<String>) -> Self {
        CalcError::UnknownGrade {
            kind,
            grade: grade.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate_geometry(quantity: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        CalcError::DegenerateGeometry {
            quantity: quantity.into(),
            value,
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    ///
    /// Always false: the calculation is deterministic.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            CalcError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::degenerate_geometry("effective_depth_mm", -56.0, "Cover exceeds slab depth");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"DegenerateGeometry\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_grade(GradeKind::Concrete, "C99").error_code(), "UNKNOWN_GRADE");
        assert_eq!(
            CalcError::degenerate_geometry("slab_depth_mm", 0.0, "zero").error_code(),
            "DEGENERATE_GEOMETRY"
        );
        assert_eq!(CalcError::invalid_input("span_m", "NaN", "not finite").error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_grade_message() {
        let error = CalcError::unknown_grade(GradeKind::Steel, "250");
        assert_eq!(error.to_string(), "Unknown steel grade: '250'");
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<f64>("not json").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
