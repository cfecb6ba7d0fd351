//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the Muni Budget Stack. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Validation errors name the violating field and the offending value.
//! - The computation core (`muni-calc`) never returns errors for expected
//!   conditions — the calculator and validator always produce complete
//!   result values, and user-facing scenario problems travel as strings
//!   inside `ScenarioImpact.errors`. The types here cover construction
//!   and data-exchange failures only.

use thiserror::Error;

/// Top-level error type for the Muni Budget Stack.
#[derive(Error, Debug)]
pub enum MuniError {
    /// A record failed construction-time validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised when a domain record violates a construction invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// An identifier was empty or whitespace-only.
    #[error("{kind} identifier must be non-empty")]
    EmptyIdentifier {
        /// Which identifier kind was rejected (e.g., "jurisdiction").
        kind: &'static str,
    },

    /// An enum tag string was not recognized.
    #[error("unknown {kind} tag: {value:?}")]
    UnknownTag {
        /// Which enum the tag was parsed for.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A numeric field was outside its allowed range.
    #[error("{field} out of range: {value} (expected {expected})")]
    OutOfRange {
        /// The violating field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the allowed range.
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::EmptyIdentifier {
            kind: "jurisdiction",
        };
        assert_eq!(err.to_string(), "jurisdiction identifier must be non-empty");
    }

    #[test]
    fn out_of_range_display() {
        let err = ValidationError::OutOfRange {
            field: "fixedPercentage",
            value: 140.0,
            expected: "0..=100",
        };
        assert!(err.to_string().contains("fixedPercentage"));
        assert!(err.to_string().contains("140"));
    }

    #[test]
    fn muni_error_wraps_validation() {
        let err: MuniError = ValidationError::EmptyIdentifier { kind: "source" }.into();
        assert!(err.to_string().contains("validation error"));
    }
}
