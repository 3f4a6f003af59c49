//! Angular: modular angles and circular angle ranges
//!
//! This crate provides an [`Angle`] scalar with tolerance-based comparison and
//! explicit mod-2π normalization, and an [`AngleRange`] interval type with
//! independently inclusive or exclusive boundaries supporting containment,
//! union and difference.
//!
//! ```rust
//! use angular::{Angle, AngleRange};
//!
//! let a = AngleRange::from_float(1.0, 3.0, true, true);
//! let b = AngleRange::from_float(2.0, 4.0, true, true);
//!
//! let merged = a.union(&b);
//! assert_eq!(merged.len(), 1);
//! assert!(merged[0].contains_angle(Angle::from_radians(3.5)));
//! ```

use thiserror::Error;

pub mod angles;
pub mod constants;

// Re-export commonly used types
pub use angles::{Angle, AngleRange, AngleRanges};

/// Main error type for the angular library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AngleError {
    /// An angle was divided by exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Text could not be read as an angle or angle range
    #[error("Cannot parse {input:?}: {reason}")]
    Parse {
        /// The text that was rejected
        input: String,
        /// What was wrong with it
        reason: String,
    },
}

/// Result type for angular operations
pub type Result<T> = std::result::Result<T, AngleError>;

impl AngleError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        AngleError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(AngleError::DivisionByZero.to_string(), "Division by zero");

        let err = AngleError::parse("[1;", "missing closing bracket");
        assert_eq!(
            err.to_string(),
            "Cannot parse \"[1;\": missing closing bracket"
        );
    }
}
