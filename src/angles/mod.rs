//! Angles and angle ranges on the circle
//!
//! - `angle`: the [`Angle`] scalar with tolerance comparison and arithmetic
//! - `range`: the [`AngleRange`] interval type and its set operations
//! - `notation`: parsing of the text notation produced by `Display`

pub mod angle;
pub mod notation;
pub mod range;

// Re-export primary types for convenience
pub use self::angle::Angle;
pub use self::range::{AngleRange, AngleRanges};
