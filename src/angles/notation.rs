//! Text notation for angles and angle ranges
//!
//! Angles are written as a number with an optional unit suffix:
//!
//! | Text     | Meaning            |
//! |----------|--------------------|
//! | `0.5π`   | multiple of π      |
//! | `0.5pi`  | multiple of π      |
//! | `90deg`  | degrees            |
//! | `90°`    | degrees            |
//! | `1.2rad` | radians            |
//! | `1.2`    | radians            |
//!
//! Ranges use the same notation as their `Display` output, for example
//! `[0π;0.5π)`. Inside a range a bare number is a multiple of π, which makes
//! displayed ranges parse back to equal values. A comma may replace the
//! semicolon.
//!
//! ```rust
//! use angular::{Angle, AngleRange};
//! use std::f64::consts::PI;
//!
//! let angle: Angle = "90deg".parse().unwrap();
//! assert_eq!(angle, Angle::from_radians(PI / 2.0));
//!
//! let range: AngleRange = "[0;0.5)".parse().unwrap();
//! assert_eq!(range, AngleRange::from_float(0.0, PI / 2.0, true, false));
//! ```

use std::f64::consts::PI;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::angle::Angle;
use super::range::AngleRange;
use crate::{AngleError, Result};

lazy_static! {
    /// A number followed by an optional unit
    static ref ANGLE_PATTERN: Regex = Regex::new(
        r"(?i)^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:e[+-]?\d+)?)\s*(π|pi|deg|°|rad)?\s*$"
    )
    .expect("angle pattern is valid");

    /// Opening bracket, two endpoints, closing bracket
    static ref RANGE_PATTERN: Regex = Regex::new(
        r"^\s*([\[(])\s*([^;,]+?)\s*[;,]\s*([^;,]+?)\s*([\])])\s*$"
    )
    .expect("range pattern is valid");
}

/// Unit applied to a number written without a suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Radians,
    Degrees,
    MultipleOfPi,
}

impl Unit {
    fn from_suffix(suffix: &str) -> Unit {
        match suffix.to_lowercase().as_str() {
            "π" | "pi" => Unit::MultipleOfPi,
            "deg" | "°" => Unit::Degrees,
            _ => Unit::Radians,
        }
    }

    fn to_angle(self, value: f64) -> Angle {
        match self {
            Unit::Radians => Angle::from_radians(value),
            Unit::Degrees => Angle::from_degrees(value),
            Unit::MultipleOfPi => Angle::from_radians(value * PI),
        }
    }
}

fn parse_angle(text: &str, default_unit: Unit) -> Result<Angle> {
    let caps = ANGLE_PATTERN
        .captures(text)
        .ok_or_else(|| AngleError::parse(text, "expected a number with an optional unit"))?;

    let value: f64 = caps[1]
        .parse()
        .map_err(|e| AngleError::parse(text, format!("invalid number: {}", e)))?;

    let unit = caps
        .get(2)
        .map(|m| Unit::from_suffix(m.as_str()))
        .unwrap_or(default_unit);

    Ok(unit.to_angle(value))
}

impl FromStr for Angle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self> {
        parse_angle(s, Unit::Radians)
    }
}

impl FromStr for AngleRange {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = RANGE_PATTERN.captures(s).ok_or_else(|| {
            AngleError::parse(s, "expected a range such as [0;0.5) or (1π,1.5π]")
        })?;

        let begin = parse_angle(&caps[2], Unit::MultipleOfPi)?;
        let end = parse_angle(&caps[3], Unit::MultipleOfPi)?;

        Ok(AngleRange::from_angle(
            begin,
            end,
            &caps[1] == "[",
            &caps[4] == "]",
        ))
    }
}
