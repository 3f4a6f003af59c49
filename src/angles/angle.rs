//! # Angle Representation Module
//!
//! This module provides a modular angle scalar stored as a raw radian value.
//!
//! ## Design Philosophy
//!
//! The `Angle` type keeps exactly the radian value it was given. Values outside
//! `[0, 2π)`, including negative ones, are legal and survive arithmetic
//! untouched. Reducing an angle onto the circle is always an explicit call to
//! [`Angle::normalize`] or [`Angle::normalized`].
//!
//! ## Comparison
//!
//! Two angles compare equal when their raw radian values differ by less than
//! [`EPSILON`]. Every relational operator is derived from the single
//! three-way comparison [`Angle::tolerance_cmp`], so `==`, `<`, `>`, `<=` and
//! `>=` can never disagree with each other.
//!
//! Equality works on raw values: `π` and `3π` are different angles. Use
//! [`Angle::is_equivalent_mod_2pi`] to compare positions on the circle.
//!
//! ## Examples
//!
//! ```rust
//! use angular::Angle;
//! use std::f64::consts::PI;
//!
//! let pi = Angle::from_radians(PI);
//! let three_pi = Angle::from_radians(3.0 * PI);
//!
//! assert_ne!(pi, three_pi);
//! assert!(pi.is_equivalent_mod_2pi(&three_pi));
//! assert_eq!(Angle::from_degrees(180.0), pi);
//! ```

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::constants::{DEG2RAD, EPSILON, RAD2DEG, TAU};
use crate::{AngleError, Result};

/// An angular measurement in radians with tolerance-based comparison
///
/// The raw value is never normalized implicitly. Serializes as a bare number
/// of radians.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use angular::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert!((right_angle.to_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            radians: degrees * DEG2RAD,
        }
    }

    /// Creates an angle from a value in radians
    ///
    /// The value is stored exactly as provided.
    pub fn from_radians(radians: f64) -> Self {
        Angle { radians }
    }

    /// The zero angle
    pub fn zero() -> Self {
        Angle { radians: 0.0 }
    }

    /// Maps a radian value into `[0, 2π)`
    ///
    /// Negative remainders are shifted up by a full turn. A result within
    /// [`EPSILON`] of 2π snaps to 0 so that the upper end of the circle
    /// stays open.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use angular::Angle;
    /// use std::f64::consts::PI;
    ///
    /// assert!((Angle::normalize(3.0 * PI) - PI).abs() < 1e-9);
    /// assert!((Angle::normalize(-PI / 2.0) - 1.5 * PI).abs() < 1e-9);
    /// assert_eq!(Angle::normalize(4.0 * PI), 0.0);
    /// ```
    pub fn normalize(radians: f64) -> f64 {
        let mut result = radians % TAU;
        if result < 0.0 {
            result += TAU;
        }

        if (result - TAU).abs() < EPSILON {
            result = 0.0;
        }

        result
    }

    /// Returns a copy of this angle reduced into `[0, 2π)`
    pub fn normalized(&self) -> Self {
        Angle::from_radians(Angle::normalize(self.radians))
    }

    /// Three-way comparison with tolerance
    ///
    /// Returns `Equal` when the raw values differ by less than [`EPSILON`],
    /// otherwise orders by raw value. Returns `None` only if either value is
    /// NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use angular::Angle;
    /// use std::cmp::Ordering;
    ///
    /// let a = Angle::from_radians(1.0);
    /// assert_eq!(a.tolerance_cmp(&Angle::from_radians(1.00005)), Some(Ordering::Equal));
    /// assert_eq!(a.tolerance_cmp(&Angle::from_radians(2.0)), Some(Ordering::Less));
    /// ```
    pub fn tolerance_cmp(&self, other: &Angle) -> Option<Ordering> {
        if (self.radians - other.radians).abs() < EPSILON {
            Some(Ordering::Equal)
        } else {
            self.radians.partial_cmp(&other.radians)
        }
    }

    /// Compares positions on the circle rather than raw values
    pub fn is_equivalent_mod_2pi(&self, other: &Angle) -> bool {
        (Angle::normalize(self.radians) - Angle::normalize(other.radians)).abs() < EPSILON
    }

    /// Divides by a scalar, rejecting a divisor of exactly zero
    ///
    /// # Errors
    ///
    /// Returns [`AngleError::DivisionByZero`] if `divisor == 0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use angular::{Angle, AngleError};
    ///
    /// let half = Angle::from_degrees(90.0).checked_div(2.0).unwrap();
    /// assert_eq!(half, Angle::from_degrees(45.0));
    ///
    /// assert_eq!(
    ///     Angle::from_degrees(90.0).checked_div(0.0),
    ///     Err(AngleError::DivisionByZero)
    /// );
    /// ```
    pub fn checked_div(self, divisor: f64) -> Result<Angle> {
        if divisor == 0.0 {
            return Err(AngleError::DivisionByZero);
        }
        Ok(Angle::from_radians(self.radians / divisor))
    }

    /// In-place form of [`Angle::checked_div`]
    ///
    /// On error the angle is left unchanged.
    pub fn checked_div_assign(&mut self, divisor: f64) -> Result<()> {
        *self = self.checked_div(divisor)?;
        Ok(())
    }

    /// Returns the angle value in degrees
    pub fn to_degrees(&self) -> f64 {
        self.radians * RAD2DEG
    }

    /// Returns the raw angle value in radians
    pub fn to_radians(&self) -> f64 {
        self.radians
    }

    /// Integer part of the radian value (not of the degree value)
    pub fn to_int(&self) -> i64 {
        self.radians.trunc() as i64
    }

    /// Returns the underlying float, identical to [`Angle::to_radians`]
    pub fn to_float(&self) -> f64 {
        self.radians
    }

    /// Formats the angle in degrees, e.g. `"180 degrees"`
    pub fn to_degrees_string(&self) -> String {
        format!("{} degrees", self.to_degrees())
    }

    /// Formats the angle as a multiple of π, e.g. `"1 pi"`
    pub fn to_pi_string(&self) -> String {
        format!("{} pi", self.radians / PI)
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.tolerance_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.tolerance_cmp(other)
    }
}

/// Renders the angle as a multiple of π, honouring a requested precision
impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let multiple = self.radians / PI;
        match f.precision() {
            Some(precision) => write!(f, "{:.*}π", precision, multiple),
            None => write!(f, "{}π", multiple),
        }
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Angle::from_radians(radians)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.radians
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}

impl Add<f64> for Angle {
    type Output = Angle;

    fn add(self, radians: f64) -> Angle {
        Angle::from_radians(self.radians + radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}

impl Sub<f64> for Angle {
    type Output = Angle;

    fn sub(self, radians: f64) -> Angle {
        Angle::from_radians(self.radians - radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, scalar: f64) -> Angle {
        Angle::from_radians(self.radians * scalar)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.radians += rhs.radians;
    }
}

impl AddAssign<f64> for Angle {
    fn add_assign(&mut self, radians: f64) {
        self.radians += radians;
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        self.radians -= rhs.radians;
    }
}

impl SubAssign<f64> for Angle {
    fn sub_assign(&mut self, radians: f64) {
        self.radians -= radians;
    }
}

impl MulAssign<f64> for Angle {
    fn mul_assign(&mut self, scalar: f64) {
        self.radians *= scalar;
    }
}
