//! # Angle Range Module
//!
//! An [`AngleRange`] is an interval `[begin, end]` on the circle whose two
//! boundaries are independently inclusive or exclusive, giving the four
//! familiar forms `[a;b]`, `[a;b)`, `(a;b]` and `(a;b)`.
//!
//! ## Canonical Form
//!
//! Every constructor except [`AngleRange::from_raw_angles`] normalizes both
//! endpoints into `[0, 2π)`. If the begin endpoint then lies above the end
//! endpoint, the endpoints are swapped together with their inclusivity flags,
//! so the physical boundary that was inclusive stays inclusive.
//!
//! ## Known Limitations
//!
//! Ranges are stored linearly inside `[0, 2π)`. [`AngleRange::length`] reports
//! the span of the stored interval and never a wrap-around span, and
//! [`AngleRange::contains_range`] only checks the two endpoints of the other
//! range. Both are relied upon as-is.
//!
//! ## Set Operations
//!
//! [`AngleRange::union`] and [`AngleRange::difference`] work on pairs of
//! ranges and return an [`AngleRanges`] sequence of zero, one or two ranges.
//!
//! ```rust
//! use angular::AngleRange;
//!
//! let outer = AngleRange::from_float(1.0, 4.0, true, true);
//! let hole = AngleRange::from_float(2.0, 3.0, true, true);
//!
//! let pieces = outer.difference(&hole);
//! assert_eq!(pieces.len(), 2);
//! assert_eq!(pieces[0], AngleRange::from_float(1.0, 2.0, true, false));
//! assert_eq!(pieces[1], AngleRange::from_float(3.0, 4.0, false, true));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use log::{debug, trace};
use num_traits::{AsPrimitive, PrimInt};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::angle::Angle;

/// Result of a pairwise set operation: zero, one or two ranges, stored inline
pub type AngleRanges = SmallVec<[AngleRange; 2]>;

/// An interval on the circle with independently inclusive boundaries
///
/// # Invariants
///
/// `begin <= end`. Ranges built by the normalizing constructors also have
/// both endpoints in `[0, 2π)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "StoredRange")]
pub struct AngleRange {
    begin: Angle,
    end: Angle,
    begin_inclusive: bool,
    end_inclusive: bool,
}

/// Wire shape of a range; decoding goes through the normalizing constructor
#[derive(Deserialize)]
struct StoredRange {
    begin: Angle,
    end: Angle,
    begin_inclusive: bool,
    end_inclusive: bool,
}

impl From<StoredRange> for AngleRange {
    fn from(stored: StoredRange) -> Self {
        AngleRange::from_angle(
            stored.begin,
            stored.end,
            stored.begin_inclusive,
            stored.end_inclusive,
        )
    }
}

impl AngleRange {
    /// Orders the endpoints, swapping the flags along with them
    fn ordered(begin: Angle, end: Angle, begin_inclusive: bool, end_inclusive: bool) -> Self {
        if begin > end {
            debug!("Swapping reversed range endpoints {} and {}", begin, end);
            AngleRange {
                begin: end,
                end: begin,
                begin_inclusive: end_inclusive,
                end_inclusive: begin_inclusive,
            }
        } else {
            AngleRange {
                begin,
                end,
                begin_inclusive,
                end_inclusive,
            }
        }
    }

    /// Builds a range from endpoints that already satisfy the invariants
    fn new_unchecked(begin: Angle, end: Angle, begin_inclusive: bool, end_inclusive: bool) -> Self {
        debug_assert!(
            !(begin > end),
            "Invalid range: begin must not be greater than end"
        );
        AngleRange {
            begin,
            end,
            begin_inclusive,
            end_inclusive,
        }
    }

    /// Creates a range from two angles, normalizing both endpoints
    ///
    /// # Examples
    ///
    /// ```rust
    /// use angular::{Angle, AngleRange};
    ///
    /// // Given in reverse order: the inclusive boundary stays with 1.57
    /// let range = AngleRange::from_angle(
    ///     Angle::from_radians(3.14),
    ///     Angle::from_radians(1.57),
    ///     true,
    ///     false,
    /// );
    /// assert_eq!(range.begin(), Angle::from_radians(1.57));
    /// assert!(!range.is_begin_inclusive());
    /// assert!(range.is_end_inclusive());
    /// ```
    pub fn from_angle(begin: Angle, end: Angle, begin_inclusive: bool, end_inclusive: bool) -> Self {
        AngleRange::ordered(
            begin.normalized(),
            end.normalized(),
            begin_inclusive,
            end_inclusive,
        )
    }

    /// Creates a range from radian values
    pub fn from_float(begin: f64, end: f64, begin_inclusive: bool, end_inclusive: bool) -> Self {
        AngleRange::from_angle(
            Angle::from_radians(begin),
            Angle::from_radians(end),
            begin_inclusive,
            end_inclusive,
        )
    }

    /// Creates a range from whole radian values
    pub fn from_int<T>(begin: T, end: T, begin_inclusive: bool, end_inclusive: bool) -> Self
    where
        T: PrimInt + AsPrimitive<f64>,
    {
        AngleRange::from_float(begin.as_(), end.as_(), begin_inclusive, end_inclusive)
    }

    /// Creates a range from degree values
    pub fn from_degrees(begin: f64, end: f64, begin_inclusive: bool, end_inclusive: bool) -> Self {
        AngleRange::from_angle(
            Angle::from_degrees(begin),
            Angle::from_degrees(end),
            begin_inclusive,
            end_inclusive,
        )
    }

    /// Creates a range that keeps the raw endpoint values
    ///
    /// Endpoints are still ordered (with their flags) but are not normalized,
    /// so `begin` and `end` may lie outside `[0, 2π)`. Set operations between
    /// raw and normalized ranges compare raw values.
    pub fn from_raw_angles(
        begin: Angle,
        end: Angle,
        begin_inclusive: bool,
        end_inclusive: bool,
    ) -> Self {
        AngleRange::ordered(begin, end, begin_inclusive, end_inclusive)
    }

    pub fn begin(&self) -> Angle {
        self.begin
    }

    pub fn end(&self) -> Angle {
        self.end
    }

    pub fn is_begin_inclusive(&self) -> bool {
        self.begin_inclusive
    }

    pub fn is_end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    /// Linear span `end - begin` of the stored interval, in radians
    pub fn length(&self) -> f64 {
        self.end.to_radians() - self.begin.to_radians()
    }

    /// True if the range holds no angle at all
    ///
    /// Only a zero-length range can be empty; it is a single point when
    /// closed on both sides.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end && !(self.begin_inclusive && self.end_inclusive)
    }

    /// Compares lengths, not positions
    pub fn cmp_length(&self, other: &AngleRange) -> Option<Ordering> {
        self.length().partial_cmp(&other.length())
    }

    pub fn is_shorter_than(&self, other: &AngleRange) -> bool {
        self.cmp_length(other) == Some(Ordering::Less)
    }

    pub fn is_longer_than(&self, other: &AngleRange) -> bool {
        self.cmp_length(other) == Some(Ordering::Greater)
    }

    /// Tests whether an angle lies in the range
    ///
    /// The angle is normalized first; each boundary is tested according to
    /// its inclusivity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use angular::{Angle, AngleRange};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let range = AngleRange::from_float(0.0, FRAC_PI_2, true, false);
    /// assert!(range.contains_angle(Angle::zero()));
    /// assert!(!range.contains_angle(Angle::from_radians(FRAC_PI_2)));
    /// assert!(range.contains_angle(Angle::from_degrees(360.0 + 45.0)));
    /// ```
    pub fn contains_angle(&self, angle: Angle) -> bool {
        let angle = angle.normalized();

        let after_begin = if self.begin_inclusive {
            angle >= self.begin
        } else {
            angle > self.begin
        };
        let before_end = if self.end_inclusive {
            angle <= self.end
        } else {
            angle < self.end
        };

        after_begin && before_end
    }

    /// Tests whether both endpoints of `other` lie in this range
    pub fn contains_range(&self, other: &AngleRange) -> bool {
        self.contains_angle(other.begin) && self.contains_angle(other.end)
    }

    /// True if the spans overlap, or meet at an endpoint that one side includes
    fn intersects(&self, other: &AngleRange) -> bool {
        let overlapping = self.begin < other.end && other.begin < self.end;
        overlapping || self.touches(other)
    }

    /// True if the ranges share a boundary value that at least one of them includes
    ///
    /// Ranges that merely touch still merge under [`AngleRange::union`].
    pub fn touches(&self, other: &AngleRange) -> bool {
        let self_then_other =
            self.end == other.begin && (self.end_inclusive || other.begin_inclusive);
        let other_then_self =
            other.end == self.begin && (other.end_inclusive || self.begin_inclusive);
        self_then_other || other_then_self
    }

    /// Merges two ranges if they overlap or touch
    ///
    /// Returns one range spanning both when they can be merged; each merged
    /// boundary is inclusive if any operand reaching that extreme includes
    /// it. Otherwise returns `self` and `other` unchanged, in that order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use angular::AngleRange;
    ///
    /// let a = AngleRange::from_float(1.0, 2.0, true, true);
    /// let b = AngleRange::from_float(3.0, 4.0, true, true);
    /// assert_eq!(a.union(&b).as_slice(), &[a, b]);
    ///
    /// let c = AngleRange::from_float(2.0, 3.0, false, false);
    /// assert_eq!(a.union(&c)[0], AngleRange::from_float(1.0, 3.0, true, false));
    /// ```
    pub fn union(&self, other: &AngleRange) -> AngleRanges {
        if !(self.intersects(other) || self.touches(other)) {
            trace!("Ranges {} and {} are disjoint, keeping both", self, other);
            return smallvec![*self, *other];
        }

        let (begin, begin_inclusive) = match self.begin.tolerance_cmp(&other.begin) {
            Some(Ordering::Less) => (self.begin, self.begin_inclusive),
            Some(Ordering::Greater) => (other.begin, other.begin_inclusive),
            _ => (self.begin, self.begin_inclusive || other.begin_inclusive),
        };
        let (end, end_inclusive) = match self.end.tolerance_cmp(&other.end) {
            Some(Ordering::Greater) => (self.end, self.end_inclusive),
            Some(Ordering::Less) => (other.end, other.end_inclusive),
            _ => (self.end, self.end_inclusive || other.end_inclusive),
        };

        let merged = AngleRange::new_unchecked(begin, end, begin_inclusive, end_inclusive);
        trace!("Merged {} and {} into {}", self, other, merged);
        smallvec![merged]
    }

    /// Removes the part of `self` covered by `other`
    ///
    /// Returns `self` unchanged when the ranges do not intersect, or the
    /// non-empty remainders left of and right of `other`, in that order; the
    /// cut boundaries take the opposite inclusivity of `other`. An empty range
    /// minus itself leaves nothing.
    ///
    /// A boundary shared with `other` survives as a single-point remainder
    /// when `self` includes it and `other` excludes it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use angular::AngleRange;
    ///
    /// let base = AngleRange::from_float(1.0, 3.0, true, true);
    /// let cut = AngleRange::from_float(1.0, 2.0, false, true);
    ///
    /// let pieces = base.difference(&cut);
    /// assert_eq!(pieces[0], AngleRange::from_float(1.0, 1.0, true, true));
    /// assert_eq!(pieces[1], AngleRange::from_float(2.0, 3.0, false, true));
    /// ```
    pub fn difference(&self, other: &AngleRange) -> AngleRanges {
        if self.is_empty() && self == other {
            return AngleRanges::new();
        }

        if !self.intersects(other) {
            trace!("Ranges {} and {} are disjoint, nothing to remove", self, other);
            return smallvec![*self];
        }

        let mut result = AngleRanges::new();

        if other.begin >= self.begin {
            let left = AngleRange::new_unchecked(
                self.begin,
                other.begin,
                self.begin_inclusive,
                !other.begin_inclusive,
            );
            if !left.is_empty() {
                result.push(left);
            }
        }

        if other.end <= self.end {
            let right = AngleRange::new_unchecked(
                other.end,
                self.end,
                !other.end_inclusive,
                self.end_inclusive,
            );
            if !right.is_empty() {
                result.push(right);
            }
        }

        trace!("{} minus {} leaves {} range(s)", self, other, result.len());
        result
    }

    /// Appends this range to the end of an ordered sequence of ranges
    ///
    /// # Examples
    ///
    /// ```rust
    /// use angular::AngleRange;
    ///
    /// let mut ranges = Vec::new();
    /// AngleRange::from_float(1.0, 2.0, true, true).append_to(&mut ranges);
    /// AngleRange::from_float(3.0, 4.0, true, true).append_to(&mut ranges);
    /// assert_eq!(ranges.len(), 2);
    /// ```
    pub fn append_to<E>(&self, ranges: &mut E)
    where
        E: Extend<AngleRange>,
    {
        ranges.extend(std::iter::once(*self));
    }
}

impl PartialEq for AngleRange {
    fn eq(&self, other: &Self) -> bool {
        self.begin_inclusive == other.begin_inclusive
            && self.end_inclusive == other.end_inclusive
            && self.begin == other.begin
            && self.end == other.end
    }
}

impl fmt::Display for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.begin_inclusive { '[' } else { '(' };
        let close = if self.end_inclusive { ']' } else { ')' };
        match f.precision() {
            Some(precision) => write!(
                f,
                "{}{:.*};{:.*}{}",
                open, precision, self.begin, precision, self.end, close
            ),
            None => write!(f, "{}{};{}{}", open, self.begin, self.end, close),
        }
    }
}

/// `a + b` is [`AngleRange::union`]
impl Add for AngleRange {
    type Output = AngleRanges;

    fn add(self, rhs: AngleRange) -> AngleRanges {
        self.union(&rhs)
    }
}

/// `a - b` is [`AngleRange::difference`]
impl Sub for AngleRange {
    type Output = AngleRanges;

    fn sub(self, rhs: AngleRange) -> AngleRanges {
        self.difference(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

    fn closed(begin: f64, end: f64) -> AngleRange {
        AngleRange::from_float(begin, end, true, true)
    }

    #[test]
    fn test_creation_methods() {
        let range = AngleRange::from_float(0.0, 1.57, true, false);
        assert_eq!(range.begin().to_radians(), 0.0);
        assert_eq!(range.end().to_radians(), 1.57);
        assert!(range.is_begin_inclusive());
        assert!(!range.is_end_inclusive());

        let range = AngleRange::from_int(0, 3, false, true);
        assert_eq!(range.begin().to_radians(), 0.0);
        assert_eq!(range.end().to_radians(), 3.0);
        assert!(!range.is_begin_inclusive());
        assert!(range.is_end_inclusive());

        let range = AngleRange::from_degrees(30.0, 60.0, true, true);
        assert_abs_diff_eq!(range.begin().to_radians(), FRAC_PI_6, epsilon = 1e-12);
        assert_abs_diff_eq!(range.end().to_radians(), FRAC_PI_3, epsilon = 1e-12);
    }

    #[test]
    fn test_reversed_endpoints_swap_flags() {
        let range = AngleRange::from_float(3.14, 1.57, true, false);
        assert_eq!(range.begin().to_radians(), 1.57);
        assert_eq!(range.end().to_radians(), 3.14);
        assert!(!range.is_begin_inclusive());
        assert!(range.is_end_inclusive());

        let swapped = AngleRange::from_float(FRAC_PI_2, 0.0, true, false);
        assert!(!swapped.contains_angle(Angle::zero()));
        assert!(swapped.contains_angle(Angle::from_radians(FRAC_PI_2)));
    }

    #[test]
    fn test_endpoints_are_normalized() {
        let range = AngleRange::from_float(4.0 * PI, 4.5 * PI, true, true);
        assert_abs_diff_eq!(range.begin().to_radians(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(range.end().to_radians(), FRAC_PI_2, epsilon = 1e-9);
        assert!(range.contains_angle(Angle::from_radians(FRAC_PI_4)));

        // -π/6 lands at 11π/6, above π/6, so the endpoints swap
        let range = AngleRange::from_float(-FRAC_PI_6, FRAC_PI_6, true, true);
        assert_abs_diff_eq!(range.begin().to_radians(), FRAC_PI_6, epsilon = 1e-9);
        assert_abs_diff_eq!(range.end().to_radians(), 11.0 * FRAC_PI_6, epsilon = 1e-9);
        assert!(range.length() > 0.0);
    }

    #[test]
    fn test_raw_constructor_keeps_values() {
        let range = AngleRange::from_raw_angles(
            Angle::from_radians(7.0),
            Angle::from_radians(-1.0),
            true,
            false,
        );
        assert_eq!(range.begin().to_radians(), -1.0);
        assert_eq!(range.end().to_radians(), 7.0);
        assert!(!range.is_begin_inclusive());
        assert!(range.is_end_inclusive());
        assert_abs_diff_eq!(range.length(), 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equality_includes_flags() {
        assert_eq!(closed(1.0, 2.0), closed(1.0, 2.0));
        assert_ne!(
            AngleRange::from_float(1.0, 2.0, false, true),
            AngleRange::from_float(1.0, 2.0, true, true)
        );
        assert_eq!(closed(1.0, 2.0), closed(1.00005, 2.0));
    }

    #[test]
    fn test_length_comparisons() {
        let quarter = closed(0.0, FRAC_PI_2);
        let sixth = closed(FRAC_PI_6, FRAC_PI_3);
        let half = closed(0.0, PI);

        assert_abs_diff_eq!(quarter.length(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(half.length(), PI, epsilon = 1e-12);

        assert!(sixth.is_shorter_than(&quarter));
        assert!(quarter.is_shorter_than(&half));
        assert!(!half.is_shorter_than(&quarter));
        assert!(half.is_longer_than(&quarter));
        assert_eq!(quarter.cmp_length(&quarter), Some(Ordering::Equal));

        assert_eq!(closed(1.0, 1.0).length(), 0.0);
    }

    #[test]
    fn test_boundary_types() {
        let zero = Angle::zero();
        let ninety = Angle::from_radians(FRAC_PI_2);
        let forty_five = Angle::from_radians(FRAC_PI_4);

        let inclusive = AngleRange::from_float(0.0, FRAC_PI_2, true, true);
        assert!(inclusive.contains_angle(zero));
        assert!(inclusive.contains_angle(ninety));
        assert!(inclusive.contains_angle(forty_five));

        let exclusive = AngleRange::from_float(0.0, FRAC_PI_2, false, false);
        assert!(!exclusive.contains_angle(zero));
        assert!(!exclusive.contains_angle(ninety));
        assert!(exclusive.contains_angle(Angle::from_radians(0.001)));
        assert!(exclusive.contains_angle(Angle::from_radians(FRAC_PI_2 - 0.001)));

        let mixed_start = AngleRange::from_float(0.0, FRAC_PI_2, true, false);
        assert!(mixed_start.contains_angle(zero));
        assert!(!mixed_start.contains_angle(ninety));

        let mixed_end = AngleRange::from_float(0.0, FRAC_PI_2, false, true);
        assert!(!mixed_end.contains_angle(zero));
        assert!(mixed_end.contains_angle(ninety));
    }

    #[test]
    fn test_zero_length_ranges() {
        let point = AngleRange::from_float(FRAC_PI_4, FRAC_PI_4, true, true);
        let hollow = AngleRange::from_float(FRAC_PI_4, FRAC_PI_4, false, false);
        let angle = Angle::from_radians(FRAC_PI_4);

        assert!(point.contains_angle(angle));
        assert!(!point.is_empty());
        assert!(!hollow.contains_angle(angle));
        assert!(hollow.is_empty());
    }

    #[test]
    fn test_contains_range() {
        let large = closed(1.0, 3.0);
        let small = closed(1.5, 2.5);
        let outside = closed(4.0, 5.0);

        assert!(large.contains_range(&small));
        assert!(!small.contains_range(&large));
        assert!(!large.contains_range(&outside));
        assert!(large.contains_range(&large));
        assert!(!AngleRange::from_float(1.0, 3.0, false, true).contains_range(&large));
    }

    #[test]
    fn test_touches() {
        let a = AngleRange::from_float(1.0, 2.0, true, false);
        assert!(a.touches(&AngleRange::from_float(2.0, 3.0, true, true)));
        assert!(!a.touches(&AngleRange::from_float(2.0, 3.0, false, true)));
        assert!(AngleRange::from_float(2.0, 3.0, true, true).touches(&a));
        assert!(!a.touches(&closed(2.5, 3.0)));
    }

    #[test]
    fn test_union_overlapping() {
        let merged = closed(1.0, 3.0).union(&closed(2.0, 4.0));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].begin().to_radians(), 1.0);
        assert_eq!(merged[0].end().to_radians(), 4.0);
        assert!(merged[0].is_begin_inclusive());
        assert!(merged[0].is_end_inclusive());
    }

    #[test]
    fn test_union_disjoint_keeps_argument_order() {
        let a = closed(3.0, 4.0);
        let b = closed(1.0, 2.0);
        let result = a.union(&b);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], a);
        assert_eq!(result[1], b);
    }

    #[test]
    fn test_union_touching() {
        let a = AngleRange::from_float(1.0, 2.0, true, false);

        let merged = a.union(&AngleRange::from_float(2.0, 3.0, true, false));
        assert_eq!(merged.as_slice(), &[AngleRange::from_float(1.0, 3.0, true, false)]);

        // Both sides exclude 2.0, so nothing joins them
        let apart = a.union(&AngleRange::from_float(2.0, 3.0, false, true));
        assert_eq!(apart.len(), 2);
    }

    #[test]
    fn test_union_shared_extreme_ors_flags() {
        let a = AngleRange::from_float(1.0, 3.0, false, false);
        let b = AngleRange::from_float(1.0, 3.0, true, false);
        let merged = a + b;
        assert_eq!(merged.as_slice(), &[AngleRange::from_float(1.0, 3.0, true, false)]);
    }

    #[test]
    fn test_difference_splits() {
        let result = closed(1.0, 4.0).difference(&closed(2.0, 3.0));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], AngleRange::from_float(1.0, 2.0, true, false));
        assert_eq!(result[1], AngleRange::from_float(3.0, 4.0, false, true));
    }

    #[test]
    fn test_difference_disjoint_and_covered() {
        let a = closed(1.0, 2.0);
        let result = a - closed(3.0, 4.0);
        assert_eq!(result.as_slice(), &[a]);

        assert!(closed(2.0, 3.0).difference(&closed(1.0, 4.0)).is_empty());
    }

    #[test]
    fn test_difference_with_self_is_empty() {
        for (bi, ei) in [(true, true), (true, false), (false, true), (false, false)] {
            let r = AngleRange::from_float(1.0, 3.0, bi, ei);
            assert!(r.difference(&r).is_empty(), "{} - {} is not empty", r, r);
        }
    }

    #[test]
    fn test_difference_of_empty_range() {
        let hollow = AngleRange::from_float(1.0, 1.0, false, false);
        assert!(hollow.difference(&hollow).is_empty());

        // Disjoint subtrahend leaves the empty range untouched
        let result = hollow.difference(&closed(2.0, 3.0));
        assert_eq!(result.as_slice(), &[hollow]);

        let half_open = AngleRange::from_float(1.0, 1.0, true, false);
        assert_eq!((half_open - closed(2.0, 3.0)).as_slice(), &[half_open]);
    }

    #[test]
    fn test_difference_clips_one_side() {
        let base = closed(1.0, 4.0);

        let right_clipped = base.difference(&closed(3.0, 5.0));
        assert_eq!(right_clipped.as_slice(), &[AngleRange::from_float(1.0, 3.0, true, false)]);

        let left_clipped = base.difference(&AngleRange::from_float(0.5, 2.0, true, false));
        assert_eq!(left_clipped.as_slice(), &[closed(2.0, 4.0)]);
    }

    #[test]
    fn test_difference_at_touching_boundary() {
        // Shared point excluded by the subtrahend survives
        let result = closed(1.0, 2.0).difference(&AngleRange::from_float(2.0, 3.0, false, true));
        assert_eq!(result.as_slice(), &[closed(1.0, 2.0)]);

        // Shared point included by the subtrahend is cut away
        let result = closed(1.0, 2.0).difference(&closed(2.0, 3.0));
        assert_eq!(result.as_slice(), &[AngleRange::from_float(1.0, 2.0, true, false)]);
    }

    #[test]
    fn test_difference_keeps_single_point() {
        let result = closed(1.0, 3.0).difference(&AngleRange::from_float(1.0, 2.0, false, true));
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], closed(1.0, 1.0));
        assert_eq!(result[1], AngleRange::from_float(2.0, 3.0, false, true));
    }

    #[test]
    fn test_append_to() {
        let mut ranges = Vec::new();
        closed(1.0, 2.0).append_to(&mut ranges);
        assert_eq!(ranges.len(), 1);
        closed(3.0, 4.0).append_to(&mut ranges);
        assert_eq!(ranges, vec![closed(1.0, 2.0), closed(3.0, 4.0)]);

        let mut inline = AngleRanges::new();
        closed(5.0, 6.0).append_to(&mut inline);
        assert_eq!(inline.len(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(AngleRange::from_float(0.0, FRAC_PI_2, true, true).to_string(), "[0π;0.5π]");
        assert_eq!(AngleRange::from_float(0.0, FRAC_PI_2, false, false).to_string(), "(0π;0.5π)");
        assert_eq!(AngleRange::from_float(0.0, FRAC_PI_2, true, false).to_string(), "[0π;0.5π)");
        assert_eq!(
            format!("{:.3}", AngleRange::from_float(FRAC_PI_3, PI, false, true)),
            "(0.333π;1.000π]"
        );
    }

    #[test]
    fn test_serde_renormalizes() {
        let range = AngleRange::from_float(1.0, 2.0, true, false);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(
            json,
            r#"{"begin":1.0,"end":2.0,"begin_inclusive":true,"end_inclusive":false}"#
        );
        let back: AngleRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);

        let reversed: AngleRange = serde_json::from_str(
            r#"{"begin":2.0,"end":-5.0,"begin_inclusive":true,"end_inclusive":false}"#,
        )
        .unwrap();
        assert_eq!(reversed, AngleRange::from_float(2.0, -5.0, true, false));
        assert!(!reversed.is_begin_inclusive());
    }
}
