//! [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance) in the integer plane.

use crate::distance::{Distance, Metric, Proximity};
use crate::point::Point;

use num_traits::{AsPrimitive, Zero};

use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Compute the [Euclidean distance] between two points.
///
/// `sqrt((p.x - q.x)^2 + (p.y - q.y)^2)`, represented exactly by its square.
///
/// The coordinate deltas are widened before squaring, so the result is exact over the whole
/// `i32` range.
///
/// [Euclidean distance]: https://en.wikipedia.org/wiki/Euclidean_distance
pub fn euclidean_distance(p: &Point, q: &Point) -> EuclideanDistance {
    let dx = axis_distance(p.x(), q.x());
    let dy = axis_distance(p.y(), q.y());
    dx + dy
}

/// The distance between two coordinates along a single axis.
pub fn axis_distance(a: i32, b: i32) -> EuclideanDistance {
    let diff = (i64::from(a) - i64::from(b)).unsigned_abs();
    let diff = u128::from(diff);
    EuclideanDistance::from_squared(diff * diff)
}

/// The Euclidean distance function.
impl Proximity for Point {
    type Distance = EuclideanDistance;

    fn distance(&self, other: &Self) -> Self::Distance {
        euclidean_distance(self, other)
    }
}

/// Euclidean distance is a metric.
impl Metric for Point {}

/// A [Euclidean distance].
///
/// This type stores the squared value of the Euclidean distance, to avoid computing expensive
/// (and lossy) square roots until absolutely necessary.  Comparisons are exact.
///
///     # use closest_pair::distance::Distance;
///     # use closest_pair::euclid::EuclideanDistance;
///     # use std::convert::TryFrom;
///     let a = EuclideanDistance::try_from(3.0).unwrap();
///     let b = EuclideanDistance::try_from(4.0).unwrap();
///     let c = a + b;
///     assert!(a < c && b < c);
///     assert_eq!(c.value(), 5.0);
///
/// [Euclidean distance]: https://en.wikipedia.org/wiki/Euclidean_distance
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EuclideanDistance(u128);

impl EuclideanDistance {
    /// Creates a `EuclideanDistance` from an already-squared value.
    pub fn from_squared(value: u128) -> Self {
        Self(value)
    }

    /// Get the squared distance value.
    pub fn squared_value(self) -> u128 {
        self.0
    }
}

/// Squared components add up, so `axis_distance(dx) + axis_distance(dy)` is the full distance.
impl Add for EuclideanDistance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Zero for EuclideanDistance {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Display for EuclideanDistance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Error type for failed conversions from negative numbers to [`EuclideanDistance`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NegativeDistanceError;

impl Display for NegativeDistanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("distance must be a non-negative number")
    }
}

impl Error for NegativeDistanceError {}

/// Converts a real distance, rounding its square to the nearest integer.
impl TryFrom<f64> for EuclideanDistance {
    type Error = NegativeDistanceError;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value >= 0.0 {
            let squared: u128 = (value * value).round().as_();
            Ok(Self(squared))
        } else {
            Err(NegativeDistanceError)
        }
    }
}

impl From<EuclideanDistance> for f64 {
    #[inline]
    fn from(value: EuclideanDistance) -> f64 {
        let squared: f64 = value.0.as_();
        squared.sqrt()
    }
}

impl PartialOrd<f64> for EuclideanDistance {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        if *other >= 0.0 {
            let lhs: f64 = self.0.as_();
            lhs.partial_cmp(&(other * other))
        } else if other.is_nan() {
            None
        } else {
            Some(Ordering::Greater)
        }
    }
}

impl PartialOrd<EuclideanDistance> for f64 {
    #[inline]
    fn partial_cmp(&self, other: &EuclideanDistance) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl PartialEq<f64> for EuclideanDistance {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialEq<EuclideanDistance> for f64 {
    #[inline]
    fn eq(&self, other: &EuclideanDistance) -> bool {
        other == self
    }
}

impl Distance for EuclideanDistance {
    type Value = f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pythagorean() {
        let five = euclidean_distance(&Point::new(0, 0), &Point::new(3, 4));
        assert_eq!(five, EuclideanDistance::from_squared(25));
        assert_eq!(five, 5.0);

        let thirteen = Point::new(0, 0).distance(&Point::new(5, 12));
        assert_eq!(thirteen, EuclideanDistance::from_squared(169));
        assert_eq!(thirteen, 13.0);

        assert!(five < thirteen);
        assert!(five < 13.0);
        assert!(5.0 < thirteen);
        assert!(-5.0 < thirteen);
    }

    #[test]
    fn test_symmetric() {
        let p = Point::new(-7, 2);
        let q = Point::new(11, -40);
        assert_eq!(p.distance(&q), q.distance(&p));
        assert!(p.distance(&p).is_zero());
    }

    #[test]
    fn test_extreme_coordinates() {
        let p = Point::new(i32::MIN, i32::MIN);
        let q = Point::new(i32::MAX, i32::MAX);
        let span = u128::from(u32::MAX);
        assert_eq!(p.distance(&q).squared_value(), 2 * span * span);
        assert!(p.distance(&q).value() > 6.0e9);
    }

    #[test]
    fn test_axis_distance() {
        assert_eq!(axis_distance(-3, 4), EuclideanDistance::from_squared(49));
        assert!(axis_distance(10, 12) < 2.5);
        assert_eq!(axis_distance(10, 12), 2.0);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(EuclideanDistance::try_from(1.5), Ok(EuclideanDistance::from_squared(2)));
        assert_eq!(EuclideanDistance::try_from(-1.0), Err(NegativeDistanceError));
        assert!(EuclideanDistance::try_from(f64::NAN).is_err());
    }
}
