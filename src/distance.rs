//! Abstract notions of distance.

use num_traits::Float;

/// A distance between two points.
///
/// An implementation may be an actual numerical distance, or an [order embedding] of the true
/// distance.  This allows for optimizations whenever distances can be compared more efficiently
/// than their exact values can be computed, as is the case for [Euclidean distance].
/// Implementors must order consistently with their [value](Distance::value): for all distances
/// `x` and `y`, `x < y` if and only if `x.value() < y.value()`.
///
/// [order embedding]: https://en.wikipedia.org/wiki/Order_embedding
/// [Euclidean distance]: crate::euclid::EuclideanDistance
pub trait Distance
where
    Self: Copy,
    Self: Into<<Self as Distance>::Value>,
    Self: PartialOrd<<Self as Distance>::Value>,
    Self: PartialOrd,
{
    /// The type of actual numerical distances.
    type Value: Float;

    /// Get the real numerical value of this distance.
    fn value(self) -> Self::Value {
        self.into()
    }
}

/// A space with some notion of distance between points.
///
/// Type parameters:
///
/// * `T`: The type to compare against.
pub trait Proximity<T: ?Sized = Self> {
    /// The type that represents distances.
    type Distance: Distance;

    /// Calculate the distance between this point and another one.
    fn distance(&self, other: &T) -> Self::Distance;
}

/// Shorthand for `K::Distance::Value`.
pub type DistanceValue<K, V = K> = <<K as Proximity<V>>::Distance as Distance>::Value;

/// Blanket [Proximity] implementation for references.
impl<'k, 'v, K: Proximity<V>, V> Proximity<&'v V> for &'k K {
    type Distance = K::Distance;

    fn distance(&self, other: &&'v V) -> Self::Distance {
        (*self).distance(*other)
    }
}

/// Marker trait for [metric spaces].
///
/// A metric must be symmetric, non-negative, and obey the [triangle inequality].  Coincident
/// points are allowed to be distinct items at distance zero.
///
/// [metric spaces]: https://en.wikipedia.org/wiki/Metric_space
/// [triangle inequality]: https://en.wikipedia.org/wiki/Triangle_inequality
pub trait Metric<T: ?Sized = Self>: Proximity<T> {}

/// Blanket [Metric] implementation for references.
impl<'k, 'v, K: Metric<V>, V> Metric<&'v V> for &'k K {}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Point;

    fn total<T: Proximity>(path: &[T]) -> DistanceValue<T> {
        path.windows(2)
            .map(|w| w[0].distance(&w[1]).value())
            .fold(num_traits::zero(), |acc, d| acc + d)
    }

    #[test]
    fn test_generic_distance() {
        let path = [Point::new(0, 0), Point::new(3, 4), Point::new(3, 16)];
        assert_eq!(total(&path), 17.0);
    }

    #[test]
    fn test_reference_proximity() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!((&a).distance(&&b), a.distance(&b));
    }
}
