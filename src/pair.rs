//! Results of closest pair searches.

use crate::distance::{Distance, Proximity};
use crate::euclid::EuclideanDistance;
use crate::point::Point;

use std::fmt::{self, Display, Formatter};

/// Two points, and the distance between them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClosestPair {
    first: Point,
    second: Point,
    distance: EuclideanDistance,
}

impl ClosestPair {
    /// Pair up two points.
    pub fn new(first: Point, second: Point) -> Self {
        Self {
            first,
            second,
            distance: first.distance(&second),
        }
    }

    /// The point that came first in the search order.
    pub fn first(&self) -> Point {
        self.first
    }

    /// The point that came second in the search order.
    pub fn second(&self) -> Point {
        self.second
    }

    /// Both points, in search order.
    pub fn points(&self) -> [Point; 2] {
        [self.first, self.second]
    }

    /// The (exact) distance between the two points.
    pub fn distance(&self) -> EuclideanDistance {
        self.distance
    }

    /// The distance between the two points, as a real number.
    pub fn distance_value(&self) -> f64 {
        self.distance.value()
    }

    /// Check whether this pair is strictly closer than another.
    pub fn is_closer_than(&self, other: &Self) -> bool {
        self.distance < other.distance
    }
}

impl From<ClosestPair> for [Point; 2] {
    fn from(pair: ClosestPair) -> Self {
        pair.points()
    }
}

impl From<ClosestPair> for Vec<Point> {
    fn from(pair: ClosestPair) -> Self {
        pair.points().to_vec()
    }
}

impl Display for ClosestPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}: {}", self.first, self.second, self.distance)
    }
}
