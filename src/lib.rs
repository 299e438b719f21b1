//! The [closest pair of points] in the plane, by divide and conquer.
//!
//! ```
//! use closest_pair::{find_closest_pair, Point};
//!
//! let points = vec![
//!     Point::new(0, 0),
//!     Point::new(3, 4),
//!     Point::new(100, 100),
//!     Point::new(0, 1),
//! ];
//! let pair = find_closest_pair(points);
//! assert_eq!(pair[0].distance_to(&pair[1]), 1.0);
//! ```
//!
//! [closest pair of points]: https://en.wikipedia.org/wiki/Closest_pair_of_points_problem

pub mod distance;
pub mod euclid;
pub mod exhaustive;
pub mod pair;
pub mod point;
pub mod range;
pub mod search;
pub mod strip;

pub use distance::{Distance, Metric, Proximity};
pub use euclid::{euclidean_distance, EuclideanDistance, NegativeDistanceError};
pub use exhaustive::closest_pair_exhaustive;
pub use pair::ClosestPair;
pub use point::{ParsePointError, Point};
pub use range::IndexRange;
pub use search::{closest_pair, find_closest_pair, find_closest_pair_opt, ClosestPairSearch};
