//! Divide and conquer closest pair search.

use crate::exhaustive::closest_pair_exhaustive;
use crate::pair::ClosestPair;
use crate::point::Point;
use crate::range::IndexRange;
use crate::strip::{strip_closest, STRIP_CHECK_LIMIT};

use log::{debug, trace};

/// Ranges with at most this many points are solved by exhaustive search.
pub const BRUTE_FORCE_BOUNDARY: usize = 25;

/// A configurable divide and conquer closest pair search.
///
/// The points are sorted by x once, then the index range is recursively halved.  Small ranges
/// are solved by [exhaustive search](crate::exhaustive), and the results of two halves are merged
/// by [checking the strip](crate::strip) around their dividing line, for `O(n log^2 n)` time
/// overall.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClosestPairSearch {
    brute_force_boundary: usize,
    strip_check_limit: usize,
}

impl Default for ClosestPairSearch {
    fn default() -> Self {
        Self {
            brute_force_boundary: BRUTE_FORCE_BOUNDARY,
            strip_check_limit: STRIP_CHECK_LIMIT,
        }
    }
}

impl ClosestPairSearch {
    /// Create a search with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest range size that is searched exhaustively (at least 3).
    pub fn with_brute_force_boundary(self, boundary: usize) -> Self {
        Self {
            brute_force_boundary: boundary.max(3),
            ..self
        }
    }

    /// Set how many y-sorted strip positions each strip point is checked against (at least 2).
    pub fn with_strip_check_limit(self, limit: usize) -> Self {
        Self {
            strip_check_limit: limit.max(2),
            ..self
        }
    }

    /// The largest range size that is searched exhaustively.
    pub fn brute_force_boundary(&self) -> usize {
        self.brute_force_boundary
    }

    /// The number of strip positions each strip point is checked against.
    pub fn strip_check_limit(&self) -> usize {
        self.strip_check_limit
    }

    /// Find the closest pair of `points`.
    ///
    /// The points are stably sorted by x in place.  Returns `None` if there are fewer than two.
    pub fn search(&self, points: &mut [Point]) -> Option<ClosestPair> {
        if points.len() < 2 {
            debug!("closest pair of {} points: not enough points", points.len());
            return None;
        }

        points.sort_by_key(Point::x);

        let pair = self.search_range(points, IndexRange::new(0, points.len()));
        debug!("closest pair of {} points ({:?}): {}", points.len(), self, pair);
        Some(pair)
    }

    /// Solve one level of the recursion.
    fn search_range(&self, points: &[Point], range: IndexRange) -> ClosestPair {
        if range.len() <= self.brute_force_boundary {
            return brute_force(points, range);
        }

        let (left_range, right_range) = range.split();
        let left = self.search_range(points, left_range);
        let right = self.search_range(points, right_range);

        let strip = strip_closest(
            points,
            left.distance(),
            right.distance(),
            range,
            self.strip_check_limit,
        );

        let best = match strip {
            None => {
                if left.is_closer_than(&right) {
                    left
                } else {
                    right
                }
            }
            Some(strip) => {
                if left.is_closer_than(&right) && left.is_closer_than(&strip) {
                    left
                } else if right.is_closer_than(&strip) {
                    right
                } else {
                    strip
                }
            }
        };

        trace!("{:?}: left {}, right {}, strip {:?} => {}", range, left, right, strip, best);
        best
    }
}

/// Solve a small range exhaustively.
fn brute_force(points: &[Point], range: IndexRange) -> ClosestPair {
    debug_assert!(range.len() >= 2);

    let slice = &points[range.as_range()];
    let (i, j) = closest_pair_exhaustive(slice).unwrap_or((0, 1));
    ClosestPair::new(slice[i], slice[j])
}

/// Find the closest pair of `points` with the default tuning.
///
/// `points` is stably sorted by x in place.  Returns `None` if there are fewer than two points.
///
///     # use closest_pair::{closest_pair, Point};
///     let mut points = [Point::new(0, 0), Point::new(5, 5), Point::new(1, 1)];
///     let pair = closest_pair(&mut points).unwrap();
///     assert_eq!(pair.points(), [Point::new(0, 0), Point::new(1, 1)]);
pub fn closest_pair(points: &mut [Point]) -> Option<ClosestPair> {
    ClosestPairSearch::default().search(points)
}

/// Find the closest pair of `points`.
///
/// Returns the two closest points, or the input unchanged if it has fewer than two points.
///
///     # use closest_pair::{find_closest_pair, Point};
///     let points = vec![Point::new(0, 0), Point::new(3, 4), Point::new(0, 1)];
///     assert_eq!(find_closest_pair(points), [Point::new(0, 0), Point::new(0, 1)]);
///
///     assert_eq!(find_closest_pair(vec![Point::new(2, 2)]), [Point::new(2, 2)]);
pub fn find_closest_pair(mut points: Vec<Point>) -> Vec<Point> {
    match closest_pair(&mut points) {
        Some(pair) => pair.into(),
        None => points,
    }
}

/// Like [`find_closest_pair`], but also passes through an absent point set.
pub fn find_closest_pair_opt(points: Option<Vec<Point>>) -> Option<Vec<Point>> {
    points.map(find_closest_pair)
}
