//! The merge step of the divide and conquer search.
//!
//! After the left and right halves of a range have been solved, the only pairs that could still
//! beat them straddle the dividing line.  Such a pair must lie in a vertical strip of half-width
//! `min(left, right)` around the midpoint, and within that strip, sorted by y, each point can
//! only be closer than that width to a constant number of its successors.

use crate::distance::Proximity;
use crate::euclid::{axis_distance, EuclideanDistance};
use crate::pair::ClosestPair;
use crate::point::Point;
use crate::range::IndexRange;

use log::trace;

/// The number of y-sorted strip positions each point is checked against, itself included.
pub const STRIP_CHECK_LIMIT: usize = 7;

/// Find the closest pair in the strip around `range`'s midpoint that is strictly closer than
/// both `left` and `right`.
///
/// `points` must be sorted by x within `range`.  Each strip point at position `i` is compared
/// against the positions `i + 1 .. min(i + limit, len)`.  Returns `None` if no pair in the strip
/// beats `min(left, right)`.
pub fn strip_closest(
    points: &[Point],
    left: EuclideanDistance,
    right: EuclideanDistance,
    range: IndexRange,
    limit: usize,
) -> Option<ClosestPair> {
    let width = left.min(right);
    let mid_x = points[range.mid()].x();

    let mut strip: Vec<Point> = points[range.as_range()]
        .iter()
        .filter(|p| axis_distance(p.x(), mid_x) < width)
        .copied()
        .collect();
    strip.sort_by_key(Point::y);

    trace!("strip around x={} in {:?}: {} of {} points", mid_x, range, strip.len(), range.len());

    let mut best = None;
    let mut best_distance = width;
    for (i, a) in strip.iter().enumerate() {
        let end = strip.len().min(i.saturating_add(limit));
        for b in strip.iter().take(end).skip(i + 1) {
            let distance = a.distance(b);
            if distance < best_distance {
                best_distance = distance;
                best = Some((*a, *b));
            }
        }
    }

    best.map(|(a, b)| ClosestPair::new(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: f64) -> EuclideanDistance {
        EuclideanDistance::try_from(value).unwrap()
    }

    #[test]
    fn test_crossing_pair() {
        let points = [
            Point::new(0, 0),
            Point::new(0, 10),
            Point::new(9, 4),
            Point::new(10, 5),
            Point::new(20, 0),
            Point::new(20, 10),
        ];
        let range = IndexRange::new(0, points.len());
        assert_eq!(range.mid(), 3);

        let pair = strip_closest(&points, d(10.0), d(10.0), range, STRIP_CHECK_LIMIT).unwrap();
        assert_eq!(pair.points(), [Point::new(9, 4), Point::new(10, 5)]);
    }

    #[test]
    fn test_no_improvement() {
        let points = [Point::new(0, 0), Point::new(0, 1), Point::new(5, 0), Point::new(5, 1)];
        let range = IndexRange::new(0, points.len());
        assert_eq!(strip_closest(&points, d(1.0), d(1.0), range, STRIP_CHECK_LIMIT), None);
    }

    #[test]
    fn test_strip_is_strict() {
        // Exactly `width` away from the midpoint is outside the strip
        let points = [Point::new(0, 0), Point::new(2, 0), Point::new(4, 1)];
        let range = IndexRange::new(0, points.len());
        assert_eq!(strip_closest(&points, d(2.0), d(3.0), range, STRIP_CHECK_LIMIT), None);
    }

    #[test]
    fn test_check_limit() {
        // Sorted by y, the closest pair is two strip positions apart
        let points = [Point::new(0, 0), Point::new(0, 2), Point::new(40, 1)];
        let range = IndexRange::new(0, points.len());

        let pair = strip_closest(&points, d(50.0), d(50.0), range, 3).unwrap();
        assert_eq!(pair.points(), [Point::new(0, 0), Point::new(0, 2)]);

        let pair = strip_closest(&points, d(50.0), d(50.0), range, 2).unwrap();
        assert_eq!(pair.points(), [Point::new(0, 0), Point::new(40, 1)]);

        assert_eq!(strip_closest(&points, d(50.0), d(50.0), range, 1), None);

        let pair = strip_closest(&points, d(50.0), d(50.0), range, usize::MAX).unwrap();
        assert_eq!(pair.points(), [Point::new(0, 0), Point::new(0, 2)]);
    }
}
