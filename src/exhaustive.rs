//! Exhaustive closest pair search.

use crate::distance::Metric;

/// Find the closest pair among `items` by checking every pair, in `O(n^2)` time.
///
/// Returns the indices `(i, j)`, `i < j`, of the closest pair, or `None` if there are fewer than
/// two items.  Ties go to the first pair in `(i, j)` lexicographic order.  Since a metric is
/// symmetric, each unordered pair is only measured once.
pub fn closest_pair_exhaustive<T: Metric>(items: &[T]) -> Option<(usize, usize)> {
    if items.len() < 2 {
        return None;
    }

    let mut best = (0, 1);
    let mut best_distance = items[0].distance(&items[1]);
    for (i, a) in items.iter().enumerate() {
        for (j, b) in items.iter().enumerate().skip(i + 1) {
            let distance = a.distance(b);
            if distance < best_distance {
                best = (i, j);
                best_distance = distance;
            }
        }
    }

    Some(best)
}
