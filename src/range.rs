//! Index ranges for recursive searches.

use std::ops::Range;

/// A half-open index interval `[start, end)` along with its midpoint.
///
/// One of these is created for each level of a recursive search, to describe the slice of the
/// x-sorted points that level is responsible for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexRange {
    start: usize,
    mid: usize,
    end: usize,
}

impl IndexRange {
    /// Create a range, computing its midpoint.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);

        Self {
            start,
            mid: start + (end - start) / 2,
            end,
        }
    }

    /// The first index of this range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The midpoint, `start + (end - start) / 2`.
    pub fn mid(&self) -> usize {
        self.mid
    }

    /// One past the last index of this range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The number of indices in this range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this range is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The lower half, `[start, mid)`.
    pub fn left(&self) -> Self {
        Self::new(self.start, self.mid)
    }

    /// The upper half, `[mid, end)`.
    pub fn right(&self) -> Self {
        Self::new(self.mid, self.end)
    }

    /// Split into the lower and upper halves.
    pub fn split(&self) -> (Self, Self) {
        (self.left(), self.right())
    }

    /// Convert to a standard [`Range`], for slicing.
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for IndexRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let range = IndexRange::new(3, 10);
        assert_eq!(range.mid(), 6);
        assert_eq!(range.len(), 7);

        let (left, right) = range.split();
        assert_eq!(left, IndexRange::new(3, 6));
        assert_eq!(right, IndexRange::new(6, 10));
        assert_eq!(left.len() + right.len(), range.len());
    }

    #[test]
    fn test_degenerate() {
        let empty = IndexRange::from(4..4);
        assert!(empty.is_empty());
        assert_eq!(empty.mid(), 4);

        let one = IndexRange::new(0, 1);
        assert_eq!(one.mid(), 0);
        assert!(one.start() <= one.mid() && one.mid() <= one.end());
        assert_eq!(one.as_range(), 0..1);
    }
}
