//! Points with integer coordinates in the plane.

use crate::distance::Distance;
use crate::euclid::euclidean_distance;

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// An immutable point in the integer plane.
///
/// A point has no identity beyond its coordinates; equal points are still distinct items of a
/// point set.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The x coordinate.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// The y coordinate.
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// The Euclidean distance to another point.
    ///
    ///     # use closest_pair::Point;
    ///     assert_eq!(Point::new(0, 0).distance_to(&Point::new(3, 4)), 5.0);
    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean_distance(self, other).value()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(x={}, y={})", self.x, self.y)
    }
}

/// Error type for [`Point::from_str`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParsePointError {
    /// The text doesn't have the shape `(x=<x>, y=<y>)` or `<x>,<y>`.
    Syntax,
    /// A coordinate isn't a valid `i32`.
    Coordinate(ParseIntError),
}

impl Display for ParsePointError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => f.write_str("expected `(x=<x>, y=<y>)` or `<x>,<y>`"),
            Self::Coordinate(e) => write!(f, "invalid coordinate: {}", e),
        }
    }
}

impl Error for ParsePointError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Syntax => None,
            Self::Coordinate(e) => Some(e),
        }
    }
}

impl From<ParseIntError> for ParsePointError {
    fn from(e: ParseIntError) -> Self {
        Self::Coordinate(e)
    }
}

/// Parses the [`Display`] form `(x=1, y=2)`, or the bare form `1,2`.
impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (x, y) = match s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            Some(inner) => {
                let (x, y) = inner.split_once(',').ok_or(ParsePointError::Syntax)?;
                let x = x.trim().strip_prefix("x=").ok_or(ParsePointError::Syntax)?;
                let y = y.trim().strip_prefix("y=").ok_or(ParsePointError::Syntax)?;
                (x, y)
            }
            None => s.split_once(',').ok_or(ParsePointError::Syntax)?,
        };

        Ok(Self::new(x.trim().parse()?, y.trim().parse()?))
    }
}
