//! The [`Coord`] type — a cell address on the skewed hex grid.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer coordinate on the hex grid.
///
/// `x` grows rightward along a row; `y` selects the row. The y axis of the
/// hex layout is skewed 60° against the x axis, so `(x+1, y+1)` is a direct
/// neighbor of `(x, y)` while `(x-1, y+1)` is not.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a coordinate shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major ordering: by `y`, then by `x`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(12, -3);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
