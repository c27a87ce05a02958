use crate::C;

/// A cell coordinate on the grid.
///
/// Coordinates are signed so that callers can express (and have
/// rejected) locations that fall off the grid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the euclidean distance, in cells, between `self` and
    /// `other`.
    pub fn distance(self, other: Point) -> C {
        let dx = C::from(self.x) - C::from(other.x);
        let dy = C::from(self.y) - C::from(other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A fixed transmitter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transmitter {
    /// Cell the transmitter sits on.
    pub location: Point,

    /// Transmit power (dBm).
    pub power_dbm: C,
}
