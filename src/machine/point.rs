//! Target coordinate triples.

use core::fmt;

use serde::Deserialize;

use crate::config::units::Steps;

use super::axis::AxisId;

/// A target position for all three axes, in actuation steps.
///
/// Deserializes from a plain 3-element array (`[x, y, z]`), the shape path
/// points arrive in from an external caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Point([Steps; 3]);

impl Point {
    /// The machine origin.
    pub const ORIGIN: Point = Point::new(0, 0, 0);

    /// Create a point from raw step counts.
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self([Steps(x), Steps(y), Steps(z)])
    }

    /// The target for one axis.
    #[inline]
    pub fn get(self, axis: AxisId) -> Steps {
        self.0[axis.index()]
    }
}

impl From<[i64; 3]> for Point {
    fn from(coords: [i64; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
