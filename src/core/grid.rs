//! Integer Grid Coordinates
//!
//! Room positions live on a small integer grid. Edge costs and the
//! extra-edge neighborhood filter both use Manhattan distance.

use serde::{Deserialize, Serialize};

/// A position on the dungeon grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Column, in `[0, side)`.
    pub x: i32,
    /// Row, in `[0, side)`.
    pub y: i32,
}

impl GridPos {
    /// Create a position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    #[inline]
    pub fn manhattan_distance(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = GridPos::new(0, 0);
        let b = GridPos::new(3, 4);

        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn test_manhattan_distance_axis_aligned() {
        let a = GridPos::new(2, 5);

        assert_eq!(a.manhattan_distance(GridPos::new(2, 7)), 2);
        assert_eq!(a.manhattan_distance(GridPos::new(0, 5)), 2);
    }
}
