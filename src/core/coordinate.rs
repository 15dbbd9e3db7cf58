use std::fmt;

use serde::{Deserialize, Serialize};

/// A 0-based position on the grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This coordinate shifted by (`dx`, `dy`).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The eight surrounding coordinates, which may lie off the grid.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl fmt::Display for Coordinate {
    /// Formats 1-based, the way players enter and read coordinates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", i64::from(self.x) + 1, i64::from(self.y) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_excludes_self() {
        let c = Coordinate::new(2, 2);
        let around: Vec<_> = c.neighbors().collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&c));
        assert!(around.contains(&Coordinate::new(1, 1)));
        assert!(around.contains(&Coordinate::new(3, 3)));
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(Coordinate::new(0, 4).to_string(), "1 5");
    }
}
