//! Vessel definitions: footprint derivation and hit tracking.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Extends along increasing `x`.
    Horizontal,
    /// Extends along increasing `y`.
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A vessel anchored at its bow.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    bow: Coordinate,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Vessel {
    /// Create an intact vessel. `length` must be at least 1.
    pub fn new(length: usize, bow: Coordinate, orientation: Orientation) -> Self {
        debug_assert!(length >= 1, "vessel length must be at least 1");
        Self {
            length,
            bow,
            orientation,
            remaining_hits: length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Intact segments left.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Occupied coordinates, bow to stern.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dx, dy) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dx * i, dy * i))
    }

    /// Occupied coordinates collected into a vector, bow to stern.
    pub fn occupied_coordinates(&self) -> Vec<Coordinate> {
        self.coordinates().collect()
    }

    /// Returns `true` if `target` is one of this vessel's segments.
    pub fn is_struck(&self, target: Coordinate) -> bool {
        let (dx, dy) = self.orientation.step();
        let (dx, dy) = (i64::from(dx), i64::from(dy));
        let ox = i64::from(target.x) - i64::from(self.bow.x);
        let oy = i64::from(target.y) - i64::from(self.bow.y);
        let along = ox * dx + oy * dy;
        let across = ox * dy + oy * dx;
        across == 0 && along >= 0 && (along as u64) < self.length as u64
    }

    /// Register a hit on a distinct segment. Returns `true` when this hit sinks the vessel.
    pub(crate) fn take_hit(&mut self) -> bool {
        if self.remaining_hits == 0 {
            return false;
        }
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ length: {}, bow: ({}, {}), orientation: {:?}, remaining_hits: {} }}",
            self.length, self.bow.x, self.bow.y, self.orientation, self.remaining_hits,
        )
    }
}
