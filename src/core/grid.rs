//! Grid state: vessel placement with halo exclusion, shot resolution and the
//! cell projection handed to renderers.

use std::collections::HashSet;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::common::{PlacementError, ShotError, ShotOutcome};
use super::coordinate::Coordinate;
use super::vessel::Vessel;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Open sea, never shot.
    Empty,
    /// Intact vessel segment.
    Occupied,
    /// Shot that struck nothing.
    Miss,
    /// Shot that struck a vessel.
    Hit,
    /// Cell revealed as empty around a sunk vessel.
    Halo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Clear,
    Miss,
    Hit,
    Halo,
}

/// One player's board.
///
/// Placement and shooting keep separate exclusion sets. `reserved` holds vessel
/// footprints and their halos and is only consulted by [`Grid::add_vessel`];
/// `targeted` holds shot coordinates and the halos revealed around sunk vessels
/// and is only consulted by [`Grid::resolve_shot`]. Both only ever grow, except
/// that [`Grid::reset_for_play`] empties `targeted` before the first shot.
#[derive(Clone)]
pub struct Grid {
    side_length: i32,
    vessels: Vec<Vessel>,
    reserved: HashSet<Coordinate>,
    targeted: HashSet<Coordinate>,
    marks: Vec<Mark>,
    live_vessels: usize,
    reveal_vessels: bool,
}

impl Grid {
    /// Create an empty `side_length` × `side_length` grid.
    pub fn new(side_length: i32, reveal_vessels: bool) -> Self {
        let side_length = side_length.max(0);
        let cells = (side_length as usize) * (side_length as usize);
        Self {
            side_length,
            vessels: Vec::new(),
            reserved: HashSet::new(),
            targeted: HashSet::new(),
            marks: vec![Mark::Clear; cells],
            live_vessels: 0,
            reveal_vessels,
        }
    }

    pub fn side_length(&self) -> i32 {
        self.side_length
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels not yet sunk.
    pub fn live_vessel_count(&self) -> usize {
        self.live_vessels
    }

    pub fn reveal_vessels(&self) -> bool {
        self.reveal_vessels
    }

    pub fn set_reveal_vessels(&mut self, reveal: bool) {
        self.reveal_vessels = reveal;
    }

    /// Returns `true` if either axis of `c` lies outside `[0, side_length)`.
    pub fn out_of_bounds(&self, c: Coordinate) -> bool {
        c.x < 0 || c.y < 0 || c.x >= self.side_length || c.y >= self.side_length
    }

    /// Returns `true` if no further vessel may occupy `c`.
    pub fn is_reserved(&self, c: Coordinate) -> bool {
        self.reserved.contains(&c)
    }

    /// Returns `true` if `c` can no longer be shot.
    pub fn is_targeted(&self, c: Coordinate) -> bool {
        self.targeted.contains(&c)
    }

    /// Place `vessel`, reserving its footprint and halo.
    ///
    /// Every segment is validated before anything is recorded, so a rejected
    /// vessel leaves the grid untouched.
    pub fn add_vessel(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        for c in vessel.coordinates() {
            if self.out_of_bounds(c) {
                return Err(PlacementError::OutOfBounds);
            }
            if self.reserved.contains(&c) {
                return Err(PlacementError::Collision);
            }
        }
        self.reserved.extend(vessel.coordinates());
        self.vessels.push(vessel);
        if !vessel.is_sunk() {
            self.live_vessels += 1;
        }
        self.mark_halo(&vessel, false);
        Ok(())
    }

    /// Block the in-bounds neighbours of every segment of `vessel`.
    ///
    /// With `reveal == false` the halo is added to the placement exclusion set
    /// and nothing is drawn. With `reveal == true` the halo is added to the
    /// targeted set and newly blocked cells are painted as [`CellState::Halo`].
    pub fn mark_halo(&mut self, vessel: &Vessel, reveal: bool) {
        for segment in vessel.coordinates() {
            for c in segment.neighbors() {
                if self.out_of_bounds(c) {
                    continue;
                }
                let blocked = if reveal {
                    &mut self.targeted
                } else {
                    &mut self.reserved
                };
                if blocked.insert(c) && reveal {
                    let idx = self.index(c);
                    if self.marks[idx] != Mark::Hit {
                        self.marks[idx] = Mark::Halo;
                    }
                }
            }
        }
    }

    /// Fire at `target`.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        if self.out_of_bounds(target) {
            return Err(ShotError::OutOfBounds);
        }
        if !self.targeted.insert(target) {
            return Err(ShotError::AlreadyTargeted);
        }
        let idx = self.index(target);
        let struck = self.vessels.iter().position(|v| v.is_struck(target));
        let Some(i) = struck else {
            self.marks[idx] = Mark::Miss;
            debug!("shot at {:?} missed", target);
            return Ok(ShotOutcome::Miss);
        };
        self.marks[idx] = Mark::Hit;
        if self.vessels[i].take_hit() {
            self.live_vessels -= 1;
            let sunk = self.vessels[i];
            self.mark_halo(&sunk, true);
            debug!(
                "shot at {:?} sank {:?}, {} vessels left",
                target, sunk, self.live_vessels
            );
            Ok(ShotOutcome::Sunk)
        } else {
            debug!("shot at {:?} hit {:?}", target, self.vessels[i]);
            Ok(ShotOutcome::Hit)
        }
    }

    /// Forget placement-time blocking so that only real shots count as targeted.
    ///
    /// Vessels and the placement exclusion set are kept; the targeted set and
    /// every painted marker are cleared.
    pub fn reset_for_play(&mut self) {
        self.targeted.clear();
        self.marks.fill(Mark::Clear);
    }

    /// Raw projection of `c`, ignoring `reveal_vessels`. `None` when off the grid.
    pub fn cell(&self, c: Coordinate) -> Option<CellState> {
        if self.out_of_bounds(c) {
            return None;
        }
        let state = match self.marks[self.index(c)] {
            Mark::Hit => CellState::Hit,
            Mark::Miss => CellState::Miss,
            Mark::Halo => CellState::Halo,
            Mark::Clear if self.vessels.iter().any(|v| v.is_struck(c)) => CellState::Occupied,
            Mark::Clear => CellState::Empty,
        };
        Some(state)
    }

    /// Projection of `c` as an observer of this grid sees it: concealed vessels read as empty.
    pub fn visible_cell(&self, c: Coordinate) -> Option<CellState> {
        self.cell(c).map(|state| match state {
            CellState::Occupied if !self.reveal_vessels => CellState::Empty,
            other => other,
        })
    }

    /// Visible projection, one row per `y`, each row ordered by `x`.
    pub fn rows(&self) -> Vec<Vec<CellState>> {
        (0..self.side_length)
            .map(|y| {
                (0..self.side_length)
                    .filter_map(|x| self.visible_cell(Coordinate::new(x, y)))
                    .collect()
            })
            .collect()
    }

    fn index(&self, c: Coordinate) -> usize {
        (c.y * self.side_length + c.x) as usize
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  side_length: {},\n  live_vessels: {},\n  reveal_vessels: {},\n  vessels: {:?},\n  targeted: {}\n}}",
            self.side_length,
            self.live_vessels,
            self.reveal_vessels,
            self.vessels,
            self.targeted.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vessel::Orientation;

    #[test]
    fn rejected_vessel_leaves_grid_untouched() {
        let mut grid = Grid::new(6, true);
        let err = grid
            .add_vessel(Vessel::new(3, Coordinate::new(4, 0), Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err, PlacementError::OutOfBounds);
        assert!(grid.vessels().is_empty());
        assert!(!grid.is_reserved(Coordinate::new(4, 0)));
        assert_eq!(grid.live_vessel_count(), 0);
    }

    #[test]
    fn placement_halo_is_silent() {
        let mut grid = Grid::new(6, true);
        grid.add_vessel(Vessel::new(1, Coordinate::new(2, 2), Orientation::Vertical))
            .unwrap();
        assert!(grid.is_reserved(Coordinate::new(1, 1)));
        assert_eq!(grid.cell(Coordinate::new(1, 1)), Some(CellState::Empty));
        assert!(!grid.is_targeted(Coordinate::new(1, 1)));
    }
}
