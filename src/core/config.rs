/// Side length of the square grid used by a standard match.
pub const DEFAULT_SIDE_LENGTH: i32 = 6;

/// Vessel lengths of a standard fleet.
pub const DEFAULT_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Placement attempts allowed for a single vessel before the whole grid is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 2000;

/// Grid dimensions and fleet composition for one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub side_length: i32,
    pub fleet: Vec<usize>,
    pub max_placement_attempts: u32,
}

impl GameConfig {
    pub fn new(side_length: i32, fleet: Vec<usize>) -> Self {
        Self {
            side_length,
            fleet,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Fleet lengths ordered largest first, the order in which vessels are placed.
    pub fn fleet_descending(&self) -> Vec<usize> {
        let mut lengths = self.fleet.clone();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        lengths
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIDE_LENGTH, DEFAULT_FLEET.to_vec())
    }
}
