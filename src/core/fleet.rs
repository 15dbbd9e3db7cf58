//! Random fleet placement by rejection sampling.

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::Rng;

use super::common::GenerationError;
use super::config::GameConfig;
use super::coordinate::Coordinate;
use super::grid::Grid;
use super::vessel::{Orientation, Vessel};

/// Builds fully populated grids for a [`GameConfig`].
#[derive(Debug, Clone)]
pub struct FleetGenerator {
    config: GameConfig,
}

impl FleetGenerator {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Single generation attempt. Vessels are placed largest first at uniformly
    /// random bows and orientations; there is no backtracking, so once one
    /// vessel exhausts its attempts the whole grid is abandoned.
    pub fn try_generate(
        &self,
        rng: &mut SmallRng,
        reveal_vessels: bool,
    ) -> Result<Grid, GenerationError> {
        let side = self.config.side_length;
        let mut grid = Grid::new(side, reveal_vessels);
        for length in self.config.fleet_descending() {
            if side <= 0 {
                return Err(GenerationError {
                    vessel_length: length,
                    attempts: 0,
                });
            }
            let mut attempts = 0u32;
            loop {
                if attempts >= self.config.max_placement_attempts {
                    return Err(GenerationError {
                        vessel_length: length,
                        attempts,
                    });
                }
                attempts += 1;
                let vessel = random_vessel(rng, side, length);
                match grid.add_vessel(vessel) {
                    Ok(()) => break,
                    Err(e) => trace!("placement {:?} rejected: {}", vessel, e),
                }
            }
        }
        Ok(grid)
    }

    /// Generate grids until one succeeds. Does not terminate for fleets that
    /// can never fit on the grid.
    pub fn generate(&self, rng: &mut SmallRng, reveal_vessels: bool) -> Grid {
        let mut failures = 0u64;
        loop {
            match self.try_generate(rng, reveal_vessels) {
                Ok(grid) => return grid,
                Err(e) => {
                    failures += 1;
                    debug!("grid generation attempt {} abandoned: {}", failures, e);
                }
            }
        }
    }
}

impl Default for FleetGenerator {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn random_vessel(rng: &mut SmallRng, side: i32, length: usize) -> Vessel {
    let bow = Coordinate::new(rng.random_range(0..side), rng.random_range(0..side));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Vessel::new(length, bow, orientation)
}
