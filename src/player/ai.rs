use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{Coordinate, InputError};

use super::Player;

/// Computer player that fires at uniformly random coordinates.
///
/// It does not remember earlier shots; repeats are rejected by the grid and
/// simply retried.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn request_target(
        &mut self,
        rng: &mut SmallRng,
        side_length: i32,
    ) -> Result<Coordinate, InputError> {
        let side = side_length.max(1);
        Ok(Coordinate::new(
            rng.random_range(0..side),
            rng.random_range(0..side),
        ))
    }
}
