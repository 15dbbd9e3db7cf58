#![allow(dead_code)]

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use seabattle::{Coordinate, Grid, InputError, Orientation, Player, Vessel};

/// Player that replays a fixed list of answers, then reports closed input.
pub struct Scripted {
    answers: VecDeque<Result<Coordinate, InputError>>,
}

impl Scripted {
    pub fn new(answers: Vec<Result<Coordinate, InputError>>) -> Self {
        Self {
            answers: answers.into(),
        }
    }

    pub fn shots(targets: &[(i32, i32)]) -> Self {
        Self::new(
            targets
                .iter()
                .map(|&(x, y)| Ok(Coordinate::new(x, y)))
                .collect(),
        )
    }
}

impl Player for Scripted {
    fn request_target(
        &mut self,
        _rng: &mut SmallRng,
        _side_length: i32,
    ) -> Result<Coordinate, InputError> {
        self.answers.pop_front().unwrap_or(Err(InputError::Closed))
    }
}

/// 6×6 grid holding the given (length, bow x, bow y, orientation) vessels.
pub fn grid(vessels: &[(usize, i32, i32, Orientation)], reveal: bool) -> Grid {
    let mut grid = Grid::new(6, reveal);
    for &(len, x, y, o) in vessels {
        grid.add_vessel(Vessel::new(len, Coordinate::new(x, y), o))
            .unwrap();
    }
    grid
}
