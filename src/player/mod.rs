//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: fires at uniformly random coordinates
//! - CliPlayer: reads targets from a line-oriented input

use log::debug;
use rand::rngs::SmallRng;

use crate::core::{Coordinate, Grid, InputClosed, InputError};
use crate::events::{GameEvent, Reporter, Side};

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next coordinate to fire at on a grid of `side_length`.
    fn request_target(
        &mut self,
        rng: &mut SmallRng,
        side_length: i32,
    ) -> Result<Coordinate, InputError>;

    /// Take one shot at `opponent` on behalf of `side`.
    ///
    /// Returns `Ok(true)` when the same side acts again: after a hit, or after
    /// a rejected target, which consumes no shot. Returns `Ok(false)` after a
    /// miss or a sinking. Fails only when the player's input has closed.
    fn perform_turn(
        &mut self,
        side: Side,
        rng: &mut SmallRng,
        opponent: &mut Grid,
        reporter: &mut dyn Reporter,
    ) -> Result<bool, InputClosed> {
        let target = match self.request_target(rng, opponent.side_length()) {
            Ok(target) => target,
            Err(InputError::Closed) => return Err(InputClosed),
            Err(e) => {
                debug!("{:?} gave unusable input: {}", side, e);
                reporter.notify(side, GameEvent::from(&e));
                return Ok(true);
            }
        };
        reporter.announce_target(side, target);
        match opponent.resolve_shot(target) {
            Ok(outcome) => {
                reporter.notify(side, GameEvent::from(outcome));
                Ok(outcome.grants_extra_turn())
            }
            Err(e) => {
                debug!("{:?} shot at {:?} rejected: {}", side, target, e);
                reporter.notify(side, GameEvent::from(e));
                Ok(true)
            }
        }
    }
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
