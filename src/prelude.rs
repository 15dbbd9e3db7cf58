//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, CliPlayer, Coordinate, FleetGenerator, Game, GameConfig, GameEvent, Grid,
    MatchOutcome, Player, Reporter, ShotOutcome, Side,
};

pub use crate::cli::ConsoleReporter;
