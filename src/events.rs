//! Notifications the match emits to whoever presents it.

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, Grid, InputError, ShotError, ShotOutcome};

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    User,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::User => 0,
            Side::Computer => 1,
        }
    }
}

/// Discrete events raised during a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Hit,
    Miss,
    Sunk,
    OutOfBounds,
    AlreadyTargeted,
    MalformedInput,
    UserWins,
    ComputerWins,
}

impl From<ShotOutcome> for GameEvent {
    fn from(outcome: ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::Hit => GameEvent::Hit,
            ShotOutcome::Miss => GameEvent::Miss,
            ShotOutcome::Sunk => GameEvent::Sunk,
        }
    }
}

impl From<ShotError> for GameEvent {
    fn from(err: ShotError) -> Self {
        match err {
            ShotError::OutOfBounds => GameEvent::OutOfBounds,
            ShotError::AlreadyTargeted => GameEvent::AlreadyTargeted,
        }
    }
}

impl From<&InputError> for GameEvent {
    fn from(_: &InputError) -> Self {
        GameEvent::MalformedInput
    }
}

/// Output collaborator for a match. Every method defaults to doing nothing, so
/// headless runs can pass [`Silent`].
pub trait Reporter {
    /// Draw both grids. Called before every turn and once more when the match ends.
    fn render(&mut self, _user: &Grid, _computer: &Grid) {}

    /// A side has chosen where to fire.
    fn announce_target(&mut self, _side: Side, _target: Coordinate) {}

    /// Something happened during `side`'s turn.
    fn notify(&mut self, _side: Side, _event: GameEvent) {}
}

/// [`Reporter`] that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Reporter for Silent {}

/// [`Reporter`] that keeps every event in order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub events: Vec<(Side, GameEvent)>,
    pub targets: Vec<(Side, Coordinate)>,
    pub renders: usize,
}

impl Reporter for Recorder {
    fn render(&mut self, _user: &Grid, _computer: &Grid) {
        self.renders += 1;
    }

    fn announce_target(&mut self, side: Side, target: Coordinate) {
        self.targets.push((side, target));
    }

    fn notify(&mut self, side: Side, event: GameEvent) {
        self.events.push((side, event));
    }
}
