//! Common types for the rules engine: shot outcomes and the errors raised while
//! placing vessels, resolving shots and reading targets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Shot struck nothing.
    Miss,
    /// Shot struck a vessel that still has intact segments.
    Hit,
    /// Shot struck the last intact segment of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// Whether the attacker keeps the turn after this outcome.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Reasons a vessel cannot be placed on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some segment falls outside the grid.
    OutOfBounds,
    /// Some segment touches another vessel or its halo.
    Collision,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "vessel does not fit on the grid"),
            PlacementError::Collision => write!(f, "vessel touches another vessel"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Reasons a shot is rejected without being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already shot or revealed around a sunk vessel.
    AlreadyTargeted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "this point is outside the grid"),
            ShotError::AlreadyTargeted => write!(f, "this point has already been targeted"),
        }
    }
}

impl std::error::Error for ShotError {}

/// Failure to obtain a target from a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input was not exactly two integers.
    Malformed(String),
    /// The input stream has ended.
    Closed,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Malformed(line) => write!(f, "expected two numbers, got {:?}", line),
            InputError::Closed => write!(f, "input stream closed"),
        }
    }
}

impl std::error::Error for InputError {}

/// Raised when an interactive player can no longer provide targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input stream closed before the match ended")
    }
}

impl std::error::Error for InputClosed {}

/// A single grid generation attempt ran out of placement attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationError {
    /// Length of the vessel that could not be placed.
    pub vessel_length: usize,
    /// Attempts spent on that vessel.
    pub attempts: u32,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not place vessel of length {} after {} attempts",
            self.vessel_length, self.attempts
        )
    }
}

impl std::error::Error for GenerationError {}
