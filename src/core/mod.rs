//! Core rules engine
//!
//! This module contains the pure game rules: coordinates, vessels, the grid
//! with its placement and shot logic, and the random fleet generator. Nothing
//! here reads input or prints.

pub mod common;
pub mod config;
pub mod coordinate;
pub mod fleet;
pub mod grid;
pub mod vessel;

// Re-export commonly used types
pub use common::{GenerationError, InputClosed, InputError, PlacementError, ShotError, ShotOutcome};
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::FleetGenerator;
pub use grid::{CellState, Grid};
pub use vessel::{Orientation, Vessel};
