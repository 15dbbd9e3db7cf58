//! Console collaborators
//!
//! This module provides the text side of a match:
//! - Target parsing (1-based input to 0-based coordinates)
//! - Grid rendering and the console reporter

pub mod interface;

pub use interface::*;

use crate::core::{Coordinate, InputError};

/// Parse a line holding exactly two integers, column then row, both 1-based.
///
/// Range is not checked here; a coordinate off the grid is rejected when the
/// shot is resolved.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let malformed = || InputError::Malformed(line.trim().to_string());
    let mut parts = line.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let x: i32 = x.parse().map_err(|_| malformed())?;
    let y: i32 = y.parse().map_err(|_| malformed())?;
    match (x.checked_sub(1), y.checked_sub(1)) {
        (Some(x), Some(y)) => Ok(Coordinate::new(x, y)),
        _ => Err(malformed()),
    }
}
