pub mod cli;
mod core;
pub mod events;
mod game;
mod logging;
pub mod player;
pub mod prelude;

pub use crate::core::*;
pub use events::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
