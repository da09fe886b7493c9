//! Core value types: errors, player identity, cells, and the game RNG.

pub mod cell;
pub mod error;
pub mod player;
pub mod rng;

pub use cell::Cell;
pub use error::{GameError, PlacementError};
pub use player::{Player, PlayerColor};
pub use rng::GameRng;
