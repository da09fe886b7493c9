//! The game model and its read-only accessor surface.

pub mod game;
pub mod view;

pub use game::{GameModel, TurnAction, TurnRecord, MAX_PAWNS};
pub use view::BoardView;
