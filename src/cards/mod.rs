//! Cards: influence patterns, the `Card` value type, and deck parsing.

pub mod card;
pub mod deck;
pub mod influence;

pub use card::{Card, CardLike};
pub use deck::parse_deck;
pub use influence::{Influence, CENTER, GRID_SIZE};
