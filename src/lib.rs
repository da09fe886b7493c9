//! # sanguine
//!
//! A two-player, grid-based territory-control card game engine with a
//! family of deterministic move-selection strategies.
//!
//! ## Design Principles
//!
//! 1. **Card-Agnostic Core**: The model and strategies are generic over
//!    the [`CardLike`](cards::CardLike) capability trait, so richer card
//!    types plug in without touching the engine.
//!
//! 2. **Read-Only Analysis**: Strategies and renderers consume the
//!    [`BoardView`](model::BoardView) accessor trait, never the mutable
//!    model. A pure analyzer cannot corrupt the game it is studying.
//!
//! 3. **Deterministic Everywhere**: Strategies return *all* moves tied
//!    for best in a canonical enumeration order, and deck shuffles run
//!    on a seeded RNG, so every game is reproducible.
//!
//! ## Modules
//!
//! - `core`: Players, cells, errors, RNG
//! - `cards`: Card definitions, influence grids, deck-file parsing
//! - `model`: Game state machine and the read-only board view
//! - `strategy`: Five move-selection policies and composition
//! - `render`: Textual board rendering

pub mod cards;
pub mod core;
pub mod model;
pub mod render;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{Cell, GameError, GameRng, PlacementError, Player, PlayerColor};

pub use crate::cards::{parse_deck, Card, CardLike, Influence};

pub use crate::model::{BoardView, GameModel, TurnAction, TurnRecord, MAX_PAWNS};

pub use crate::strategy::{
    Composite, ControlBoard, FillFirst, MaximizeRowScore, MiniMax, Move, Strategy,
};

pub use crate::render::TextualView;
