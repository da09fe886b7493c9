//! Error taxonomy for the game core.
//!
//! Every failure is local and synchronous: a rejected operation reports
//! why and leaves the model in its pre-call state. Retry policy (e.g.
//! re-prompting a human) belongs to the controller layer, not here.

use thiserror::Error;

/// Errors reported by the game core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Card construction or deck parsing failed validation.
    #[error("invalid card: {reason}")]
    InvalidCard { reason: String },

    /// Board dimensions must both be positive.
    #[error("invalid board size {rows}x{cols}")]
    InvalidBoardSize { rows: usize, cols: usize },

    /// Coordinates fall outside the board.
    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} board")]
    InvalidCoordinates {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The target cell rejects the placement.
    #[error("illegal placement: {0}")]
    IllegalPlacement(#[from] PlacementError),

    /// Hand index out of range.
    #[error("hand index {index} out of range for hand of {hand_size}")]
    InvalidHandIndex { index: usize, hand_size: usize },

    /// Operation requires a started game.
    #[error("game has not been started")]
    GameNotStarted,

    /// The game can only be started once.
    #[error("game has already been started")]
    AlreadyStarted,

    /// Operation requires a game still in progress.
    #[error("game is already over")]
    GameAlreadyOver,
}

impl GameError {
    /// Shorthand for an `InvalidCard` with a formatted reason.
    pub fn invalid_card(reason: impl Into<String>) -> Self {
        GameError::InvalidCard {
            reason: reason.into(),
        }
    }
}

/// Why a placement was rejected.
///
/// The three placement preconditions fail distinctly so a controller can
/// explain the rejection to a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The target cell holds neither pawns nor a card.
    #[error("target cell is empty")]
    EmptyCell,

    /// The target cell is not owned by the current player.
    #[error("target cell is not owned by the current player")]
    NotOwned,

    /// The target cell has fewer pawns than the card costs.
    #[error("cell has {have} pawns but the card costs {need}")]
    InsufficientPawns { have: u8, need: u8 },
}
