//! Deterministic move-selection strategies.
//!
//! A strategy is a pure function over a read-only [`BoardView`]: it
//! never mutates state, and it returns every move tied for best under
//! its own objective, in enumeration order (hand index outer, row-major
//! board order inner). An empty list means the strategy found nothing
//! satisfying its objective; it never forces an arbitrary move.
//!
//! Five policies are provided:
//! - [`FillFirst`]: first legal move found
//! - [`ControlBoard`]: maximize projected cell control
//! - [`MaximizeRowScore`]: win the topmost losing-or-tied row
//! - [`MiniMax`]: worst-case score differential against an assumed
//!   opponent strategy
//! - [`Composite`]: chain of strategies, later ones breaking ties

pub mod composite;
pub mod control_board;
pub mod fill_first;
pub mod minimax;
pub mod row_score;

use serde::{Deserialize, Serialize};

use crate::cards::CardLike;
use crate::core::PlayerColor;
use crate::model::BoardView;

pub use composite::Composite;
pub use control_board::ControlBoard;
pub use fill_first::FillFirst;
pub use minimax::MiniMax;
pub use row_score::MaximizeRowScore;

/// A candidate placement: which hand card goes where.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index into the acting player's hand.
    pub card_index: usize,
    /// Target row.
    pub row: usize,
    /// Target column.
    pub col: usize,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(card_index: usize, row: usize, col: usize) -> Self {
        Self {
            card_index,
            row,
            col,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "card {} at ({}, {})",
            self.card_index, self.row, self.col
        )
    }
}

/// A move-selection policy.
///
/// Implementations receive only the read-only view, so a "pure"
/// strategy cannot accidentally mutate the game it is analyzing.
pub trait Strategy<C: CardLike> {
    /// All moves tied for best under this strategy's objective, in
    /// enumeration order. Empty when no move satisfies the objective.
    fn choose_moves(&self, view: &dyn BoardView<C>, player: PlayerColor) -> Vec<Move>;
}

/// Enumerate legal moves in canonical order: hand index outer, then
/// row-major over the board.
pub(crate) fn legal_moves_in_order<C: CardLike>(
    view: &dyn BoardView<C>,
    player: PlayerColor,
) -> Vec<Move> {
    let mut moves = Vec::new();
    for card_index in 0..view.hand(player).len() {
        for row in 0..view.rows() {
            for col in 0..view.cols() {
                let mv = Move::new(card_index, row, col);
                if view.is_legal(player, mv) {
                    moves.push(mv);
                }
            }
        }
    }
    moves
}
