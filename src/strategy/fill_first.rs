//! First-fit strategy.

use super::{legal_moves_in_order, Move, Strategy};
use crate::cards::CardLike;
use crate::core::PlayerColor;
use crate::model::BoardView;

/// Returns the first legal move found: hand cards in hand order, board
/// cells top-to-bottom, left-to-right. Singleton list, or empty when the
/// player has no legal move at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct FillFirst;

impl<C: CardLike> Strategy<C> for FillFirst {
    fn choose_moves(&self, view: &dyn BoardView<C>, player: PlayerColor) -> Vec<Move> {
        let mut moves = legal_moves_in_order(view, player);
        moves.truncate(1);
        moves
    }
}
