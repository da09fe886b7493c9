//! Row-score-maximizing strategy.

use super::{Move, Strategy};
use crate::cards::CardLike;
use crate::core::PlayerColor;
use crate::model::BoardView;

/// Tries to win rows, top to bottom.
///
/// Rows where the player already leads are skipped. In the first row
/// where the player's score is at most the opponent's, the strategy
/// searches hand cards then columns for a placement whose resulting row
/// score (`current + card value`) beats the opponent's current row
/// score, returns the first such move, and stops. Empty when no row can
/// be won this turn.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaximizeRowScore;

impl MaximizeRowScore {
    fn row_winning_move<C: CardLike>(
        view: &dyn BoardView<C>,
        player: PlayerColor,
        row: usize,
        opponent_score: u32,
    ) -> Option<Move> {
        let current = view.row_score(player, row);
        for (card_index, card) in view.hand(player).iter().enumerate() {
            for col in 0..view.cols() {
                let mv = Move::new(card_index, row, col);
                if view.is_legal(player, mv) && current + card.value() > opponent_score {
                    return Some(mv);
                }
            }
        }
        None
    }
}

impl<C: CardLike> Strategy<C> for MaximizeRowScore {
    fn choose_moves(&self, view: &dyn BoardView<C>, player: PlayerColor) -> Vec<Move> {
        let opponent = player.opponent();

        for row in 0..view.rows() {
            let player_score = view.row_score(player, row);
            let opponent_score = view.row_score(opponent, row);
            if player_score > opponent_score {
                continue;
            }
            if let Some(mv) = Self::row_winning_move(view, player, row, opponent_score) {
                return vec![mv];
            }
        }
        Vec::new()
    }
}
