//! Opponent-aware minimax strategy.

use super::{legal_moves_in_order, Move, Strategy};
use crate::cards::CardLike;
use crate::core::PlayerColor;
use crate::model::BoardView;

/// Value bonus for moves the assumed opponent cannot answer.
const WIN_BONUS: i64 = 1000;

/// Maximizes the worst-case score differential against an assumed
/// opponent strategy.
///
/// Each legal move is valued as the minimum, over the opponent
/// strategy's candidate responses, of (player's post-move score minus
/// opponent's post-response score). A move the opponent has no answer
/// to is worth the player's post-move score plus a large win bonus.
/// All moves tied for the best value are returned in enumeration order.
pub struct MiniMax<C> {
    opponent_strategy: Box<dyn Strategy<C>>,
}

impl<C: CardLike> MiniMax<C> {
    /// Create a minimax strategy assuming the opponent plays
    /// `opponent_strategy`.
    #[must_use]
    pub fn new(opponent_strategy: Box<dyn Strategy<C>>) -> Self {
        Self { opponent_strategy }
    }

    fn evaluate(
        &self,
        view: &dyn BoardView<C>,
        player: PlayerColor,
        opponent: PlayerColor,
        mv: Move,
    ) -> i64 {
        let our_card_value = view.hand(player)[mv.card_index].value() as i64;
        let our_score_after = view.score(player) as i64 + our_card_value;

        let responses = self.opponent_strategy.choose_moves(view, opponent);
        if responses.is_empty() {
            return our_score_after + WIN_BONUS;
        }

        let opponent_score = view.score(opponent) as i64;
        responses
            .iter()
            .map(|resp| {
                let resp_value = view.hand(opponent)[resp.card_index].value() as i64;
                our_score_after - (opponent_score + resp_value)
            })
            .min()
            .expect("responses is non-empty")
    }
}

impl<C: CardLike> Strategy<C> for MiniMax<C> {
    fn choose_moves(&self, view: &dyn BoardView<C>, player: PlayerColor) -> Vec<Move> {
        let opponent = player.opponent();
        let mut best_moves = Vec::new();
        let mut best_value = i64::MIN;

        for mv in legal_moves_in_order(view, player) {
            let value = self.evaluate(view, player, opponent, mv);
            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_value {
                best_moves.push(mv);
            }
        }
        best_moves
    }
}
