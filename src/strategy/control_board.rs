//! Control-maximizing strategy.

use super::{legal_moves_in_order, Move, Strategy};
use crate::cards::CardLike;
use crate::core::PlayerColor;
use crate::model::BoardView;

/// Chooses the move(s) projecting the most cells under the player's
/// control afterward.
///
/// The projection is cells already owned plus strictly-empty cells the
/// card's influence would claim. Enemy cells that would merely be
/// neutralized do not count (the player does not end up owning them),
/// and card cells are immune to influence, so neither counts as a gain.
/// Ties are kept in enumeration order: lowest hand index, then
/// uppermost-leftmost cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlBoard;

impl ControlBoard {
    fn owned_cells<C: CardLike>(view: &dyn BoardView<C>, player: PlayerColor) -> usize {
        let mut count = 0;
        for row in 0..view.rows() {
            for col in 0..view.cols() {
                if view.cell_owner(row, col) == Some(player) {
                    let cell = view.cell(row, col).expect("in bounds");
                    if !cell.is_empty() {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    fn projected_control<C: CardLike>(
        view: &dyn BoardView<C>,
        player: PlayerColor,
        owned: usize,
        mv: Move,
    ) -> usize {
        let card = &view.hand(player)[mv.card_index];
        let mut gains = 0;
        for (dr, dc) in card.influence().offsets() {
            let r = mv.row as i64 + dr as i64;
            let c = mv.col as i64 + dc as i64;
            if r < 0 || c < 0 || r as usize >= view.rows() || c as usize >= view.cols() {
                continue;
            }
            let cell = view.cell(r as usize, c as usize).expect("in bounds");
            if cell.is_empty() {
                gains += 1;
            }
        }
        owned + gains
    }
}

impl<C: CardLike> Strategy<C> for ControlBoard {
    fn choose_moves(&self, view: &dyn BoardView<C>, player: PlayerColor) -> Vec<Move> {
        let owned = Self::owned_cells(view, player);
        let mut best_moves = Vec::new();
        let mut best_control = None;

        for mv in legal_moves_in_order(view, player) {
            let control = Self::projected_control(view, player, owned, mv);
            match best_control {
                Some(best) if control < best => {}
                Some(best) if control == best => best_moves.push(mv),
                _ => {
                    best_control = Some(control);
                    best_moves.clear();
                    best_moves.push(mv);
                }
            }
        }
        best_moves
    }
}
