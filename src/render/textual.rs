//! Plain-text board rendering.

use std::fmt;

use crate::cards::CardLike;
use crate::core::PlayerColor;
use crate::model::BoardView;

/// Renders a board one row per line as
/// `red_row_score cells blue_row_score`.
///
/// Cells print as `_` (empty), the pawn count (`1`-`3`), or `R`/`B`
/// for a card's owner. The view borrows the game read-only, so it can
/// be held alongside strategies consulting the same board.
pub struct TextualView<'a, C: CardLike> {
    view: &'a dyn BoardView<C>,
}

impl<'a, C: CardLike> TextualView<'a, C> {
    /// Wrap a board for rendering.
    #[must_use]
    pub fn new(view: &'a dyn BoardView<C>) -> Self {
        Self { view }
    }

    fn cell_char(&self, row: usize, col: usize) -> char {
        let Ok(cell) = self.view.cell(row, col) else {
            return '_';
        };
        if cell.is_empty() {
            return '_';
        }
        if cell.card().is_some() {
            return match cell.owner() {
                Some(PlayerColor::Red) => 'R',
                Some(PlayerColor::Blue) => 'B',
                None => '_',
            };
        }
        match cell.owner() {
            Some(_) => char::from_digit(u32::from(cell.pawn_count()), 10).unwrap_or('_'),
            None => '_',
        }
    }
}

impl<C: CardLike> fmt::Display for TextualView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.view.rows() {
            write!(f, "{} ", self.view.row_score(PlayerColor::Red, row))?;
            for col in 0..self.view.cols() {
                write!(f, "{}", self.cell_char(row, col))?;
            }
            writeln!(f, " {}", self.view.row_score(PlayerColor::Blue, row))?;
        }
        Ok(())
    }
}
