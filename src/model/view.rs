//! Read-only accessor surface over a game in progress.
//!
//! Strategies and renderers consume this trait instead of the mutable
//! [`GameModel`](super::GameModel), so a "pure" consumer can never
//! mutate the game it is looking at. The trait is object-safe; strategy
//! implementations take `&dyn BoardView<C>`.

use crate::cards::CardLike;
use crate::core::{Cell, GameError, PlayerColor};
use crate::strategy::Move;

/// Read operations exposed to strategies and the rendering layer.
pub trait BoardView<C: CardLike> {
    /// Number of board rows.
    fn rows(&self) -> usize;

    /// Number of board columns.
    fn cols(&self) -> usize;

    /// Cell lookup; out-of-bounds coordinates are `InvalidCoordinates`.
    fn cell(&self, row: usize, col: usize) -> Result<&Cell<C>, GameError>;

    /// Owner of the cell at (row, col), or `None` when out of bounds or
    /// unowned.
    fn cell_owner(&self, row: usize, col: usize) -> Option<PlayerColor>;

    /// Sum of card values a player owns in one row.
    fn row_score(&self, player: PlayerColor, row: usize) -> u32;

    /// Sum of a player's row scores across the board.
    fn score(&self, player: PlayerColor) -> u32;

    /// Whose turn it is.
    fn current_player(&self) -> PlayerColor;

    /// A player's hand, in play order.
    fn hand(&self, player: PlayerColor) -> &[C];

    /// Whether `player` could legally make `mv` right now.
    ///
    /// Legality is player-relative (the cell must be owned by `player`,
    /// the card index must be in `player`'s hand) so that opponent-aware
    /// strategies can probe responses. Always false before the game
    /// starts or after it ends.
    fn is_legal(&self, player: PlayerColor, mv: Move) -> bool;

    /// Whether the game has ended.
    fn is_game_over(&self) -> bool;

    /// The winner, defined only once the game is over; `None` on a tie
    /// or while the game is still running.
    fn winner(&self) -> Option<PlayerColor>;
}
