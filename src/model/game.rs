//! The game model: board, players, turn machine, and the influence
//! propagation rule that defines the game.
//!
//! All state lives inside a [`GameModel`] instance; there is no global
//! state. Every mutating operation validates completely before touching
//! anything, so a rejected move leaves the model exactly as it was.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::view::BoardView;
use crate::cards::{CardLike, Influence};
use crate::core::{Cell, GameError, GameRng, PlacementError, Player, PlayerColor};
use crate::strategy::Move;

/// Pawn count a cell is capped at when reinforced.
pub const MAX_PAWNS: u8 = 3;

/// One entry in the move history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who acted.
    pub player: PlayerColor,
    /// What they did.
    pub action: TurnAction,
}

/// A recorded turn: either a placement or a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    /// A card placement.
    Place(Move),
    /// A passed turn.
    Pass,
}

/// A two-player territory-control game in progress.
///
/// Generic over any [`CardLike`] type; [`Card`](crate::cards::Card) is
/// the stock implementation. Red owns the left column at setup and
/// moves first; turns alternate strictly on every placement or pass.
#[derive(Debug)]
pub struct GameModel<C> {
    board: Vec<Vec<Cell<C>>>,
    red: Player<C>,
    blue: Player<C>,
    current: PlayerColor,
    started: bool,
    game_over: bool,
    consecutive_passes: u8,
    history: Vector<TurnRecord>,
}

impl<C: CardLike> GameModel<C> {
    /// Create a game with the given board size and per-player decks
    /// (front = first drawn).
    ///
    /// The leftmost column starts owned by Red with one pawn per cell,
    /// the rightmost by Blue; interior cells start empty.
    pub fn new(
        rows: usize,
        cols: usize,
        red_deck: Vec<C>,
        blue_deck: Vec<C>,
    ) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidBoardSize { rows, cols });
        }

        let mut board: Vec<Vec<Cell<C>>> = (0..rows)
            .map(|_| (0..cols).map(|_| Cell::new()).collect())
            .collect();
        for row in board.iter_mut() {
            row[0].set_pawn_count(1);
            row[0].set_owner(Some(PlayerColor::Red));
            row[cols - 1].set_pawn_count(1);
            row[cols - 1].set_owner(Some(PlayerColor::Blue));
        }

        Ok(Self {
            board,
            red: Player::new(PlayerColor::Red, red_deck),
            blue: Player::new(PlayerColor::Blue, blue_deck),
            current: PlayerColor::Red,
            started: false,
            game_over: false,
            consecutive_passes: 0,
            history: Vector::new(),
        })
    }

    /// Create a game where both players draw from the same card list,
    /// each deck independently shuffled with a seeded RNG.
    pub fn with_shuffled_decks(
        rows: usize,
        cols: usize,
        cards: Vec<C>,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut rng = GameRng::new(seed);
        let mut red_deck = cards.clone();
        rng.shuffle(&mut red_deck);
        let mut blue_deck = cards;
        rng.shuffle(&mut blue_deck);
        Self::new(rows, cols, red_deck, blue_deck)
    }

    /// Deal each player up to `hand_size` cards and begin play.
    ///
    /// A deck shorter than `hand_size` deals what it has; starting twice
    /// is a lifecycle error.
    pub fn start(&mut self, hand_size: usize) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        self.red.draw_up_to(hand_size);
        self.blue.draw_up_to(hand_size);
        self.started = true;
        Ok(())
    }

    /// Place the current player's hand card `card_index` at (row, col).
    ///
    /// Preconditions, checked in order before any mutation: the game is
    /// started and not over, coordinates are in bounds, the hand index
    /// is in range, the target cell is non-empty and owned by the
    /// current player, and its pawn count is at least the card's cost.
    ///
    /// On success the card is installed, the cell's pawns drop to zero
    /// (cost is a threshold, not a deduction), influence propagates, a
    /// replacement card is drawn if the deck allows, and the turn
    /// passes to the opponent.
    pub fn place_card(&mut self, row: usize, col: usize, card_index: usize) -> Result<(), GameError> {
        self.ensure_active()?;

        let (rows, cols) = (self.rows(), self.cols());
        if row >= rows || col >= cols {
            return Err(GameError::InvalidCoordinates {
                row,
                col,
                rows,
                cols,
            });
        }

        let hand = self.player(self.current).hand();
        if card_index >= hand.len() {
            return Err(GameError::InvalidHandIndex {
                index: card_index,
                hand_size: hand.len(),
            });
        }
        let cost = hand[card_index].cost();

        let cell = &self.board[row][col];
        if cell.is_empty() {
            return Err(PlacementError::EmptyCell.into());
        }
        if cell.owner() != Some(self.current) {
            return Err(PlacementError::NotOwned.into());
        }
        if cell.pawn_count() < cost {
            return Err(PlacementError::InsufficientPawns {
                have: cell.pawn_count(),
                need: cost,
            }
            .into());
        }

        // Fully validated; apply as one atomic step.
        let card = self
            .player_mut(self.current)
            .play_card(card_index)
            .expect("index validated above");
        let influence = *card.influence();

        let cell = &mut self.board[row][col];
        cell.set_card(card);
        cell.set_pawn_count(0);

        self.apply_influence(row, col, &influence);
        self.player_mut(self.current).draw();

        self.consecutive_passes = 0;
        self.history.push_back(TurnRecord {
            player: self.current,
            action: TurnAction::Place(Move::new(card_index, row, col)),
        });
        self.next_turn();
        Ok(())
    }

    /// Pass the turn. Two consecutive passes end the game.
    pub fn pass(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;

        self.consecutive_passes += 1;
        if self.consecutive_passes >= 2 {
            self.game_over = true;
        }
        self.history.push_back(TurnRecord {
            player: self.current,
            action: TurnAction::Pass,
        });
        self.next_turn();
        Ok(())
    }

    /// Force the game-over flag. Low-level hook for controller variants
    /// with their own end conditions.
    pub fn set_game_over(&mut self, over: bool) {
        self.game_over = over;
    }

    /// The move history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Cards left in a player's deck.
    #[must_use]
    pub fn deck_size(&self, player: PlayerColor) -> usize {
        self.player(player).deck_size()
    }

    /// Whether `start` has been called.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if !self.started {
            return Err(GameError::GameNotStarted);
        }
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        Ok(())
    }

    fn player(&self, color: PlayerColor) -> &Player<C> {
        match color {
            PlayerColor::Red => &self.red,
            PlayerColor::Blue => &self.blue,
        }
    }

    fn player_mut(&mut self, color: PlayerColor) -> &mut Player<C> {
        match color {
            PlayerColor::Red => &mut self.red,
            PlayerColor::Blue => &mut self.blue,
        }
    }

    fn next_turn(&mut self) {
        self.current = self.current.opponent();
    }

    /// The capture/erosion rule. For each marked offset landing in
    /// bounds:
    /// - empty target: current player gains it with one pawn;
    /// - own pawns: reinforced by one, capped at [`MAX_PAWNS`];
    /// - enemy pawns: a single pawn is cancelled outright (cell becomes
    ///   empty and ownerless), multiple pawns erode by one and the cell
    ///   changes hands;
    /// - card cells are immune.
    fn apply_influence(&mut self, row: usize, col: usize, influence: &Influence) {
        for (dr, dc) in influence.offsets() {
            let r = row as i64 + dr as i64;
            let c = col as i64 + dc as i64;
            if r < 0 || c < 0 || r as usize >= self.rows() || c as usize >= self.cols() {
                continue;
            }
            let cell = &mut self.board[r as usize][c as usize];

            if cell.is_empty() {
                cell.set_pawn_count(1);
                cell.set_owner(Some(self.current));
            } else if cell.card().is_none() {
                if cell.owner() == Some(self.current) {
                    cell.set_pawn_count((cell.pawn_count() + 1).min(MAX_PAWNS));
                } else {
                    let enemy_pawns = cell.pawn_count();
                    if enemy_pawns == 1 {
                        // One pawn cancels out entirely; set_pawn_count
                        // clears the owner with it.
                        cell.set_pawn_count(0);
                    } else {
                        cell.set_pawn_count(enemy_pawns - 1);
                        cell.set_owner(Some(self.current));
                    }
                }
            }
        }
    }
}

impl<C: CardLike> BoardView<C> for GameModel<C> {
    fn rows(&self) -> usize {
        self.board.len()
    }

    fn cols(&self) -> usize {
        self.board[0].len()
    }

    fn cell(&self, row: usize, col: usize) -> Result<&Cell<C>, GameError> {
        if row >= self.rows() || col >= self.cols() {
            return Err(GameError::InvalidCoordinates {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(&self.board[row][col])
    }

    fn cell_owner(&self, row: usize, col: usize) -> Option<PlayerColor> {
        self.cell(row, col).ok().and_then(Cell::owner)
    }

    fn row_score(&self, player: PlayerColor, row: usize) -> u32 {
        let Some(cells) = self.board.get(row) else {
            return 0;
        };
        cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .filter_map(Cell::card)
            .map(CardLike::value)
            .sum()
    }

    fn score(&self, player: PlayerColor) -> u32 {
        (0..self.rows()).map(|row| self.row_score(player, row)).sum()
    }

    fn current_player(&self) -> PlayerColor {
        self.current
    }

    fn hand(&self, player: PlayerColor) -> &[C] {
        self.player(player).hand()
    }

    fn is_legal(&self, player: PlayerColor, mv: Move) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        if mv.row >= self.rows() || mv.col >= self.cols() {
            return false;
        }
        let hand = self.player(player).hand();
        if mv.card_index >= hand.len() {
            return false;
        }
        let cell = &self.board[mv.row][mv.col];
        !cell.is_empty()
            && cell.owner() == Some(player)
            && cell.pawn_count() >= hand[mv.card_index].cost()
    }

    fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn winner(&self) -> Option<PlayerColor> {
        if !self.game_over {
            return None;
        }
        let red = self.score(PlayerColor::Red);
        let blue = self.score(PlayerColor::Blue);
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Some(PlayerColor::Red),
            std::cmp::Ordering::Less => Some(PlayerColor::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }
}
