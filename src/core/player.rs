//! Player identity and per-player card state.
//!
//! ## PlayerColor
//!
//! The two sides of a game. Red always moves first.
//!
//! ## Player
//!
//! A player's ordered hand (front = next available, insertion order =
//! play order) and remaining deck (front = next draw). Cards only ever
//! move deck -> hand -> board; nothing is destroyed mid-game.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::rng::GameRng;

/// Player identity. Red starts on the left column and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Red => write!(f, "Red"),
            PlayerColor::Blue => write!(f, "Blue"),
        }
    }
}

/// One side of the game: identity, hand, and remaining deck.
#[derive(Clone, Debug)]
pub struct Player<C> {
    color: PlayerColor,
    hand: Vec<C>,
    deck: VecDeque<C>,
}

impl<C> Player<C> {
    /// Create a player with the given deck, in draw order.
    #[must_use]
    pub fn new(color: PlayerColor, deck: Vec<C>) -> Self {
        Self {
            color,
            hand: Vec::new(),
            deck: deck.into(),
        }
    }

    /// Create a player whose deck is shuffled with a deterministic RNG.
    #[must_use]
    pub fn with_shuffled_deck(color: PlayerColor, mut deck: Vec<C>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut deck);
        Self::new(color, deck)
    }

    /// This player's color.
    #[must_use]
    pub fn color(&self) -> PlayerColor {
        self.color
    }

    /// The hand, in play order (index 0 = next available).
    #[must_use]
    pub fn hand(&self) -> &[C] {
        &self.hand
    }

    /// Number of cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Remove and return the hand card at `index`.
    pub fn play_card(&mut self, index: usize) -> Result<C, GameError> {
        if index >= self.hand.len() {
            return Err(GameError::InvalidHandIndex {
                index,
                hand_size: self.hand.len(),
            });
        }
        Ok(self.hand.remove(index))
    }

    /// Draw the front deck card into the hand.
    ///
    /// Returns false if the deck is empty; an empty deck is not an error,
    /// the player simply stops drawing.
    pub fn draw(&mut self) -> bool {
        match self.deck.pop_front() {
            Some(card) => {
                self.hand.push(card);
                true
            }
            None => false,
        }
    }

    /// Draw up to `count` cards, stopping early if the deck runs out.
    ///
    /// Returns the number actually drawn.
    pub fn draw_up_to(&mut self, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count && self.draw() {
            drawn += 1;
        }
        drawn
    }
}
