//! One grid position on the board.
//!
//! A cell holds pawns, or a card, or nothing, plus an optional owner.
//!
//! Invariant: if `pawns == 0` and no card is present, the cell is empty
//! and ownerless. A cell holding a card may have zero pawns and still
//! record its owner, since placing a card consumes the pawns but keeps
//! ownership. `set_pawn_count` enforces this by clearing the owner only
//! when the count drops to zero with no card present; `set_card` always
//! marks the cell non-empty.

use serde::{Deserialize, Serialize};

use super::player::PlayerColor;

/// A mutable board cell.
///
/// `set_owner` is deliberately independent of pawn/card state: normal
/// play never produces an owned cell with zero pawns and no card, but
/// the low-level mutator permits it (see the degenerate-state test).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell<C> {
    empty: bool,
    pawns: u8,
    card: Option<C>,
    owner: Option<PlayerColor>,
}

impl<C> Default for Cell<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Cell<C> {
    /// A fresh, empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            empty: true,
            pawns: 0,
            card: None,
            owner: None,
        }
    }

    /// Whether the cell holds neither pawns nor a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Number of pawns on the cell.
    #[must_use]
    pub fn pawn_count(&self) -> u8 {
        self.pawns
    }

    /// The card placed on this cell, if any.
    #[must_use]
    pub fn card(&self) -> Option<&C> {
        self.card.as_ref()
    }

    /// The player owning this cell, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerColor> {
        self.owner
    }

    /// Set the pawn count.
    ///
    /// Dropping to zero with no card present empties the cell and clears
    /// its owner. Any positive count marks the cell non-empty; ownership
    /// is not auto-assigned, callers set it separately.
    pub fn set_pawn_count(&mut self, pawns: u8) {
        self.pawns = pawns;
        if pawns == 0 && self.card.is_none() {
            self.empty = true;
            self.owner = None;
        } else {
            self.empty = false;
        }
    }

    /// Place a card on the cell, marking it non-empty.
    ///
    /// Pawn count and owner are untouched; the model zeroes pawns
    /// itself when it installs a card.
    pub fn set_card(&mut self, card: C) {
        self.card = Some(card);
        self.empty = false;
    }

    /// Set or clear the owner, independent of pawn/card state.
    pub fn set_owner(&mut self, owner: Option<PlayerColor>) {
        self.owner = owner;
    }
}
