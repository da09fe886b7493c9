//! Card values and the capability trait the engine is generic over.
//!
//! `Card` is the concrete type games actually play with; the model,
//! cells, and strategies only require `CardLike`, so a variant with a
//! richer card type plugs in without touching the engine.

use serde::{Deserialize, Serialize};

use super::influence::Influence;
use crate::core::GameError;

/// Capability surface the engine needs from a card.
pub trait CardLike: Clone {
    /// Minimum pawn count required on the target cell.
    fn cost(&self) -> u8;

    /// Points the card contributes to its owner's row score.
    fn value(&self) -> u32;

    /// The 5x5 influence pattern applied on placement.
    fn influence(&self) -> &Influence;
}

/// An immutable card: name, cost, value, and influence pattern.
///
/// Validated once at construction: cost in [1, 3], value >= 1. The
/// influence shape is validated wherever it is built from untrusted
/// input ([`Influence::from_rows`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    name: String,
    cost: u8,
    value: u32,
    influence: Influence,
}

impl Card {
    /// Lowest legal cost.
    pub const MIN_COST: u8 = 1;
    /// Highest legal cost.
    pub const MAX_COST: u8 = 3;

    /// Create a validated card.
    pub fn new(
        name: impl Into<String>,
        cost: u8,
        value: u32,
        influence: Influence,
    ) -> Result<Self, GameError> {
        let name = name.into();
        if !(Self::MIN_COST..=Self::MAX_COST).contains(&cost) {
            return Err(GameError::invalid_card(format!(
                "cost {} outside [{}, {}]",
                cost,
                Self::MIN_COST,
                Self::MAX_COST
            )));
        }
        if value == 0 {
            return Err(GameError::invalid_card("value must be at least 1"));
        }
        Ok(Self {
            name,
            cost,
            value,
            influence,
        })
    }

    /// The card's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl CardLike for Card {
    fn cost(&self) -> u8 {
        self.cost
    }

    fn value(&self) -> u32 {
        self.value
    }

    fn influence(&self) -> &Influence {
        &self.influence
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (cost {}, value {})", self.name, self.cost, self.value)
    }
}
