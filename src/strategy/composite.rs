//! Strategy composition: later strategies break earlier ties.

use rustc_hash::FxHashSet;

use super::{Move, Strategy};
use crate::cards::CardLike;
use crate::core::PlayerColor;
use crate::model::BoardView;

/// Chains strategies: the first proposes candidates, each subsequent
/// one narrows them by intersection.
///
/// If a tie-breaker's own candidates are disjoint from the working set,
/// the working set is kept unchanged, so the composite never throws
/// away all candidates just because a downstream strategy found
/// nothing.
pub struct Composite<C> {
    strategies: Vec<Box<dyn Strategy<C>>>,
}

impl<C: CardLike> Composite<C> {
    /// Create a composite from strategies in tie-breaking order.
    ///
    /// Panics when given no strategies; a composite of nothing has no
    /// meaning.
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn Strategy<C>>>) -> Self {
        assert!(
            !strategies.is_empty(),
            "Composite requires at least one strategy"
        );
        Self { strategies }
    }
}

impl<C: CardLike> Strategy<C> for Composite<C> {
    fn choose_moves(&self, view: &dyn BoardView<C>, player: PlayerColor) -> Vec<Move> {
        let mut candidates = self.strategies[0].choose_moves(view, player);

        for tie_breaker in &self.strategies[1..] {
            if candidates.len() <= 1 {
                break;
            }
            let keep: FxHashSet<Move> = tie_breaker
                .choose_moves(view, player)
                .into_iter()
                .collect();
            let narrowed: Vec<Move> = candidates
                .iter()
                .copied()
                .filter(|mv| keep.contains(mv))
                .collect();
            if !narrowed.is_empty() {
                candidates = narrowed;
            }
        }

        candidates
    }
}
