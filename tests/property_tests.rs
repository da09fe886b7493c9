//! Property tests for the influence rule and strategy contracts.
//!
//! Universal claims the engine makes, checked across generated board
//! sizes, pawn counts, and game prefixes.

use proptest::prelude::*;

use sanguine::{
    BoardView, Card, Composite, FillFirst, GameModel, Influence, MaximizeRowScore, Move,
    PlayerColor, Strategy, MAX_PAWNS,
};

fn card(name: &str, cost: u8, value: u32, offsets: &[(i32, i32)]) -> Card {
    Card::new(name, cost, value, Influence::from_offsets(offsets).unwrap()).unwrap()
}

proptest! {
    /// Influencing a strictly empty cell always leaves exactly one pawn
    /// owned by the influencing player.
    #[test]
    fn prop_influence_claims_empty_cell(rows in 1usize..=5, cols in 4usize..=7, row in 0usize..5) {
        prop_assume!(row < rows);

        let red_deck = vec![card("reach", 1, 1, &[(0, 1)])];
        let mut model = GameModel::new(rows, cols, red_deck, vec![]).unwrap();
        model.start(1).unwrap();

        model.place_card(row, 0, 0).unwrap();

        let gained = model.cell(row, 1).unwrap();
        prop_assert!(!gained.is_empty());
        prop_assert_eq!(gained.pawn_count(), 1);
        prop_assert_eq!(gained.owner(), Some(PlayerColor::Red));
    }

    /// Influencing an enemy cell with p pawns: one pawn cancels the
    /// cell to empty and ownerless, more than one erodes to p - 1 and
    /// flips ownership.
    #[test]
    fn prop_influence_on_enemy_cell(pawns in 1u8..=3) {
        let red_deck = vec![
            card("advance", 1, 1, &[(0, 2)]),
            card("filler", 1, 1, &[]),
            card("raid", 1, 1, &[(0, 2)]),
        ];
        // Both Blue cards aim extra pawns at (2, 4)
        let blue_deck = vec![
            card("dig0", 1, 1, &[(2, 0)]),
            card("dig1", 1, 1, &[(1, 0)]),
        ];
        let mut model = GameModel::new(3, 5, red_deck, blue_deck).unwrap();
        model.start(3).unwrap();

        model.place_card(2, 0, 0).unwrap(); // Red claims (2, 2)
        if pawns >= 2 {
            model.place_card(0, 4, 0).unwrap(); // (2, 4) -> 2
        } else {
            model.pass().unwrap();
        }
        model.place_card(0, 0, 0).unwrap(); // Red filler
        if pawns >= 3 {
            model.place_card(1, 4, 0).unwrap(); // (2, 4) -> 3
        } else {
            model.pass().unwrap();
        }
        prop_assert_eq!(model.cell(2, 4).unwrap().pawn_count(), pawns);

        model.place_card(2, 2, 0).unwrap(); // Red's raid hits (2, 4)

        let hit = model.cell(2, 4).unwrap();
        if pawns == 1 {
            prop_assert!(hit.is_empty());
            prop_assert_eq!(hit.pawn_count(), 0);
            prop_assert_eq!(hit.owner(), None);
        } else {
            prop_assert_eq!(hit.pawn_count(), pawns - 1);
            prop_assert_eq!(hit.owner(), Some(PlayerColor::Red));
        }
    }

    /// Placing a card zeroes the target cell's pawns no matter the cost.
    #[test]
    fn prop_placement_zeroes_pawns(cost in 1u8..=3) {
        // Boost cards stack pawns onto (2, 0) until it can pay `cost`
        let red_deck = vec![
            card("boost0", 1, 1, &[(2, 0)]),
            card("boost1", 1, 1, &[(1, 0)]),
            card("payoff", cost, 1, &[]),
        ];
        let mut model = GameModel::new(3, 5, red_deck, vec![]).unwrap();
        model.start(3).unwrap();

        if cost >= 2 {
            model.place_card(0, 0, 0).unwrap(); // (2, 0) -> 2
            model.pass().unwrap();
        }
        if cost >= 3 {
            model.place_card(1, 0, 0).unwrap(); // (2, 0) -> 3
            model.pass().unwrap();
        }
        prop_assert_eq!(model.cell(2, 0).unwrap().pawn_count(), cost);

        // Skip down to the payoff card, wherever it sits in hand
        let payoff = model
            .hand(PlayerColor::Red)
            .iter()
            .position(|c| c.name() == "payoff")
            .unwrap();
        model.place_card(2, 0, payoff).unwrap();

        let cell = model.cell(2, 0).unwrap();
        prop_assert_eq!(cell.pawn_count(), 0);
        prop_assert!(cell.card().is_some());
    }

    /// MaximizeRowScore never proposes a move in a row the player is
    /// already winning, from any reachable position.
    #[test]
    fn prop_row_score_skips_winning_rows(seed in 0u64..1000, prefix in 0usize..8) {
        let deck: Vec<Card> = (0..6u32)
            .map(|i| card(&format!("c{}", i), 1, i + 1, &[(0, 1)]))
            .collect();
        let mut model = GameModel::with_shuffled_decks(3, 5, deck, seed).unwrap();
        model.start(3).unwrap();

        // Drive a game prefix with FillFirst to reach a varied state
        for _ in 0..prefix {
            if model.is_game_over() {
                break;
            }
            let player = model.current_player();
            let strategy: &dyn Strategy<Card> = &FillFirst;
            match strategy.choose_moves(&model, player).first() {
                Some(mv) => model.place_card(mv.row, mv.col, mv.card_index).unwrap(),
                None => model.pass().unwrap(),
            }
        }
        prop_assume!(!model.is_game_over());

        let player = model.current_player();
        let strategy: &dyn Strategy<Card> = &MaximizeRowScore;
        for mv in strategy.choose_moves(&model, player) {
            prop_assert!(
                model.row_score(player, mv.row) <= model.row_score(player.opponent(), mv.row)
            );
        }
    }

    /// When a composite's tie-breaker shares no candidates with the
    /// primary, the primary's candidates come back untouched.
    #[test]
    fn prop_composite_disjoint_keeps_primary(a_rows in prop::collection::vec(0usize..5, 1..6),
                                             b_rows in prop::collection::vec(0usize..5, 1..6)) {
        // Columns 0 and 1 keep the two candidate sets disjoint
        let a_moves: Vec<Move> = a_rows.iter().map(|&r| Move::new(0, r, 0)).collect();
        let b_moves: Vec<Move> = b_rows.iter().map(|&r| Move::new(0, r, 1)).collect();

        struct Fixed(Vec<Move>);
        impl Strategy<Card> for Fixed {
            fn choose_moves(&self, _: &dyn BoardView<Card>, _: PlayerColor) -> Vec<Move> {
                self.0.clone()
            }
        }

        let composite = Composite::new(vec![
            Box::new(Fixed(a_moves.clone())) as Box<dyn Strategy<Card>>,
            Box::new(Fixed(b_moves)),
        ]);
        let model: GameModel<Card> = GameModel::new(3, 5, vec![], vec![]).unwrap();

        prop_assert_eq!(composite.choose_moves(&model, PlayerColor::Red), a_moves);
    }
}

/// Reinforcing an already-owned cell never pushes it past the pawn cap,
/// driven entirely through legal placements.
#[test]
fn test_reinforcement_caps_through_play() {
    let red_deck = vec![
        // Boosts (2, 0) and claims (2, 1)
        card("twin", 1, 1, &[(1, 0), (1, 1)]),
        // Played from (2, 1), boosts (2, 0) again
        card("side", 1, 1, &[(0, -1)]),
        // Fourth pawn would exceed the cap
        card("over", 1, 1, &[(2, 0)]),
    ];
    let mut model = GameModel::new(3, 5, red_deck, vec![]).unwrap();
    model.start(3).unwrap();

    model.place_card(1, 0, 0).unwrap(); // (2, 0) -> 2, (2, 1) claimed
    model.pass().unwrap();
    model.place_card(2, 1, 0).unwrap(); // (2, 0) -> 3
    model.pass().unwrap();
    model.place_card(0, 0, 0).unwrap(); // (2, 0) stays capped

    assert_eq!(model.cell(2, 0).unwrap().pawn_count(), MAX_PAWNS);
    assert_eq!(model.cell(2, 0).unwrap().owner(), Some(PlayerColor::Red));
}
