//! Game model integration tests.
//!
//! These drive full placement sequences through the public API and
//! verify the influence rule, scoring, and game lifecycle end to end.

use sanguine::{
    parse_deck, BoardView, Card, CardLike, GameError, GameModel, Influence, PlacementError,
    PlayerColor, TextualView,
};

fn card(name: &str, cost: u8, value: u32, offsets: &[(i32, i32)]) -> Card {
    Card::new(name, cost, value, Influence::from_offsets(offsets).unwrap()).unwrap()
}

// =============================================================================
// Placement and Influence Scenarios
// =============================================================================

/// A no-influence card placed on a starting cell: the card installs,
/// pawns drop to zero, and the turn flips.
#[test]
fn test_initial_placement_scenario() {
    let red_deck = vec![card("plain", 1, 1, &[])];
    let mut model = GameModel::new(3, 5, red_deck, vec![]).unwrap();
    model.start(1).unwrap();

    model.place_card(0, 0, 0).unwrap();

    let cell = model.cell(0, 0).unwrap();
    assert!(cell.card().is_some());
    assert_eq!(cell.owner(), Some(PlayerColor::Red));
    assert_eq!(cell.pawn_count(), 0);
    assert_eq!(model.current_player(), PlayerColor::Blue);
}

/// Influence over an empty cell claims it with one pawn.
#[test]
fn test_influence_claims_empty_cell() {
    // The reach card's mark lands one cell to the right
    let red_deck = vec![card("reach", 1, 1, &[(0, 1)])];
    let mut model = GameModel::new(3, 5, red_deck, vec![]).unwrap();
    model.start(1).unwrap();

    model.place_card(1, 0, 0).unwrap();

    let gained = model.cell(1, 1).unwrap();
    assert!(!gained.is_empty());
    assert_eq!(gained.pawn_count(), 1);
    assert_eq!(gained.owner(), Some(PlayerColor::Red));
}

/// Influence over an enemy cell with a single pawn neutralizes it:
/// empty, ownerless, zero pawns.
#[test]
fn test_influence_neutralizes_lone_enemy_pawn() {
    // Red advances to (0, 2), then raids Blue's (0, 4) from there
    let red_deck = vec![
        card("advance", 1, 1, &[(0, 2)]),
        card("raid", 1, 1, &[(0, 2)]),
    ];
    let mut model = GameModel::new(3, 5, red_deck, vec![]).unwrap();
    model.start(2).unwrap();

    model.place_card(0, 0, 0).unwrap(); // Red claims (0, 2)
    model.pass().unwrap(); // Blue
    model.place_card(0, 2, 0).unwrap(); // Red's raid hits (0, 4)

    let hit = model.cell(0, 4).unwrap();
    assert!(hit.is_empty());
    assert_eq!(hit.pawn_count(), 0);
    assert_eq!(hit.owner(), None);
}

/// Influence over an enemy cell with two pawns erodes one and flips
/// ownership.
#[test]
fn test_influence_erodes_and_captures_enemy_cell() {
    let red_deck = vec![
        card("advance", 1, 1, &[(0, 2)]),
        card("raid", 1, 1, &[(0, 2)]),
    ];
    // Blue reinforces (1, 4) to two pawns with a downward mark
    let blue_deck = vec![card("dig-in", 1, 1, &[(1, 0)])];
    let mut model = GameModel::new(3, 5, red_deck, blue_deck).unwrap();
    model.start(2).unwrap();

    model.place_card(1, 0, 0).unwrap(); // Red claims (1, 2)
    model.place_card(0, 4, 0).unwrap(); // Blue: (1, 4) now has 2 pawns
    assert_eq!(model.cell(1, 4).unwrap().pawn_count(), 2);

    model.place_card(1, 2, 0).unwrap(); // Red's raid hits (1, 4)

    let hit = model.cell(1, 4).unwrap();
    assert_eq!(hit.pawn_count(), 1);
    assert_eq!(hit.owner(), Some(PlayerColor::Red));
}

/// A placement rejected mid-game changes nothing, and the same player
/// can retry immediately.
#[test]
fn test_rejected_placement_is_retryable() {
    let red_deck = vec![card("pricey", 3, 5, &[]), card("cheap", 1, 1, &[])];
    let mut model = GameModel::new(3, 5, red_deck, vec![]).unwrap();
    model.start(2).unwrap();

    assert_eq!(
        model.place_card(0, 0, 0),
        Err(GameError::IllegalPlacement(
            PlacementError::InsufficientPawns { have: 1, need: 3 }
        ))
    );
    assert_eq!(model.current_player(), PlayerColor::Red);
    assert_eq!(model.hand(PlayerColor::Red).len(), 2);

    model.place_card(0, 0, 1).unwrap();
    assert_eq!(model.current_player(), PlayerColor::Blue);
}

// =============================================================================
// Scoring and Game End
// =============================================================================

/// A short full game: both sides score, passes end it, and the higher
/// total takes the win.
#[test]
fn test_full_game_to_winner() {
    let red_deck = vec![card("r1", 1, 4, &[]), card("r2", 1, 3, &[])];
    let blue_deck = vec![card("b1", 1, 5, &[])];
    let mut model = GameModel::new(3, 5, red_deck, blue_deck).unwrap();
    model.start(2).unwrap();

    model.place_card(0, 0, 0).unwrap(); // Red 4 in row 0
    model.place_card(0, 4, 0).unwrap(); // Blue 5 in row 0
    model.place_card(1, 0, 0).unwrap(); // Red 3 in row 1
    model.pass().unwrap(); // Blue
    model.pass().unwrap(); // Red; second consecutive pass

    assert!(model.is_game_over());
    assert_eq!(model.score(PlayerColor::Red), 7);
    assert_eq!(model.score(PlayerColor::Blue), 5);
    assert_eq!(model.winner(), Some(PlayerColor::Red));
}

// =============================================================================
// Deck Parsing and Rendering Together
// =============================================================================

const DECK_TEXT: &str = "\
Security 1 2
XXXXX
XXXXX
XXXXX
XIXXX
XXXXX

Sweep 2 4
XXXXX
XXIXX
XIXIX
XXIXX
XXXXX
";

/// A parsed deck plays straight into a game and renders.
#[test]
fn test_parsed_deck_drives_a_game() {
    let deck = parse_deck(DECK_TEXT).unwrap();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck[0].name(), "Security");
    assert_eq!(deck[0].cost(), 1);

    let mut model = GameModel::new(3, 5, deck.clone(), deck).unwrap();
    model.start(2).unwrap();

    // Security's single mark points down-left of the placement; from
    // (0, 0) it lands off-board
    model.place_card(0, 0, 0).unwrap();

    let rendered = TextualView::new(&model).to_string();
    assert_eq!(rendered, "2 R___1 0\n0 1___1 0\n0 1___1 0\n");
}
