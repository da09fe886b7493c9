//! Deck text format parser.
//!
//! One card per block: a header line `name cost value`, then five lines
//! of five characters where `I` marks an influence cell and anything
//! else leaves it unmarked. Blank lines between blocks are ignored.
//!
//! The core never reads files; callers load the text and hand it over.

use super::card::Card;
use super::influence::{Influence, GRID_SIZE};
use crate::core::GameError;

/// Parse a whole deck from its textual form.
///
/// Returns cards in file order (front = first drawn). Any malformed
/// block fails the whole parse with `InvalidCard`.
pub fn parse_deck(input: &str) -> Result<Vec<Card>, GameError> {
    let lines: Vec<&str> = input.lines().map(str::trim_end).collect();
    let mut cards = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].trim().is_empty() {
            i += 1;
            continue;
        }
        let (card, consumed) = parse_card_block(&lines[i..], i)?;
        cards.push(card);
        i += consumed;
    }

    Ok(cards)
}

fn parse_card_block(lines: &[&str], offset: usize) -> Result<(Card, usize), GameError> {
    let header = lines[0];
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(GameError::invalid_card(format!(
            "line {}: expected `name cost value`, got {:?}",
            offset + 1,
            header
        )));
    }

    let name = fields[0];
    let cost: u8 = fields[1].parse().map_err(|_| {
        GameError::invalid_card(format!("line {}: unparseable cost {:?}", offset + 1, fields[1]))
    })?;
    let value: u32 = fields[2].parse().map_err(|_| {
        GameError::invalid_card(format!("line {}: unparseable value {:?}", offset + 1, fields[2]))
    })?;

    if lines.len() < 1 + GRID_SIZE {
        return Err(GameError::invalid_card(format!(
            "card {:?}: influence grid truncated",
            name
        )));
    }

    let mut rows = Vec::with_capacity(GRID_SIZE);
    for (n, line) in lines[1..=GRID_SIZE].iter().enumerate() {
        let row: Vec<bool> = line.chars().map(|c| c == 'I').collect();
        if row.len() != GRID_SIZE {
            return Err(GameError::invalid_card(format!(
                "line {}: influence row has {} cells, expected {}",
                offset + 2 + n,
                row.len(),
                GRID_SIZE
            )));
        }
        rows.push(row);
    }

    let influence = Influence::from_rows(&rows)?;
    let card = Card::new(name, cost, value, influence)?;
    Ok((card, 1 + GRID_SIZE))
}
