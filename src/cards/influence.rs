//! The 5x5 influence pattern carried by every card.
//!
//! Offsets are relative to the placement cell, which sits at the grid
//! center. The center mark itself is not meaningful: when influence is
//! applied the center cell always holds the just-played card, and card
//! cells are immune.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GameError;

/// Side length of the influence grid.
pub const GRID_SIZE: usize = 5;

/// Index of the placement cell within the grid.
pub const CENTER: usize = 2;

/// A fixed 5x5 pattern of relative cells affected when a card is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Influence {
    grid: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Influence {
    /// Create an influence pattern from a full 5x5 grid.
    #[must_use]
    pub const fn new(grid: [[bool; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { grid }
    }

    /// A pattern with no marks.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            grid: [[false; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a pattern from relative (row, col) offsets.
    ///
    /// Offsets outside [-2, 2] are rejected.
    pub fn from_offsets(offsets: &[(i32, i32)]) -> Result<Self, GameError> {
        let mut grid = [[false; GRID_SIZE]; GRID_SIZE];
        for &(dr, dc) in offsets {
            if !(-2..=2).contains(&dr) || !(-2..=2).contains(&dc) {
                return Err(GameError::invalid_card(format!(
                    "influence offset ({}, {}) outside 5x5 grid",
                    dr, dc
                )));
            }
            grid[(dr + CENTER as i32) as usize][(dc + CENTER as i32) as usize] = true;
        }
        Ok(Self { grid })
    }

    /// Build a pattern from row vectors, validating the 5x5 shape.
    ///
    /// This is the entry point for deck parsing, where the shape comes
    /// from untrusted input.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GameError> {
        if rows.len() != GRID_SIZE {
            return Err(GameError::invalid_card(format!(
                "influence grid has {} rows, expected {}",
                rows.len(),
                GRID_SIZE
            )));
        }
        let mut grid = [[false; GRID_SIZE]; GRID_SIZE];
        for (i, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(GameError::invalid_card(format!(
                    "influence row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    GRID_SIZE
                )));
            }
            for (j, &marked) in row.iter().enumerate() {
                grid[i][j] = marked;
            }
        }
        Ok(Self { grid })
    }

    /// Whether grid position (i, j) is marked.
    #[must_use]
    pub fn is_marked(&self, i: usize, j: usize) -> bool {
        self.grid[i][j]
    }

    /// Relative (row, col) offsets of all marked cells.
    ///
    /// The center offset (0, 0) is included when marked; applying it is
    /// always a no-op since the placement cell holds a card.
    #[must_use]
    pub fn offsets(&self) -> SmallVec<[(i32, i32); 9]> {
        let mut out = SmallVec::new();
        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                if self.grid[i][j] {
                    out.push((i as i32 - CENTER as i32, j as i32 - CENTER as i32));
                }
            }
        }
        out
    }
}
