//! Save record for an in-progress game: `{ score, cells: [{i, j, color}], queue }`.
//!
//! Building and reading the record is all this crate does. Where the JSON ends up (local
//! storage, a file, a server) is up to the caller; the `*_key` helpers give the names the
//! records are conventionally stored under.

use std::collections::HashSet;

use hexsix_core::{Axis, Board, BoardError, Color, Coord, Variant};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GAME_KEY_PREFIX: &str = "six-save-game-v2-";
pub const HIGH_SCORE_KEY_PREFIX: &str = "six-top-score-v2-";

pub fn game_key(variant: Variant) -> String {
    format!("{GAME_KEY_PREFIX}{}", variant.mode())
}

pub fn high_score_key(variant: Variant) -> String {
    format!("{HIGH_SCORE_KEY_PREFIX}{}", variant.mode())
}

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed save record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Save record lists cell {0:?} more than once")]
    DuplicateCell(Coord),
    #[error(transparent)]
    Board(#[from] BoardError),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedCell {
    pub i: Axis,
    pub j: Axis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl SavedCell {
    pub const fn coord(&self) -> Coord {
        (self.i, self.j)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    pub cells: Vec<SavedCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<Vec<Color>>,
}

impl SavedGame {
    /// Snapshots every cell (in creation order) and the lookahead queue.
    pub fn capture(board: &Board, score: i64) -> Self {
        Self {
            score: Some(score),
            cells: board
                .cells()
                .iter()
                .map(|cell| {
                    let (i, j) = cell.coord();
                    SavedCell {
                        i,
                        j,
                        color: cell.color(),
                    }
                })
                .collect(),
            queue: board.lookahead().map(<[Color]>::to_vec),
        }
    }

    /// Rebuilds the recorded cells and tiles on `board` and marks it initialized.
    ///
    /// Nothing is touched when the record repeats a cell or would put a tile on an occupied
    /// cell.
    pub fn restore(&self, board: &mut Board) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.cells.len());
        for cell in &self.cells {
            let coord = cell.coord();
            if !seen.insert(coord) {
                return Err(ProtocolError::DuplicateCell(coord));
            }
            if cell.color.is_some() && board.tile_at(coord).is_some() {
                return Err(BoardError::CellOccupied.into());
            }
        }

        for cell in &self.cells {
            let coord = cell.coord();
            board.cell_at_or_insert(coord);
            if let Some(color) = cell.color {
                let tile = board.new_tile(color);
                board.assign(coord, tile)?;
            }
        }
        if let Some(queue) = &self.queue {
            board.set_lookahead(Some(queue.clone()));
        }
        board.mark_initialized();

        log::debug!(
            "Restored {} cells with {} tiles",
            self.cells.len(),
            board.tile_count()
        );
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
