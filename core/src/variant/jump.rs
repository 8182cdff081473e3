use serde::{Deserialize, Serialize};

use crate::*;

pub const JUMP_RADIUS: u32 = 4;
pub const JUMP_RUN: usize = 4;

/// Score thresholds after which one more tile drops in per turn.
const TILE_STEPS: [(i64, usize); 5] = [(60, 3), (120, 4), (240, 5), (420, 6), (720, 7)];
const MAX_TILES_PER_TURN: usize = 8;

/// Number of tiles added per turn for the current score.
pub fn tiles_per_turn(score: i64) -> usize {
    TILE_STEPS
        .iter()
        .find(|&&(limit, _)| score < limit)
        .map_or(MAX_TILES_PER_TURN, |&(_, tiles)| tiles)
}

/// What the board needs next after a jump move has been matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpSettle {
    /// No empty cell is left.
    GameOver,
    /// Every tile is gone, new ones should drop in.
    Cleared,
    /// The player moved without matching, new tiles should drop in.
    Refill,
    /// Nothing to do until the next move.
    Stable,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct JumpReport {
    pub removed: usize,
    pub next: JumpSettle,
}

/// Pick-and-drop rules: select a tile, drop it on an empty cell, collect runs of four.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpMode {
    selected: Option<Coord>,
    require_path: bool,
}

impl JumpMode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only allow drops on cells reachable through empty cells.
    pub fn with_path_check(require_path: bool) -> Self {
        Self {
            selected: None,
            require_path,
        }
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// Sets up a fresh board unless one was already restored, e.g. from a save.
    pub fn start(&mut self, board: &mut Board, score: i64) -> usize {
        self.selected = None;
        if board.is_initialized() {
            return 0;
        }
        board.setup(JUMP_RADIUS);
        self.add_tiles(board, score)
    }

    /// Drops the next batch of tiles, drawing them from the lookahead queue.
    pub fn add_tiles(&self, board: &mut Board, score: i64) -> usize {
        board.fill_some(tiles_per_turn(score), true)
    }

    /// Pointer down: picks the tile under `point`, or drops the selection outside the board.
    pub fn press(&mut self, board: &mut Board, point: Point) {
        if board.is_locked() {
            return;
        }

        let Some(cell) = board.nearest_cell(point) else {
            self.clear_selection(board);
            return;
        };
        let coord = cell.coord();
        if cell.is_empty() || self.selected == Some(coord) {
            return;
        }

        self.clear_selection(board);
        board.set_selected(coord, true);
        self.selected = Some(coord);
    }

    /// Pointer up: moves the selected tile onto the empty cell under `point`.
    pub fn release(&mut self, board: &mut Board, point: Point) -> bool {
        if board.is_locked() {
            return false;
        }
        let Some(source) = self.selected else {
            return false;
        };
        let target = match board.nearest_cell(point) {
            Some(cell) if cell.is_empty() => cell.coord(),
            _ => return false,
        };

        self.clear_selection(board);
        if self.require_path && !board.reachable(source, target) {
            log::debug!("No free path from {:?} to {:?}", source, target);
            return false;
        }
        matches!(board.relocate(target, source, false), Ok(true))
    }

    /// Collects runs and decides what happens next.
    pub fn settle(&self, board: &mut Board, user_move: bool) -> JumpReport {
        if board.is_locked() {
            return JumpReport {
                removed: 0,
                next: JumpSettle::Stable,
            };
        }

        let removed = board.match_run(JUMP_RUN);
        let next = if board.empty_cells().next().is_none() {
            JumpSettle::GameOver
        } else if board.filled_cells().next().is_none() {
            JumpSettle::Cleared
        } else if user_move && removed == 0 {
            JumpSettle::Refill
        } else {
            JumpSettle::Stable
        };
        JumpReport { removed, next }
    }

    fn clear_selection(&mut self, board: &mut Board) {
        if let Some(coord) = self.selected.take() {
            board.set_selected(coord, false);
        }
    }
}
