use crate::*;

pub const FLIP_RADIUS: u32 = 4;

/// Direction collected regions collapse towards before refilling.
pub const FLIP_COLLAPSE: Direction = Direction::new(1);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    NoChange,
    /// A region of this many tiles was collected and left holes behind.
    Collected(usize),
    /// The tapped tile had no same-colored neighbour and is now marked.
    Penalized(Coord),
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Tap-to-collect rules: a tapped region of two or more tiles is collected, a lone tile is
/// marked and becomes dead weight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipMode;

impl FlipMode {
    pub fn start(&self, board: &mut Board) {
        board.setup(FLIP_RADIUS);
        board.fill_up(None);
    }

    pub fn tap(&self, board: &mut Board, point: Point) -> FlipOutcome {
        if board.is_locked() {
            return FlipOutcome::NoChange;
        }
        let Some(coord) = board.nearest_cell(point).map(Cell::coord) else {
            return FlipOutcome::NoChange;
        };

        let region = board.match_adjacent(coord);
        match region.len() {
            0 => FlipOutcome::NoChange,
            1 => {
                board.paint(coord, Color::Marked);
                FlipOutcome::Penalized(coord)
            }
            count => {
                for &cell in &region {
                    board.unassign(cell, true);
                }
                FlipOutcome::Collected(count)
            }
        }
    }

    /// Closes the holes left by a collect and refills the board, returning the new tile count.
    ///
    /// Animated callers can instead run `collapse(FLIP_COLLAPSE)` and `fill_up(None)` as two
    /// separately scheduled steps.
    pub fn settle(&self, board: &mut Board) -> usize {
        board.collapse(FLIP_COLLAPSE);
        board.fill_up(None)
    }
}
