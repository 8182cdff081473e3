use crate::*;

pub const SLIDE_RADIUS: u32 = 3;
pub const SLIDE_RUN: usize = 3;

/// Squared drag length after which the gesture commits to a direction.
const DIRECTION_LOCK: f64 = 0.25;

/// Drag-to-rotate rules: dragging rotates the row under the pointer, releasing collects runs
/// of three.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideMode {
    anchor: Option<Point>,
    pivot: Option<Coord>,
    direction: Option<Direction>,
}

impl SlideMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, board: &mut Board) {
        self.cancel();
        board.setup(SLIDE_RADIUS);
        board.fill_up(None);
    }

    /// Row pivot of the gesture in progress.
    pub fn pivot(&self) -> Option<Coord> {
        self.pivot
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn press(&mut self, board: &Board, point: Point) {
        if board.is_locked() {
            return;
        }
        self.anchor = Some(point);
        self.pivot = board.nearest_cell(point).map(Cell::coord);
        self.direction = None;
    }

    /// Rotates the pivot row by however many whole cells the pointer moved along it.
    pub fn drag(&mut self, board: &mut Board, point: Point) -> BoardUpdate {
        if board.is_locked() {
            return BoardUpdate::NoChange;
        }
        let (Some(pivot), Some(anchor)) = (self.pivot, self.anchor) else {
            return BoardUpdate::NoChange;
        };

        let dx = point.x - anchor.x;
        let dy = point.y - anchor.y;
        if self.direction.is_none() && dx * dx + dy * dy >= DIRECTION_LOCK {
            self.direction = Some(Direction::from_vector(dx, dy));
        }
        let Some(dir) = self.direction else {
            return BoardUpdate::NoChange;
        };

        let distance = round_half_up(dir.to_vector().dot(Point::new(dx, dy)));
        if distance == 0 {
            return BoardUpdate::NoChange;
        }
        self.anchor = Some(point);
        board.rotate_row(pivot, dir, distance)
    }

    /// Ends the gesture and collects runs, returning the number of tiles removed.
    pub fn release(&mut self, board: &mut Board) -> usize {
        if board.is_locked() {
            return 0;
        }
        self.pivot = None;
        self.direction = None;
        board.match_run(SLIDE_RUN)
    }

    pub fn cancel(&mut self) {
        self.anchor = None;
        self.pivot = None;
        self.direction = None;
    }

    /// Refills after a collect and keeps collecting until no run is left; returns the number of
    /// extra tiles removed along the way.
    ///
    /// Animated callers can instead alternate `fill_up(None)` and `match_run(SLIDE_RUN)`
    /// themselves.
    pub fn cascade(&self, board: &mut Board) -> usize {
        let mut removed = 0;
        loop {
            board.fill_up(None);
            let collected = board.match_run(SLIDE_RUN);
            if collected == 0 {
                return removed;
            }
            removed += collected;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn row_colors(board: &Board, row: &[Coord]) -> Vec<Option<Color>> {
        row.iter()
            .map(|&coord| board.cell_at(coord).unwrap().color())
            .collect()
    }

    /// Full board where no run of three exists, with a distinct row through the origin.
    fn board() -> Board {
        let mut board = Board::from_config(BoardConfig::new(SLIDE_RADIUS, 17));
        board.fill_up(Some(Color::Marked));
        for (coord, color) in [
            ((-2, 0), Color::Yellow),
            ((-1, 0), Color::Blue),
            ((0, 0), Color::Red),
            ((1, 0), Color::Green),
            ((2, 0), Color::Purple),
        ] {
            board.paint(coord, color);
        }
        board
    }

    #[test]
    fn small_drags_do_not_lock_direction() {
        let mut board = board();
        let mut mode = SlideMode::new();
        mode.press(&board, Point::new(0.0, 0.0));

        assert_eq!(mode.drag(&mut board, Point::new(0.2, 0.1)), BoardUpdate::NoChange);
        assert_eq!(mode.direction(), None);
    }

    #[test]
    fn drag_rotates_row_along_pointer() {
        let mut board = board();
        let row = board.row((0, 0), Direction::new(0));
        let before = row_colors(&board, &row);
        let mut mode = SlideMode::new();

        mode.press(&board, Point::new(0.0, 0.0));
        // One cell along direction 0's vector.
        let v = Direction::new(0).to_vector();
        let update = mode.drag(&mut board, Point::new(v.x, v.y));

        assert_eq!(update, BoardUpdate::Changed);
        assert_eq!(mode.direction(), Some(Direction::new(0)));
        assert_eq!(mode.pivot(), Some((0, 0)));

        let after = row_colors(&board, &row);
        assert_eq!(after[..row.len() - 1], before[1..]);
        assert_eq!(after[row.len() - 1], before[0]);

        // Dragging back rotates the other way and restores the row.
        assert_eq!(mode.drag(&mut board, Point::new(0.0, 0.0)), BoardUpdate::Changed);
        assert_eq!(row_colors(&board, &row), before);
    }

    #[test]
    fn release_collects_runs_of_three() {
        let mut board = board();
        for coord in [(0, -1), (0, 1)] {
            board.paint(coord, Color::Red);
        }
        let mut mode = SlideMode::new();
        mode.press(&board, Point::new(0.0, 0.0));

        assert_eq!(mode.release(&mut board), 3);
        assert_eq!(mode.pivot(), None);
        assert_eq!(board.empty_cells().count(), 3);
    }

    #[test]
    fn cascade_refills_the_board() {
        let mut board = board();
        board.unassign((0, 0), true);

        SlideMode::new().cascade(&mut board);

        assert_eq!(board.empty_cells().count(), 0);
        assert!(board.is_consistent());
    }

    #[test]
    fn locked_board_ignores_gestures() {
        let mut board = board();
        let mut mode = SlideMode::new();
        mode.press(&board, Point::new(0.0, 0.0));
        board.set_locked(true);

        assert_eq!(mode.drag(&mut board, Point::new(3.0, 0.0)), BoardUpdate::NoChange);
        assert_eq!(mode.release(&mut board), 0);
    }

    #[test]
    fn start_sets_up_full_board() {
        let mut board = Board::new(4);
        let mut mode = SlideMode::new();
        mode.start(&mut board);
        assert_eq!(board.tile_count(), 19);
        assert_eq!(mode.pivot(), None);
    }
}
