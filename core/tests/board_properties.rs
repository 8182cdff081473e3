use hexsix_core::*;

fn coords(board: &Board) -> Vec<Coord> {
    board.cells().iter().map(Cell::coord).collect()
}

fn layout(board: &Board) -> Vec<(Coord, Option<Color>)> {
    board
        .cells()
        .iter()
        .map(|cell| (cell.coord(), cell.color()))
        .collect()
}

fn hex_distance((i, j): Coord) -> Axis {
    i.abs().max(j.abs()).max((i + j).abs())
}

#[test]
fn setup_produces_closed_connected_lattice() {
    for radius in 1..=6 {
        let mut board = Board::from_config(BoardConfig::new(radius, 0));
        let cells = coords(&board);
        assert_eq!(cells.len(), 1 + 3 * (radius as usize) * (radius as usize - 1));

        let mut unique = cells.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), cells.len(), "radius {radius} has duplicates");

        assert!(cells.iter().all(|&coord| hex_distance(coord) < radius as Axis));
        // The board is empty, so every pair is connected through vacant cells.
        for &coord in &cells {
            assert!(board.reachable((0, 0), coord) || coord == (0, 0));
        }
    }
}

#[test]
fn registry_stays_consistent_through_random_play() {
    let mut board = Board::from_config(BoardConfig::new(4, 99));
    board.fill_some(20, true);
    for step in 0..200_isize {
        let cells = coords(&board);
        let pivot = cells[(step as usize * 7) % cells.len()];
        let dir = Direction::new(step);
        match step % 5 {
            0 => {
                board.rotate_row(pivot, dir, step % 4 - 2);
            }
            1 => {
                board.collapse(dir);
            }
            2 => {
                board.match_run(3);
            }
            3 => {
                board.fill_some(4, step % 2 == 0);
            }
            _ => {
                board.unassign(pivot, true);
            }
        }
        assert!(board.is_consistent(), "inconsistent after step {step}");
    }
}

#[test]
fn rotation_round_trips_in_every_direction() {
    let mut board = Board::from_config(BoardConfig::new(4, 7));
    board.fill_up(None);
    let before = layout(&board);

    for dir in Direction::ALL {
        for distance in 1..=8 {
            board.rotate_row((1, -1), dir, distance);
            board.rotate_row((1, -1), dir, -distance);
            assert_eq!(layout(&board), before, "dir {dir:?} distance {distance}");
        }
    }
}

#[test]
fn collapse_twice_equals_once() {
    let mut board = Board::from_config(BoardConfig::new(5, 3));
    board.fill_some(30, false);
    for dir in Direction::ALL {
        board.collapse(dir);
        let once = layout(&board);
        assert_eq!(board.collapse(dir), BoardUpdate::NoChange);
        assert_eq!(layout(&board), once);
    }
}

#[test]
fn collapse_leaves_no_tile_above_a_gap() {
    let mut board = Board::from_config(BoardConfig::new(4, 5));
    board.fill_some(15, false);
    let dir = Direction::new(1);
    board.collapse(dir);

    for cell in board.empty_cells() {
        let above = cell.coord().neighbor(dir);
        assert!(board.tile_at(above).is_none(), "tile left above {:?}", cell.coord());
    }
}

#[test]
fn locked_board_ignores_every_mutation() {
    let mut board = Board::from_config(BoardConfig::new(3, 1));
    board.fill_some(10, true);
    board.set_locked(true);

    let cells = board.cells().to_vec();
    let tiles = board.tile_ids().to_vec();
    let queue = board.lookahead().map(<[Color]>::to_vec);

    assert_eq!(board.rotate_row((0, 0), Direction::new(0), 2), BoardUpdate::NoChange);
    assert_eq!(board.collapse(Direction::new(4)), BoardUpdate::NoChange);
    assert_eq!(board.fill_up(None), 0);
    assert_eq!(board.fill_some(5, true), 0);
    assert!(board.match_adjacent((0, 0)).is_empty());
    assert_eq!(board.match_run(1), 0);

    assert_eq!(board.cells(), &cells[..]);
    assert_eq!(board.tile_ids(), &tiles[..]);
    assert_eq!(board.lookahead().map(<[Color]>::to_vec), queue);
}

#[test]
fn teardown_then_setup_starts_a_new_session() {
    let mut board = Board::from_config(BoardConfig::new(3, 1));
    board.fill_up(None);
    board.teardown();

    assert_eq!(board.fill_up(None), 0);
    assert_eq!(board.match_run(3), 0);

    board.setup(2);
    assert!(!board.is_locked());
    assert_eq!(board.fill_up(Some(Color::Red)), 7);
}

#[test]
fn radius_two_scenario() {
    let mut board = Board::from_config(BoardConfig::new(2, 12));
    assert_eq!(board.cells().len(), 7);
    board.fill_up(Some(Color::Red));
    board.paint((-1, 1), Color::Green);

    let reds: Vec<Coord> = coords(&board)
        .into_iter()
        .filter(|&coord| coord != (-1, 1))
        .collect();
    for &start in &reds {
        let mut region = board.match_adjacent(start);
        region.sort();
        let mut expected = reds.clone();
        expected.sort();
        assert_eq!(region, expected);
    }

    // Every straight line of three on a radius-2 board passes through the center.
    let mut board = Board::from_config(BoardConfig::new(2, 12));
    board.fill_up(Some(Color::Green));
    for coord in [(0, -1), (0, 0), (0, 1)] {
        board.paint(coord, Color::Red);
    }
    assert_eq!(board.match_run(3), 3);
    assert_eq!(board.filled_cells().count(), 4);
}
