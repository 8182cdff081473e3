use alloc::vec::Vec;
use rand::rngs::SmallRng;

use crate::*;

impl Board {
    /// Puts a new tile on every empty cell, using `forced` or random colors. Returns the number
    /// of tiles placed.
    pub fn fill_up(&mut self, forced: Option<Color>) -> usize {
        if self.locked {
            return 0;
        }

        let mut placed = 0;
        for index in 0..self.cells.len() {
            if !self.cells[index].is_empty() {
                continue;
            }
            let color = match forced {
                Some(color) => color,
                None => Color::random(&mut self.rng),
            };
            let tile = self.new_tile(color);
            self.place(index, tile);
            placed += 1;
        }
        placed
    }

    /// Drops `n` new tiles onto randomly picked empty cells and returns how many fit.
    ///
    /// With `use_queue`, the current lookahead queue (if any) supplies the colors and a fresh
    /// queue of `n` colors is drawn for the next call. Without it the lookahead is cleared.
    pub fn fill_some(&mut self, n: usize, use_queue: bool) -> usize {
        if self.locked {
            return 0;
        }

        let adding = match self.lookahead.take() {
            Some(queue) if use_queue && !queue.is_empty() => queue,
            _ => self.random_colors(n),
        };

        let mut free = self.empty_indices();
        shuffle(&mut free, &mut self.rng);
        if free.len() < adding.len() {
            log::warn!(
                "Only {} empty cells left, requested {} new tiles",
                free.len(),
                adding.len()
            );
        }
        free.truncate(adding.len());

        for (&index, &color) in free.iter().zip(&adding) {
            let tile = self.new_tile(color);
            self.place(index, tile);
        }

        self.lookahead = if use_queue {
            Some(self.random_colors(n))
        } else {
            None
        };
        free.len()
    }

    fn random_colors(&mut self, n: usize) -> Vec<Color> {
        (0..n).map(|_| Color::random(&mut self.rng)).collect()
    }
}

/// Fisher-Yates, so every permutation of `items` is equally likely.
fn shuffle<T>(items: &mut [T], rng: &mut SmallRng) {
    use rand::prelude::*;

    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::SeedableRng;

    #[test]
    fn fill_up_covers_every_empty_cell() {
        let mut board = Board::from_config(BoardConfig::new(4, 5));
        let tile = board.new_tile(Color::Marked);
        board.assign((0, 0), tile).unwrap();

        assert_eq!(board.fill_up(None), 36);
        assert_eq!(board.empty_cells().count(), 0);
        assert_eq!(board.tile_at((0, 0)).unwrap().color(), Color::Marked);
        assert!(board.tiles().all(|tile| !tile.is_sliding()));
        assert!(board.is_consistent());
    }

    #[test]
    fn fill_up_honours_forced_color() {
        let mut board = Board::from_config(BoardConfig::new(3, 5));
        board.fill_up(Some(Color::Blue));
        assert!(board.tiles().all(|tile| tile.color() == Color::Blue));
    }

    #[test]
    fn fill_some_without_queue_clears_lookahead() {
        let mut board = Board::from_config(BoardConfig::new(4, 8));
        board.set_lookahead(Some(vec![Color::Red; 2]));

        assert_eq!(board.fill_some(3, false), 3);
        assert_eq!(board.tile_count(), 3);
        assert_eq!(board.lookahead(), None);
    }

    #[test]
    fn fill_some_consumes_and_refreshes_queue() {
        let mut board = Board::from_config(BoardConfig::new(4, 8));
        board.set_lookahead(Some(vec![Color::Green, Color::Green]));

        // The whole queue is used, regardless of `n`.
        assert_eq!(board.fill_some(5, true), 2);
        assert!(board.tiles().all(|tile| tile.color() == Color::Green));
        assert_eq!(board.lookahead().map(<[Color]>::len), Some(5));

        assert_eq!(board.fill_some(4, true), 5);
        assert_eq!(board.tile_count(), 7);
        assert_eq!(board.lookahead().map(<[Color]>::len), Some(4));
    }

    #[test]
    fn fill_some_truncates_to_available_cells() {
        let mut board = Board::from_config(BoardConfig::new(2, 8));
        board.fill_up(Some(Color::Red));
        board.unassign((0, 0), true);
        board.unassign((1, 0), true);

        assert_eq!(board.fill_some(6, false), 2);
        assert_eq!(board.empty_cells().count(), 0);
        assert_eq!(board.fill_some(6, false), 0);
        assert!(board.is_consistent());
    }

    #[test]
    fn fill_is_inert_when_locked() {
        let mut board = Board::from_config(BoardConfig::new(3, 8));
        board.set_locked(true);
        assert_eq!(board.fill_up(None), 0);
        assert_eq!(board.fill_some(3, true), 0);
        assert_eq!(board.tile_count(), 0);
        assert_eq!(board.lookahead(), None);
    }

    #[test]
    fn same_seed_fills_identically() {
        let mut a = Board::from_config(BoardConfig::new(4, 42));
        let mut b = Board::from_config(BoardConfig::new(4, 42));
        a.fill_some(10, true);
        b.fill_some(10, true);

        let colors = |board: &Board| board.cells().iter().map(Cell::color).collect::<Vec<_>>();
        assert_eq!(colors(&a), colors(&b));
        assert_eq!(a.lookahead(), b.lookahead());
    }

    #[test]
    fn shuffle_keeps_every_item() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut items: Vec<usize> = (0..20).collect();
        shuffle(&mut items, &mut rng);
        items.sort();
        assert_eq!(items, (0..20).collect::<Vec<_>>());
    }
}
