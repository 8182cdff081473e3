use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashSet;
use smallvec::{SmallVec, smallvec};

use crate::*;

type Run = SmallVec<[usize; 8]>;

impl Board {
    /// Connected region of cells sharing the start cell's color.
    ///
    /// Empty when the board is locked or the start cell is empty, marked or missing. The order
    /// of the returned cells is unspecified.
    pub fn match_adjacent(&self, start: Coord) -> Vec<Coord> {
        if self.locked {
            return Vec::new();
        }
        let Some(start) = self.cell_index(start) else {
            return Vec::new();
        };
        let Some(color) = self.cells[start].matchable_color() else {
            return Vec::new();
        };

        let mut visited: HashSet<usize> = HashSet::from([start]);
        let mut stack = vec![start];
        let mut region = Vec::new();
        while let Some(index) = stack.pop() {
            region.push(self.cells[index].coord());
            for dir in Direction::ALL {
                let Some(next) = self.neighbor_index(index, dir) else {
                    continue;
                };
                if self.cells[next].matchable_color() == Some(color) && visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        log::trace!("Flood match from {:?} found {} cells", self.cells[start].coord(), region.len());
        region
    }

    /// Removes every straight run of at least `n` same-colored tiles and returns how many
    /// tiles were collected.
    ///
    /// Each cell is scanned in all six directions, so a run is found once from each end; runs
    /// may overlap and every tile still counts once.
    pub fn match_run(&mut self, n: usize) -> usize {
        if self.locked {
            return 0;
        }

        let runs = self.find_runs(n);
        let mut removed = 0;
        for run in &runs {
            for &index in run {
                if self.detach(index, true).is_some() {
                    removed += 1;
                }
            }
        }

        if removed > 0 {
            log::trace!("Run match of length {} removed {} tiles over {} runs", n, removed, runs.len());
        }
        removed
    }

    fn find_runs(&self, n: usize) -> Vec<Run> {
        let mut runs = Vec::new();
        for (index, cell) in self.cells.iter().enumerate() {
            let Some(color) = cell.matchable_color() else {
                continue;
            };
            for dir in Direction::ALL {
                let mut run: Run = smallvec![index];
                for distance in 1..n {
                    let coord = cell.coord().step(dir, distance as Axis);
                    match self.cell_index(coord) {
                        Some(next) if self.cells[next].color() == Some(color) => run.push(next),
                        _ => break,
                    }
                }
                if run.len() >= n {
                    runs.push(run);
                }
            }
        }
        runs
    }
}
