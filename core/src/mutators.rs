use crate::*;

impl Board {
    /// Rotates the row through `pivot` like a carousel.
    ///
    /// Each step moves every tile one cell along `dir`'s vector, towards the `-dir` offset end
    /// of the row; the tile pushed off that end re-enters at the other end flagged as jumping.
    /// A negative `distance` rotates the opposite way.
    pub fn rotate_row(&mut self, pivot: Coord, dir: Direction, distance: isize) -> BoardUpdate {
        if self.locked || distance == 0 {
            return BoardUpdate::NoChange;
        }

        let (dir, steps) = if distance < 0 {
            (dir.opposite(), distance.unsigned_abs())
        } else {
            (dir, distance.unsigned_abs())
        };
        let row = self.row_indices(pivot, dir);
        let (Some(&first), Some(&last)) = (row.first(), row.last()) else {
            return BoardUpdate::NoChange;
        };

        for _ in 0..steps {
            let wrapped = self.detach(first, false).map(|mut tile| {
                tile.jump = true;
                tile
            });
            for pair in row.windows(2) {
                self.shift(pair[0], pair[1], true);
            }
            if let Some(tile) = wrapped {
                self.place(last, tile);
            }
        }

        log::trace!("Rotated {} cells through {:?} by {} along {:?}", row.len(), pivot, steps, dir);
        BoardUpdate::Changed
    }

    /// Compacts tiles along `dir`'s vector until no tile can fall into an empty cell.
    pub fn collapse(&mut self, dir: Direction) -> BoardUpdate {
        if self.locked {
            return BoardUpdate::NoChange;
        }

        let mut empties = self.empty_indices();
        let mut changed = false;
        loop {
            let mut moved = false;
            for slot in empties.iter_mut() {
                let to = *slot;
                let Some(from) = self.neighbor_index(to, dir) else {
                    continue;
                };
                if self.shift(to, from, true) {
                    *slot = from;
                    moved = true;
                }
            }
            if !moved {
                break;
            }
            changed = true;
        }

        changed.into()
    }
}
