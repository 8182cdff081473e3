use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashMap;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// One addressable position of the lattice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    position: Point,
    hidden: bool,
    #[serde(skip)]
    mark: u32,
    pub(crate) tile: Option<Tile>,
}

impl Cell {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            position: coord.position(),
            hidden: false,
            mark: 0,
            tile: None,
        }
    }

    pub const fn coord(&self) -> Coord {
        self.coord
    }

    pub const fn position(&self) -> Point {
        self.position
    }

    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub const fn tile(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    pub const fn is_empty(&self) -> bool {
        self.tile.is_none()
    }

    pub fn color(&self) -> Option<Color> {
        self.tile.as_ref().map(Tile::color)
    }

    /// Color of the held tile, unless the cell is empty or holds a marked tile.
    pub fn matchable_color(&self) -> Option<Color> {
        self.color().filter(|color| color.is_matchable())
    }

    pub fn is_colored(&self) -> bool {
        self.matchable_color().is_some()
    }
}

/// Cells and tiles of one game session.
///
/// Cells are kept in creation order and indexed by coordinates. Tiles are owned by the cell
/// holding them; the board additionally keeps a registry of assigned tile ids in assignment
/// order. Only `assign`, `relocate` and `unassign` (and their crate-internal counterparts)
/// touch the cell/tile relation.
#[derive(Clone, Debug)]
pub struct Board {
    index: HashMap<Coord, usize>,
    pub(crate) cells: Vec<Cell>,
    tiles: Vec<TileId>,
    initialized: bool,
    pub(crate) locked: bool,
    pub(crate) lookahead: Option<Vec<Color>>,
    pub(crate) rng: SmallRng,
    next_tile_id: u32,
    traversal: u32,
}

impl Board {
    pub fn new(seed: u64) -> Self {
        Self {
            index: HashMap::new(),
            cells: Vec::new(),
            tiles: Vec::new(),
            initialized: false,
            locked: false,
            lookahead: None,
            rng: SmallRng::seed_from_u64(seed),
            next_tile_id: 0,
            traversal: 0,
        }
    }

    pub fn from_config(config: BoardConfig) -> Self {
        let mut board = Self::new(config.seed);
        board.setup(config.radius);
        board
    }

    /// Builds a hexagonal lattice of the given radius around the origin and unlocks the board.
    ///
    /// Any previous cells and tiles are dropped without being unassigned.
    pub fn setup(&mut self, radius: u32) {
        self.initialized = true;
        self.index.clear();
        self.cells.clear();
        self.tiles.clear();

        let origin = self.insert_cell((0, 0));
        let mut frontier = Vec::from([origin]);
        for _ in 1..radius {
            let mut next = Vec::new();
            for &index in &frontier {
                let coord = self.cells[index].coord;
                for dir in Direction::ALL {
                    let neighbor = coord.neighbor(dir);
                    if !self.index.contains_key(&neighbor) {
                        next.push(self.insert_cell(neighbor));
                    }
                }
            }
            frontier = next;
        }

        self.locked = false;
        log::debug!(
            "Board set up with radius {} and {} cells",
            radius,
            self.cells.len()
        );
    }

    /// Silently discards every tile, clears the lattice and locks the board.
    pub fn teardown(&mut self) {
        self.initialized = false;
        self.locked = true;
        for index in 0..self.cells.len() {
            self.detach(index, false);
        }
        self.cells.clear();
        self.tiles.clear();
        self.index.clear();
        log::debug!("Board torn down");
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Marks a board that was rebuilt cell by cell (e.g. from a save) as ready for play.
    /// Like `setup`, this lifts the lock left by `teardown`.
    pub fn mark_initialized(&mut self) {
        self.initialized = true;
        self.locked = false;
    }

    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn lookahead(&self) -> Option<&[Color]> {
        self.lookahead.as_deref()
    }

    pub fn set_lookahead(&mut self, queue: Option<Vec<Color>>) {
        self.lookahead = queue;
    }

    /// All cells in creation order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Ids of assigned tiles in assignment order.
    pub fn tile_ids(&self) -> &[TileId] {
        &self.tiles
    }

    /// Assigned tiles, in cell creation order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().filter_map(Cell::tile)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn cell_at(&self, coord: Coord) -> Option<&Cell> {
        self.cell_index(coord).map(|index| &self.cells[index])
    }

    /// Returns the cell at `coord`, creating and registering it first if needed.
    pub fn cell_at_or_insert(&mut self, coord: Coord) -> &Cell {
        let index = match self.cell_index(coord) {
            Some(index) => index,
            None => self.insert_cell(coord),
        };
        &self.cells[index]
    }

    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.cell_at(coord).and_then(Cell::tile)
    }

    /// Looks up where a tile currently sits.
    pub fn locate(&self, id: TileId) -> Option<Coord> {
        self.tiles().find(|tile| tile.id == id).and_then(Tile::cell)
    }

    /// Closest cell to `point` within one cell unit on both axes.
    pub fn nearest_cell(&self, point: Point) -> Option<&Cell> {
        self.nearest_cell_within(point, 1.0)
    }

    /// Closest cell within `max` of `point` on both axes, ties going to the earlier created cell.
    pub fn nearest_cell_within(&self, point: Point, max: f64) -> Option<&Cell> {
        let (x_min, x_max) = (point.x - max, point.x + max);
        let (y_min, y_max) = (point.y - max, point.y + max);
        let mut best = max * max;
        let mut nearest = None;
        for cell in &self.cells {
            let Point { x, y } = cell.position;
            if x_min <= x && x <= x_max && y_min <= y && y <= y_max {
                let distance = cell.position.distance_squared(point);
                if distance < best {
                    best = distance;
                    nearest = Some(cell);
                }
            }
        }
        nearest
    }

    pub fn filled_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| !cell.is_empty())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_empty())
    }

    /// Existing neighbours of `coord`, in direction order.
    pub fn connected_cells(&self, coord: Coord) -> SmallVec<[Coord; 6]> {
        Direction::ALL
            .iter()
            .map(|&dir| coord.neighbor(dir))
            .filter(|neighbor| self.index.contains_key(neighbor))
            .collect()
    }

    /// Every cell on the line through `pivot` along `dir`, ordered from the `-dir` end.
    pub fn row(&self, pivot: Coord, dir: Direction) -> Vec<Coord> {
        self.row_indices(pivot, dir)
            .into_iter()
            .map(|index| self.cells[index].coord)
            .collect()
    }

    /// Whether `target` can be reached from `source` by walking through empty cells only.
    ///
    /// Neither end needs to be empty itself.
    pub fn reachable(&mut self, source: Coord, target: Coord) -> bool {
        let (Some(source), Some(target)) = (self.cell_index(source), self.cell_index(target))
        else {
            return false;
        };

        let flag = self.next_traversal();
        let mut queue = VecDeque::from([source]);
        while let Some(index) = queue.pop_front() {
            self.cells[index].mark = flag;
            for dir in Direction::ALL {
                let Some(next) = self.neighbor_index(index, dir) else {
                    continue;
                };
                if next == target {
                    return true;
                }
                let cell = &mut self.cells[next];
                if cell.is_empty() && cell.mark != flag {
                    cell.mark = flag;
                    queue.push_back(next);
                }
            }
        }
        false
    }

    pub fn set_hidden(&mut self, coord: Coord, hidden: bool) -> bool {
        match self.cell_index(coord) {
            Some(index) => {
                self.cells[index].hidden = hidden;
                true
            }
            None => false,
        }
    }

    pub fn set_selected(&mut self, coord: Coord, selected: bool) -> bool {
        match self.tile_mut(coord) {
            Some(tile) => {
                tile.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Recolors the tile at `coord`, returning whether there was one.
    pub fn paint(&mut self, coord: Coord, color: Color) -> bool {
        match self.tile_mut(coord) {
            Some(tile) => {
                tile.color = color;
                true
            }
            None => false,
        }
    }

    /// Mints a tile with a fresh id. It joins the board only once assigned.
    pub fn new_tile(&mut self, color: Color) -> Tile {
        let id = TileId::new(self.next_tile_id);
        self.next_tile_id = self.next_tile_id.wrapping_add(1);
        Tile::new(id, color)
    }

    /// Places `tile` on the empty cell at `coord`.
    pub fn assign(&mut self, coord: Coord, tile: Tile) -> Result<()> {
        let index = self.cell_index(coord).ok_or(BoardError::UnknownCell)?;
        if !self.cells[index].is_empty() {
            return Err(BoardError::CellOccupied);
        }
        self.place(index, tile);
        Ok(())
    }

    /// Moves the tile at `from` onto the empty cell at `to`.
    ///
    /// Returns `Ok(false)` when there is nothing to move.
    pub fn relocate(&mut self, to: Coord, from: Coord, slide: bool) -> Result<bool> {
        let to = self.cell_index(to).ok_or(BoardError::UnknownCell)?;
        let from = self.cell_index(from).ok_or(BoardError::UnknownCell)?;
        if self.cells[from].is_empty() || to == from {
            return Ok(false);
        }
        if !self.cells[to].is_empty() {
            return Err(BoardError::CellOccupied);
        }
        Ok(self.shift(to, from, slide))
    }

    /// Takes the tile off the cell at `coord`, if any. This is the only way tiles leave.
    pub fn unassign(&mut self, coord: Coord, collected: bool) -> Option<Tile> {
        let index = self.cell_index(coord)?;
        self.detach(index, collected)
    }

    /// Checks that the registry and the cell slots describe the same set of tiles.
    pub fn is_consistent(&self) -> bool {
        let mut held = 0;
        for cell in &self.cells {
            if let Some(tile) = &cell.tile {
                if tile.cell != Some(cell.coord) || !self.tiles.contains(&tile.id) {
                    return false;
                }
                held += 1;
            }
        }
        held == self.tiles.len()
            && self.index.len() == self.cells.len()
            && self
                .cells
                .iter()
                .enumerate()
                .all(|(index, cell)| self.index.get(&cell.coord) == Some(&index))
    }

    pub(crate) fn cell_index(&self, coord: Coord) -> Option<usize> {
        self.index.get(&coord).copied()
    }

    pub(crate) fn neighbor_index(&self, index: usize, dir: Direction) -> Option<usize> {
        self.cell_index(self.cells[index].coord.neighbor(dir))
    }

    pub(crate) fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub(crate) fn row_indices(&self, pivot: Coord, dir: Direction) -> Vec<usize> {
        let Some(pivot_index) = self.cell_index(pivot) else {
            return Vec::new();
        };

        let mut row: Vec<usize> = (1..)
            .map_while(|distance| self.cell_index(pivot.step(dir, -distance)))
            .collect();
        row.reverse();
        row.push(pivot_index);
        row.extend((1..).map_while(|distance| self.cell_index(pivot.step(dir, distance))));
        row
    }

    pub(crate) fn place(&mut self, index: usize, mut tile: Tile) {
        debug_assert!(self.cells[index].is_empty());
        tile.slide = false;
        tile.cell = Some(self.cells[index].coord);
        self.tiles.push(tile.id);
        self.cells[index].tile = Some(tile);
    }

    /// Moves a tile between cells; `to` must already be empty.
    pub(crate) fn shift(&mut self, to: usize, from: usize, slide: bool) -> bool {
        debug_assert!(self.cells[to].is_empty());
        let Some(mut tile) = self.cells[from].tile.take() else {
            return false;
        };
        tile.slide = slide;
        tile.cell = Some(self.cells[to].coord);
        self.cells[to].tile = Some(tile);
        true
    }

    pub(crate) fn detach(&mut self, index: usize, collected: bool) -> Option<Tile> {
        let mut tile = self.cells[index].tile.take()?;
        tile.collected = collected;
        tile.cell = None;
        if let Some(position) = self.tiles.iter().position(|&id| id == tile.id) {
            self.tiles.remove(position);
        }
        Some(tile)
    }

    fn tile_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        let index = self.cell_index(coord)?;
        self.cells[index].tile.as_mut()
    }

    fn insert_cell(&mut self, coord: Coord) -> usize {
        let index = self.cells.len();
        self.cells.push(Cell::new(coord));
        self.index.insert(coord, index);
        index
    }

    fn next_traversal(&mut self) -> u32 {
        if self.traversal == u32::MAX {
            for cell in &mut self.cells {
                cell.mark = 0;
            }
            self.traversal = 0;
        }
        self.traversal += 1;
        self.traversal
    }
}
