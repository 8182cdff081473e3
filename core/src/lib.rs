#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use lattice::*;
pub use tile::*;
pub use types::*;
pub use variant::*;

mod board;
mod error;
mod fill;
mod lattice;
mod matching;
mod mutators;
mod tile;
mod types;
mod variant;

/// Parameters for a fresh board session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub radius: u32,
    pub seed: u64,
}

impl BoardConfig {
    pub const fn new(radius: u32, seed: u64) -> Self {
        Self { radius, seed }
    }

    /// Number of cells produced by `Board::setup` for this radius.
    pub const fn total_cells(&self) -> usize {
        lattice_size(self.radius)
    }
}

/// Centered hexagonal number `1 + 3r(r - 1)`, with radius zero treated as one cell.
pub const fn lattice_size(radius: u32) -> usize {
    let r = if radius == 0 { 1 } else { radius as usize };
    1 + 3 * r * (r - 1)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardUpdate {
    NoChange,
    Changed,
}

impl BoardUpdate {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

impl From<bool> for BoardUpdate {
    fn from(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::NoChange
        }
    }
}
