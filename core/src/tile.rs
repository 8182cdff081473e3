use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Tile colors. `Marked` is a penalty sentinel that never takes part in matching.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "y")]
    Yellow,
    #[serde(rename = "b")]
    Blue,
    #[serde(rename = "r")]
    Red,
    #[serde(rename = "g")]
    Green,
    #[serde(rename = "p")]
    Purple,
    #[serde(rename = "x")]
    Marked,
}

impl Color {
    /// Colors drawn by the fill policy.
    pub const PALETTE: [Color; 5] = [
        Color::Yellow,
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Purple,
    ];

    pub const fn is_matchable(self) -> bool {
        !matches!(self, Self::Marked)
    }

    pub const fn code(self) -> char {
        match self {
            Self::Yellow => 'y',
            Self::Blue => 'b',
            Self::Red => 'r',
            Self::Green => 'g',
            Self::Purple => 'p',
            Self::Marked => 'x',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        Some(match code {
            'y' => Self::Yellow,
            'b' => Self::Blue,
            'r' => Self::Red,
            'g' => Self::Green,
            'p' => Self::Purple,
            'x' => Self::Marked,
            _ => return None,
        })
    }

    pub(crate) fn random(rng: &mut SmallRng) -> Self {
        use rand::prelude::*;

        Self::PALETTE[rng.random_range(0..Self::PALETTE.len())]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(u32);

impl TileId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// A colored game piece. Only the board hands these out, see `Board::new_tile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub(crate) id: TileId,
    pub(crate) color: Color,
    pub(crate) selected: bool,
    pub(crate) collected: bool,
    pub(crate) slide: bool,
    pub(crate) jump: bool,
    pub(crate) cell: Option<Coord>,
}

impl Tile {
    pub(crate) const fn new(id: TileId, color: Color) -> Self {
        Self {
            id,
            color,
            selected: false,
            collected: false,
            slide: false,
            jump: false,
            cell: None,
        }
    }

    pub const fn id(&self) -> TileId {
        self.id
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the tile left the board through a match rather than a silent discard.
    pub const fn is_collected(&self) -> bool {
        self.collected
    }

    /// Arrived at its current cell by sliding from a neighbour.
    pub const fn is_sliding(&self) -> bool {
        self.slide
    }

    /// Arrived at its current cell by wrapping around a rotated row.
    pub const fn is_jumping(&self) -> bool {
        self.jump
    }

    /// Coordinates of the holding cell, `None` once unassigned.
    pub const fn cell(&self) -> Option<Coord> {
        self.cell
    }
}
