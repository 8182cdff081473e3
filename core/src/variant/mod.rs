//! Move rules of the three game variants, built on top of the board operations.
//!
//! Scoring, timers and animation pacing stay with the caller; these types only decide which
//! board operations a player action triggers and report what happened.

use serde::{Deserialize, Serialize};

use crate::*;

pub use flip::*;
pub use jump::*;
pub use slide::*;

mod flip;
mod jump;
mod slide;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Flip,
    Jump,
    Slide,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub radius: u32,
    /// Minimum straight run that gets collected, `None` for flood matching.
    pub run_length: Option<usize>,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Flip, Variant::Jump, Variant::Slide];

    pub const fn config(self) -> VariantConfig {
        match self {
            Self::Flip => VariantConfig {
                radius: FLIP_RADIUS,
                run_length: None,
            },
            Self::Jump => VariantConfig {
                radius: JUMP_RADIUS,
                run_length: Some(JUMP_RUN),
            },
            Self::Slide => VariantConfig {
                radius: SLIDE_RADIUS,
                run_length: Some(SLIDE_RUN),
            },
        }
    }

    pub const fn board_config(self, seed: u64) -> BoardConfig {
        BoardConfig::new(self.config().radius, seed)
    }

    /// Stable mode number, used to key persisted records.
    pub const fn mode(self) -> u8 {
        match self {
            Self::Flip => 1,
            Self::Jump => 2,
            Self::Slide => 3,
        }
    }

    pub const fn from_mode(mode: u8) -> Option<Self> {
        match mode {
            1 => Some(Self::Flip),
            2 => Some(Self::Jump),
            3 => Some(Self::Slide),
            _ => None,
        }
    }
}
