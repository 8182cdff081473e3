use serde::{Deserialize, Serialize};

use crate::*;

/// Axial offsets for directions 0 through 5, in cyclic order.
///
/// Direction `d` and `d + 3` are opposite. Note that an offset points the opposite way from
/// the planar vector of the same direction, so that rotating or collapsing along `d` moves
/// tiles along `Direction::to_vector(d)`.
pub const NEIGHBOR_OFFSETS: [(Axis, Axis); 6] = [(-1, 0), (0, -1), (1, -1), (1, 0), (0, 1), (-1, 1)];

/// Unit vectors at `(d + 0.5) * 60°`.
const DIRECTION_VECTORS: [Point; 6] = [
    Point::new(SIN_60, 0.5),
    Point::new(0.0, 1.0),
    Point::new(-SIN_60, 0.5),
    Point::new(-SIN_60, -0.5),
    Point::new(0.0, -1.0),
    Point::new(SIN_60, -0.5),
];

pub const fn neighbor_offsets() -> [(Axis, Axis); 6] {
    NEIGHBOR_OFFSETS
}

/// One of the six lattice directions, always normalized into `0..6`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Direction(u8);

impl Direction {
    pub const COUNT: usize = 6;

    pub const ALL: [Direction; Self::COUNT] = [
        Direction(0),
        Direction(1),
        Direction(2),
        Direction(3),
        Direction(4),
        Direction(5),
    ];

    /// Wraps any index into `0..6`, so `-1` becomes `5` and `7` becomes `1`.
    pub const fn new(index: isize) -> Self {
        Self(index.rem_euclid(Self::COUNT as isize) as u8)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn opposite(self) -> Self {
        Self((self.0 + 3) % Self::COUNT as u8)
    }

    pub const fn offset(self) -> (Axis, Axis) {
        NEIGHBOR_OFFSETS[self.0 as usize]
    }

    pub const fn to_vector(self) -> Point {
        DIRECTION_VECTORS[self.0 as usize]
    }

    /// Picks the direction whose vector is angularly closest to `(dx, dy)`.
    ///
    /// The nearest direction by angle is the one with the largest dot product, so this needs
    /// no trigonometry. A drag exactly on a sector border goes to the counterclockwise
    /// neighbour, so `(-1, 0)` is direction 3 and `(1, 0)` is direction 0. A zero vector maps
    /// to direction 0.
    pub fn from_vector(dx: f64, dy: f64) -> Self {
        let drag = Point::new(dx, dy);
        let tolerance = (dx.abs() + dy.abs()) * 1e-9;
        let mut best = Self(0);
        let mut best_dot = drag.dot(DIRECTION_VECTORS[0]);
        for dir in &Self::ALL[1..] {
            let vector = dir.to_vector();
            let dot = drag.dot(vector);
            let tied = (dot - best_dot).abs() <= tolerance;
            if (!tied && dot > best_dot) || (tied && drag.cross(vector) > 0.0) {
                best = *dir;
                best_dot = dot;
            }
        }
        best
    }
}

impl From<Direction> for usize {
    fn from(dir: Direction) -> Self {
        dir.index()
    }
}
