use serde::{Deserialize, Serialize};

use crate::Direction;

/// Single lattice axis used for both `i` and `j`.
pub type Axis = i32;

/// Axial lattice coordinates `(i, j)`.
pub type Coord = (Axis, Axis);

/// `sin(60°)`, the horizontal spacing between neighbouring lattice columns.
pub const SIN_60: f64 = 0.866_025_403_784_438_6;

/// Planar position, in cell units.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Positive when `other` lies counterclockwise of `self`.
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

pub trait CoordExt {
    /// Moves `distance` steps along `dir`; negative distances walk the opposite way.
    fn step(self, dir: Direction, distance: Axis) -> Coord;

    fn neighbor(self, dir: Direction) -> Coord
    where
        Self: Sized,
    {
        self.step(dir, 1)
    }

    fn position(self) -> Point;
}

impl CoordExt for Coord {
    fn step(self, dir: Direction, distance: Axis) -> Coord {
        let (di, dj) = dir.offset();
        (self.0 + distance * di, self.1 + distance * dj)
    }

    fn position(self) -> Point {
        let (i, j) = self;
        Point::new(f64::from(i) * SIN_60, f64::from(j) + f64::from(i) / 2.0)
    }
}

/// Rounds half-way values up, without relying on `std` float intrinsics.
pub(crate) fn round_half_up(value: f64) -> isize {
    let shifted = value + 0.5;
    let truncated = shifted as isize;
    if (truncated as f64) > shifted {
        truncated - 1
    } else {
        truncated
    }
}
