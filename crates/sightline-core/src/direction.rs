//! The four cardinal scan directions and the per-direction result record.

use crate::geometry::Point;
use std::fmt;

/// A cardinal scan direction.
///
/// Directions are labelled clockwise by angle starting from "up"; since
/// `y` grows downward, [`Direction::Up`] scans toward `-y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Toward `-y` (0°).
    Up,
    /// Toward `+x` (90°).
    Right,
    /// Toward `+y` (180°).
    Down,
    /// Toward `-x` (270°).
    Left,
}

impl Direction {
    /// All four directions in angle order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Clockwise angle in degrees, with 0 pointing up.
    pub fn angle(self) -> u16 {
        match self {
            Self::Up => 0,
            Self::Right => 90,
            Self::Down => 180,
            Self::Left => 270,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Right => write!(f, "right"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
        }
    }
}

/// The nearest grid-wall or obstacle-edge crossing in each direction.
///
/// Created fresh by every scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionResult {
    /// Nearest crossing toward `-y`.
    pub up: Point,
    /// Nearest crossing toward `+x`.
    pub right: Point,
    /// Nearest crossing toward `+y`.
    pub down: Point,
    /// Nearest crossing toward `-x`.
    pub left: Point,
}

impl DirectionResult {
    /// A result with every direction pinned to `point` (zero clearance).
    pub fn collapsed(point: Point) -> Self {
        Self {
            up: point,
            right: point,
            down: point,
            left: point,
        }
    }

    /// The crossing found in `direction`.
    pub fn get(&self, direction: Direction) -> Point {
        match direction {
            Direction::Up => self.up,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Left => self.left,
        }
    }

    /// `(direction, crossing)` pairs in angle order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Point)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Distance from `from` to the crossing in `direction`.
    pub fn clearance(&self, direction: Direction, from: Point) -> f64 {
        from.distance(self.get(direction))
    }
}
