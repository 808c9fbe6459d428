//! Error types for grid and obstacle validation.
//!
//! Every variant is raised by the validator; the scanner is total over
//! validated input and never fails.

use crate::geometry::{Axis, ObstacleCoord, ObstacleRecord, Point};
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;

/// Errors arising from validating a grid, its obstacles and a query point.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// A grid dimension or the cell size is non-positive, or the grid is
    /// too large to represent.
    InvalidGrid {
        /// Which parameter failed (`"width"`, `"height"` or `"cell size"`).
        name: &'static str,
        /// The offending value.
        value: i64,
        /// Human-readable description of the violated constraint.
        constraint: String,
    },
    /// An obstacle record does not have exactly four coordinates.
    MalformedObstacle {
        /// Position of the record in the obstacle list.
        index: usize,
        /// The record as supplied.
        record: ObstacleRecord,
    },
    /// An obstacle coordinate is out of bounds, not a multiple of the
    /// cell size, or the rectangle is inverted.
    InvalidObstacle {
        /// Position of the record in the obstacle list.
        index: usize,
        /// The record as supplied.
        record: ObstacleRecord,
        /// What is wrong with it.
        fault: ObstacleFault,
    },
    /// The query point lies outside the grid.
    InvalidPosition {
        /// The offending point.
        point: Point,
        /// Axes along which the point is out of range.
        axes: SmallVec<[Axis; 2]>,
        /// Grid extent along x.
        max_x: i64,
        /// Grid extent along y.
        max_y: i64,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid {
                name,
                value,
                constraint,
            } => write!(f, "invalid grid {name} {value}: {constraint}"),
            Self::MalformedObstacle { index, record } => write!(
                f,
                "obstacle #{index} {:?} is not a valid obstacle description: expected 4 coordinates, got {}",
                record.as_slice(),
                record.len()
            ),
            Self::InvalidObstacle {
                index,
                record,
                fault,
            } => write!(
                f,
                "obstacle #{index} {:?} describes an invalid obstacle: {fault}",
                record.as_slice()
            ),
            Self::InvalidPosition {
                point,
                axes,
                max_x,
                max_y,
            } => {
                write!(f, "invalid robot position {point}: ")?;
                for (i, axis) in axes.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    let max = match axis {
                        Axis::X => max_x,
                        Axis::Y => max_y,
                    };
                    write!(f, "{axis} outside [0, {max}]")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for GeometryError {}

/// The specific reason an obstacle record was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleFault {
    /// A coordinate is negative or beyond the grid extent on its axis.
    OutOfBounds {
        /// Which coordinate.
        coord: ObstacleCoord,
        /// Its value.
        value: i64,
        /// Grid extent on the coordinate's axis.
        max: i64,
    },
    /// A coordinate is not a multiple of the cell size.
    Misaligned {
        /// Which coordinate.
        coord: ObstacleCoord,
        /// Its value.
        value: i64,
        /// The grid cell size.
        cell_size: i64,
    },
    /// The far edge lies before the near edge (`x1 > x2` or `y1 > y2`).
    Inverted {
        /// Axis along which the rectangle is inverted.
        axis: Axis,
    },
}

impl fmt::Display for ObstacleFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, value, max } => {
                write!(f, "{coord} = {value} outside [0, {max}]")
            }
            Self::Misaligned {
                coord,
                value,
                cell_size,
            } => write!(
                f,
                "{coord} = {value} is not a multiple of cell size {cell_size}"
            ),
            Self::Inverted { axis } => {
                write!(f, "{axis}1 is greater than {axis}2")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn malformed_message_names_record() {
        let err = GeometryError::MalformedObstacle {
            index: 2,
            record: smallvec![10, 20, 30],
        };
        assert_eq!(
            err.to_string(),
            "obstacle #2 [10, 20, 30] is not a valid obstacle description: expected 4 coordinates, got 3"
        );
    }

    #[test]
    fn invalid_obstacle_message_names_coordinate() {
        let err = GeometryError::InvalidObstacle {
            index: 0,
            record: smallvec![7, 0, 10, 10],
            fault: ObstacleFault::Misaligned {
                coord: ObstacleCoord::X1,
                value: 7,
                cell_size: 10,
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("[7, 0, 10, 10]"), "{msg}");
        assert!(msg.contains("x1 = 7 is not a multiple of cell size 10"), "{msg}");
    }

    #[test]
    fn position_message_lists_each_axis() {
        let err = GeometryError::InvalidPosition {
            point: Point::new(51.0, -1.0),
            axes: smallvec![Axis::X, Axis::Y],
            max_x: 50,
            max_y: 40,
        };
        assert_eq!(
            err.to_string(),
            "invalid robot position (51.0, -1.0): x outside [0, 50], y outside [0, 40]"
        );
    }

    #[test]
    fn inverted_message() {
        let fault = ObstacleFault::Inverted { axis: Axis::Y };
        assert_eq!(fault.to_string(), "y1 is greater than y2");
    }
}
