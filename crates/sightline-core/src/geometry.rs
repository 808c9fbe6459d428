//! Grid, obstacle and point types.

use crate::error::GeometryError;
use smallvec::SmallVec;
use std::fmt;

/// A raw obstacle record as handed over by an input supplier.
///
/// Uses `SmallVec<[i64; 4]>` so well-formed records never allocate, while
/// still being able to carry the wrong number of coordinates until the
/// validator rejects them.
pub type ObstacleRecord = SmallVec<[i64; 4]>;

/// Coordinate axis of the physical plane.
///
/// `y` grows downward, matching image row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Names one of the four coordinates of an obstacle record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObstacleCoord {
    /// Left edge.
    X1,
    /// Top edge.
    Y1,
    /// Right edge.
    X2,
    /// Bottom edge.
    Y2,
}

impl ObstacleCoord {
    /// The axis this coordinate is measured along.
    pub fn axis(self) -> Axis {
        match self {
            Self::X1 | Self::X2 => Axis::X,
            Self::Y1 | Self::Y2 => Axis::Y,
        }
    }
}

impl fmt::Display for ObstacleCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X1 => write!(f, "x1"),
            Self::Y1 => write!(f, "y1"),
            Self::X2 => write!(f, "x2"),
            Self::Y2 => write!(f, "y2"),
        }
    }
}

/// A rectangular grid of `width * height` cells, each `cell_size` physical
/// units wide.
///
/// Immutable once constructed. The physical extent of the grid is
/// `[0, width * cell_size] x [0, height * cell_size]`.
///
/// # Examples
///
/// ```
/// use sightline_core::{Axis, Grid};
///
/// let grid = Grid::new(5, 3, 10).unwrap();
/// assert_eq!(grid.extent(Axis::X), 50);
/// assert_eq!(grid.extent(Axis::Y), 30);
/// assert!(Grid::new(0, 3, 10).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i64,
    height: i64,
    cell_size: i64,
}

impl Grid {
    /// Largest physical extent representable exactly as an `f64`.
    pub const MAX_EXTENT: i64 = 1 << 53;

    /// Create a grid, checking that every parameter is at least 1.
    ///
    /// Returns `Err(GeometryError::InvalidGrid)` naming the first
    /// offending parameter. Width and height are checked before the cell
    /// size, and an extent beyond [`Grid::MAX_EXTENT`] is rejected too.
    pub fn new(width: i64, height: i64, cell_size: i64) -> Result<Self, GeometryError> {
        for (name, value) in [("width", width), ("height", height)] {
            if value < 1 {
                return Err(GeometryError::InvalidGrid {
                    name,
                    value,
                    constraint: "must be at least 1".to_string(),
                });
            }
        }
        if cell_size < 1 {
            return Err(GeometryError::InvalidGrid {
                name: "cell size",
                value: cell_size,
                constraint: "must be at least 1".to_string(),
            });
        }
        for (name, cells) in [("width", width), ("height", height)] {
            let fits = cells
                .checked_mul(cell_size)
                .is_some_and(|extent| extent <= Self::MAX_EXTENT);
            if !fits {
                return Err(GeometryError::InvalidGrid {
                    name,
                    value: cells,
                    constraint: format!(
                        "{cells} cells of size {cell_size} exceed the maximum extent {}",
                        Self::MAX_EXTENT
                    ),
                });
            }
        }
        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    /// Number of cells along x.
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Number of cells along y.
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Physical units per cell.
    pub fn cell_size(&self) -> i64 {
        self.cell_size
    }

    /// Physical length of the grid along `axis`.
    pub fn extent(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.width * self.cell_size,
            Axis::Y => self.height * self.cell_size,
        }
    }

    /// Whether `point` lies inside the grid, boundary included.
    ///
    /// Non-finite coordinates are never contained.
    pub fn contains(&self, point: Point) -> bool {
        self.offending_axes(point).is_empty()
    }

    /// The axes along which `point` falls outside the grid.
    pub(crate) fn offending_axes(&self, point: Point) -> SmallVec<[Axis; 2]> {
        let mut out = SmallVec::new();
        if !(0.0..=self.extent(Axis::X) as f64).contains(&point.x) {
            out.push(Axis::X);
        }
        if !(0.0..=self.extent(Axis::Y) as f64).contains(&point.y) {
            out.push(Axis::Y);
        }
        out
    }
}

/// A point in physical units. Not required to be aligned to the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (grows downward).
    pub y: f64,
}

impl Point {
    /// Construct a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangular obstacle in physical units.
///
/// `(x1, y1)` is the top-left corner and `(x2, y2)` the bottom-right one.
/// Obstacles produced by [`validate`](crate::validate) are aligned to the
/// cell grid, in bounds and never inverted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Obstacle {
    /// Left edge.
    pub x1: i64,
    /// Top edge.
    pub y1: i64,
    /// Right edge.
    pub x2: i64,
    /// Bottom edge.
    pub y2: i64,
}

impl Obstacle {
    /// Construct an obstacle without validation.
    pub const fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Value of the named coordinate.
    pub fn coord(&self, which: ObstacleCoord) -> i64 {
        match which {
            ObstacleCoord::X1 => self.x1,
            ObstacleCoord::Y1 => self.y1,
            ObstacleCoord::X2 => self.x2,
            ObstacleCoord::Y2 => self.y2,
        }
    }

    /// Whether `point` lies strictly inside the rectangle on both axes.
    pub fn strictly_contains(&self, point: Point) -> bool {
        (self.x1 as f64) < point.x
            && point.x < self.x2 as f64
            && (self.y1 as f64) < point.y
            && point.y < self.y2 as f64
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}, {}]", self.x1, self.y1, self.x2, self.y2)
    }
}
