//! Directional nearest-obstacle scanning.
//!
//! A [`Sweep`] holds four running candidates, one per direction, each
//! starting at the grid wall directly ahead of the query point. Every
//! obstacle can only pull a candidate closer (`min` toward `+x`/`+y`,
//! `max` toward `-x`/`-y`), so the result does not depend on obstacle
//! order and two sweeps over disjoint obstacle sets can be merged.

use crate::direction::DirectionResult;
use crate::geometry::{Axis, Grid, Obstacle, Point};

/// Running state of a four-direction scan from a fixed origin.
///
/// # Examples
///
/// ```
/// use sightline_core::{Grid, Obstacle, Point, Sweep};
///
/// let grid = Grid::new(5, 5, 10).unwrap();
/// let origin = Point::new(20.0, 20.0);
///
/// let mut a = Sweep::new(&grid, origin);
/// a.observe(&Obstacle::new(30, 10, 40, 30));
/// let mut b = Sweep::new(&grid, origin);
/// b.observe(&Obstacle::new(0, 0, 10, 40));
///
/// let result = a.merge(b).finish();
/// assert_eq!(result.right, Point::new(30.0, 20.0));
/// assert_eq!(result.left, Point::new(10.0, 20.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    origin: Point,
    /// y of the nearest crossing toward `-y`.
    up: f64,
    /// x of the nearest crossing toward `+x`.
    right: f64,
    /// y of the nearest crossing toward `+y`.
    down: f64,
    /// x of the nearest crossing toward `-x`.
    left: f64,
    contained: bool,
}

impl Sweep {
    /// Start a sweep from `origin` with every candidate on the grid wall.
    pub fn new(grid: &Grid, origin: Point) -> Self {
        Self {
            origin,
            up: 0.0,
            right: grid.extent(Axis::X) as f64,
            down: grid.extent(Axis::Y) as f64,
            left: 0.0,
            contained: false,
        }
    }

    /// Whether some observed obstacle strictly contains the origin.
    pub fn is_contained(&self) -> bool {
        self.contained
    }

    /// Tighten the candidates against one obstacle.
    ///
    /// An obstacle whose row span covers the origin blocks horizontally
    /// when the origin is at or beyond one of its vertical edges. Otherwise,
    /// if the origin is strictly between its vertical edges, it blocks
    /// vertically, or contains the origin outright.
    pub fn observe(&mut self, obstacle: &Obstacle) {
        let Point { x, y } = self.origin;
        let x1 = obstacle.x1 as f64;
        let y1 = obstacle.y1 as f64;
        let x2 = obstacle.x2 as f64;
        let y2 = obstacle.y2 as f64;
        let spans_row = y1 <= y && y <= y2;

        if x <= x1 {
            if spans_row {
                self.right = self.right.min(x1);
            }
        } else if x2 <= x {
            if spans_row {
                self.left = self.left.max(x2);
            }
        } else if y <= y1 {
            self.down = self.down.min(y1);
        } else if y2 <= y {
            self.up = self.up.max(y2);
        } else {
            self.contained = true;
        }
    }

    /// Combine with a sweep over a disjoint set of obstacles from the same
    /// origin.
    pub fn merge(self, other: Sweep) -> Sweep {
        debug_assert_eq!(self.origin, other.origin, "merging sweeps from different origins");
        Sweep {
            origin: self.origin,
            up: self.up.max(other.up),
            right: self.right.min(other.right),
            down: self.down.min(other.down),
            left: self.left.max(other.left),
            contained: self.contained || other.contained,
        }
    }

    /// Resolve the candidates into crossing points.
    ///
    /// A contained origin has zero clearance, so every direction resolves
    /// to the origin itself.
    pub fn finish(self) -> DirectionResult {
        let o = self.origin;
        if self.contained {
            return DirectionResult::collapsed(o);
        }
        DirectionResult {
            up: Point::new(o.x, self.up),
            right: Point::new(self.right, o.y),
            down: Point::new(o.x, self.down),
            left: Point::new(self.left, o.y),
        }
    }
}

/// Find the nearest grid wall or obstacle edge from `point` in each of the
/// four cardinal directions.
///
/// Total over input accepted by [`validate`](crate::validate); performs no
/// re-validation. A single pass over `obstacles` with constant extra state.
///
/// # Examples
///
/// ```
/// use sightline_core::{scan, Grid, Point};
///
/// let grid = Grid::new(5, 5, 10).unwrap();
/// let r = scan(&grid, &[], Point::new(20.0, 20.0));
/// assert_eq!(r.up, Point::new(20.0, 0.0));
/// assert_eq!(r.right, Point::new(50.0, 20.0));
/// assert_eq!(r.down, Point::new(20.0, 50.0));
/// assert_eq!(r.left, Point::new(0.0, 20.0));
/// ```
pub fn scan(grid: &Grid, obstacles: &[Obstacle], point: Point) -> DirectionResult {
    obstacles
        .iter()
        .fold(Sweep::new(grid, point), |mut sweep, obstacle| {
            sweep.observe(obstacle);
            sweep
        })
        .finish()
}
