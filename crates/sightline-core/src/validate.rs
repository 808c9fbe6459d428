//! Obstacle and position validation, and the validated [`Scene`].

use crate::direction::DirectionResult;
use crate::error::{GeometryError, ObstacleFault};
use crate::geometry::{Axis, Grid, Obstacle, ObstacleCoord, ObstacleRecord, Point};
use crate::scan::scan;

/// Check obstacle records and a query point against `grid`.
///
/// Records are checked in list order. For each record the coordinate
/// count is checked first, then `x1`, `x2`, `y1`, `y2` (bounds before
/// alignment), then orientation. The point is checked last. The first
/// failure is returned; on success the records are converted into
/// [`Obstacle`]s in their original order.
///
/// Boundaries are inclusive: a point at `x = width * cell_size` is valid.
pub fn validate<R: AsRef<[i64]>>(
    grid: &Grid,
    records: &[R],
    point: Point,
) -> Result<Vec<Obstacle>, GeometryError> {
    let obstacles = records
        .iter()
        .enumerate()
        .map(|(index, record)| check_obstacle(grid, index, record.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    check_position(grid, point)?;
    Ok(obstacles)
}

fn check_obstacle(grid: &Grid, index: usize, record: &[i64]) -> Result<Obstacle, GeometryError> {
    let &[x1, y1, x2, y2] = record else {
        return Err(GeometryError::MalformedObstacle {
            index,
            record: ObstacleRecord::from_slice(record),
        });
    };
    let obstacle = Obstacle::new(x1, y1, x2, y2);
    let reject = |fault| GeometryError::InvalidObstacle {
        index,
        record: ObstacleRecord::from_slice(record),
        fault,
    };

    let s = grid.cell_size();
    for coord in [
        ObstacleCoord::X1,
        ObstacleCoord::X2,
        ObstacleCoord::Y1,
        ObstacleCoord::Y2,
    ] {
        let value = obstacle.coord(coord);
        let max = grid.extent(coord.axis());
        if value < 0 || value > max {
            return Err(reject(ObstacleFault::OutOfBounds { coord, value, max }));
        }
        if value % s != 0 {
            return Err(reject(ObstacleFault::Misaligned {
                coord,
                value,
                cell_size: s,
            }));
        }
    }

    if x1 > x2 {
        return Err(reject(ObstacleFault::Inverted { axis: Axis::X }));
    }
    if y1 > y2 {
        return Err(reject(ObstacleFault::Inverted { axis: Axis::Y }));
    }
    Ok(obstacle)
}

fn check_position(grid: &Grid, point: Point) -> Result<(), GeometryError> {
    let axes = grid.offending_axes(point);
    if axes.is_empty() {
        return Ok(());
    }
    Err(GeometryError::InvalidPosition {
        point,
        axes,
        max_x: grid.extent(Axis::X),
        max_y: grid.extent(Axis::Y),
    })
}

/// A grid, its obstacles and a robot position that passed validation.
///
/// # Examples
///
/// ```
/// use sightline_core::{Grid, Point, Scene};
///
/// let grid = Grid::new(5, 5, 10).unwrap();
/// let robot = Point::new(20.0, 20.0);
///
/// assert!(Scene::new(grid, &[vec![0i64, 0, 10, 10]], robot).is_ok());
/// assert!(Scene::new(grid, &[vec![0i64, 0, 10]], robot).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    grid: Grid,
    obstacles: Vec<Obstacle>,
    robot: Point,
}

impl Scene {
    /// Validate `records` and `robot` against `grid`. See [`validate`].
    pub fn new<R: AsRef<[i64]>>(
        grid: Grid,
        records: &[R],
        robot: Point,
    ) -> Result<Self, GeometryError> {
        let obstacles = validate(&grid, records, robot)?;
        Ok(Self {
            grid,
            obstacles,
            robot,
        })
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The validated obstacles, in input order.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// The robot position.
    pub fn robot(&self) -> Point {
        self.robot
    }

    /// Scan outward from the robot in all four directions.
    pub fn scan(&self) -> DirectionResult {
        scan(&self.grid, &self.obstacles, self.robot)
    }
}
