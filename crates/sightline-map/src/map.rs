//! The [`MapDescription`] type and its text format.

use crate::error::MapError;
use sightline_core::{GeometryError, Grid, ObstacleRecord, Point, Scene};
use std::path::Path;
use std::str::FromStr;

/// Raw numbers read from a map description, before geometric validation.
///
/// Obstacle records keep however many integers their line held, so that a
/// malformed record is reported by the validator with its index rather
/// than as a parse failure.
///
/// # Examples
///
/// ```
/// use sightline_core::Point;
/// use sightline_map::MapDescription;
///
/// let map: MapDescription = "5 5 10\n1\n30 10 40 30\n".parse().unwrap();
/// assert_eq!((map.width, map.height, map.cell_size), (5, 5, 10));
///
/// let scene = map.into_scene(Point::new(20.0, 20.0)).unwrap();
/// assert_eq!(scene.scan().right, Point::new(30.0, 20.0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapDescription {
    /// Number of cells along x.
    pub width: i64,
    /// Number of cells along y.
    pub height: i64,
    /// Physical units per cell.
    pub cell_size: i64,
    /// Obstacle records in file order.
    pub obstacles: Vec<ObstacleRecord>,
}

impl MapDescription {
    /// Parse a map description.
    ///
    /// Lines after the declared number of obstacle records are ignored.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (line, header) = lines.next().ok_or(MapError::MissingLine {
            line: 1,
            expected: "grid header",
        })?;
        let [width, height, cell_size] = fixed_fields::<3>(line, header)?;

        let (line, count) = lines.next().ok_or(MapError::MissingLine {
            line: 2,
            expected: "obstacle count",
        })?;
        let [count] = fixed_fields::<1>(line, count)?;
        let count =
            usize::try_from(count).map_err(|_| MapError::NegativeCount { line, value: count })?;

        let mut obstacles = Vec::with_capacity(count.min(1 << 16));
        for n in 0..count {
            let (line, record) = lines.next().ok_or(MapError::MissingLine {
                line: n + 3,
                expected: "obstacle record",
            })?;
            obstacles.push(integers(line, record)?);
        }

        Ok(Self {
            width,
            height,
            cell_size,
            obstacles,
        })
    }

    /// Read and parse the map description at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&text)?;
        log::debug!(
            "loaded map '{}': {}x{} cells of size {}, {} obstacles",
            path.display(),
            map.width,
            map.height,
            map.cell_size,
            map.obstacles.len()
        );
        Ok(map)
    }

    /// Check the grid parameters.
    pub fn grid(&self) -> Result<Grid, GeometryError> {
        Grid::new(self.width, self.height, self.cell_size)
    }

    /// Validate the map together with a robot position.
    ///
    /// Grid parameters are checked first, then the obstacle records, then
    /// the robot position.
    pub fn into_scene(self, robot: Point) -> Result<Scene, GeometryError> {
        let grid = self.grid()?;
        Scene::new(grid, &self.obstacles, robot)
    }
}

impl FromStr for MapDescription {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn integers(line: usize, text: &str) -> Result<ObstacleRecord, MapError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| MapError::InvalidNumber {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

fn fixed_fields<const N: usize>(line: usize, text: &str) -> Result<[i64; N], MapError> {
    let values = integers(line, text)?;
    <[i64; N]>::try_from(values.as_slice()).map_err(|_| MapError::FieldCount {
        line,
        expected: N,
        found: values.len(),
    })
}
