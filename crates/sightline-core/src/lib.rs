//! Core geometry for the Sightline obstacle scanner.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid/obstacle/point data model, the validator that establishes the
//! geometric preconditions, and the directional scanner that finds the
//! nearest obstruction along each cardinal direction.
//!
//! # Pipeline
//!
//! 1. [`Grid::new`] checks the grid dimensions and cell size.
//! 2. [`validate`] (or [`Scene::new`]) checks every obstacle record and the
//!    query point against the grid, producing typed [`Obstacle`]s.
//! 3. [`scan`] (or [`Scene::scan`]) computes a [`DirectionResult`].
//!
//! ```
//! use sightline_core::{Direction, Grid, Point, Scene};
//!
//! let grid = Grid::new(5, 5, 10).unwrap();
//! let scene = Scene::new(grid, &[[30i64, 10, 40, 30]], Point::new(20.0, 20.0)).unwrap();
//! let result = scene.scan();
//! assert_eq!(result.get(Direction::Right), Point::new(30.0, 20.0));
//! assert_eq!(result.get(Direction::Left), Point::new(0.0, 20.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod geometry;
pub mod scan;
pub mod validate;

pub use direction::{Direction, DirectionResult};
pub use error::{GeometryError, ObstacleFault};
pub use geometry::{Axis, Grid, Obstacle, ObstacleCoord, ObstacleRecord, Point};
pub use scan::{scan, Sweep};
pub use validate::{validate, Scene};
