//! Sightline: nearest-obstacle sightlines for a robot on an obstacle grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sightline sub-crates, and hosts the `sightline` command-line tool.
//!
//! # Quick start
//!
//! ```rust
//! use sightline::prelude::*;
//!
//! let map: MapDescription = "5 5 10\n2\n30 10 40 30\n0 40 50 50\n".parse().unwrap();
//! let scene = map.into_scene(Point::new(20.0, 20.0)).unwrap();
//! let result = scene.scan();
//!
//! assert_eq!(result.get(Direction::Right), Point::new(30.0, 20.0));
//! assert_eq!(result.get(Direction::Down), Point::new(20.0, 40.0));
//! assert_eq!(result.get(Direction::Up), Point::new(20.0, 0.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sightline-core` | Grid, obstacles, validation, scanning |
//! | [`map`] | `sightline-map` | Map description text format |
//! | [`render`] | `sightline-render` | PNG visualization |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod report;

/// Grid geometry, validation and scanning (`sightline-core`).
pub use sightline_core as types;

/// Map description parsing and loading (`sightline-map`).
pub use sightline_map as map;

/// Raster visualization (`sightline-render`).
pub use sightline_render as render;

/// Common imports for typical Sightline usage.
///
/// ```rust
/// use sightline::prelude::*;
/// ```
pub mod prelude {
    // Geometry and scanning
    pub use sightline_core::{
        scan, validate, Direction, DirectionResult, Grid, Obstacle, Point, Scene, Sweep,
    };

    // Errors
    pub use sightline_core::GeometryError;
    pub use sightline_map::MapError;
    pub use sightline_render::RenderError;

    // Input and output
    pub use sightline_map::MapDescription;
    pub use sightline_render::{render, save_png, RenderConfig};
}
