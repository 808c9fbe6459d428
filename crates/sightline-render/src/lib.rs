//! Raster visualization for Sightline.
//!
//! Draws the grid, obstacles, robot and the four sightlines of a
//! [`DirectionResult`](sightline_core::DirectionResult) into an
//! [`image::RgbImage`], and saves it as PNG.
//!
//! ```
//! use sightline_core::{Grid, Point, Scene};
//! use sightline_render::{render, RenderConfig};
//!
//! let grid = Grid::new(2, 1, 10).unwrap();
//! let scene = Scene::new(grid, &[[10i64, 0, 20, 10]], Point::new(5.0, 5.0)).unwrap();
//! let image = render(&scene, &scene.scan(), &RenderConfig::default()).unwrap();
//! assert_eq!(image.dimensions(), (201, 101));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod raster;
pub mod render;

pub use config::RenderConfig;
pub use error::RenderError;
pub use render::{render, save_png};
