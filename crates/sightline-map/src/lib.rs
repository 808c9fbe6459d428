//! Map description input for Sightline.
//!
//! Parses the plain-text map format into raw grid numbers and obstacle
//! records, leaving all geometric checks to
//! [`sightline_core::validate`].
//!
//! ```text
//! <width> <height> <cell_size>
//! <n_obstacles>
//! <x1> <y1> <x2> <y2>
//! ...
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod map;

pub use error::MapError;
pub use map::MapDescription;
