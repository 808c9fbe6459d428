//! Error types for rendering and saving images.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors arising from rendering a scene or writing the image.
#[derive(Debug)]
pub enum RenderError {
    /// The canvas for this grid and scale would exceed the size limit.
    CanvasTooLarge {
        /// Requested canvas width in pixels.
        width: u64,
        /// Requested canvas height in pixels.
        height: u64,
        /// Largest allowed side length.
        max: u32,
    },
    /// The output directory could not be created.
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The image could not be encoded or written.
    Encode {
        /// Output file path.
        path: PathBuf,
        /// The underlying image error.
        source: image::ImageError,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasTooLarge { width, height, max } => write!(
                f,
                "canvas of {width}x{height} pixels exceeds the {max} pixel limit"
            ),
            Self::CreateDir { path, .. } => {
                write!(f, "cannot create output directory '{}'", path.display())
            }
            Self::Encode { path, .. } => write!(f, "cannot write image '{}'", path.display()),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CanvasTooLarge { .. } => None,
            Self::CreateDir { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}
