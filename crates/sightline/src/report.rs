//! Textual report of a scan.

use sightline_core::DirectionResult;
use std::fmt;
use std::path::PathBuf;

/// Outcome of one run: the sightlines and where the visualization was
/// written, if anywhere.
#[derive(Clone, Debug)]
pub struct Report {
    /// Nearest crossing in each direction.
    pub result: DirectionResult,
    /// Path of the written PNG.
    pub image_path: Option<PathBuf>,
}

impl fmt::Display for Report {
    /// One `"<angle>: (<x>, <y>)"` line per direction, in angle order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (direction, crossing) in self.result.iter() {
            writeln!(f, "{}: {crossing}", direction.angle())?;
        }
        Ok(())
    }
}
