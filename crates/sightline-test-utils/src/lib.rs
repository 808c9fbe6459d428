//! Test utilities for Sightline development.
//!
//! Provides a [`TestMapBuilder`] that produces both the text form of a map
//! description and the matching validated [`Scene`], plus the standard
//! maps in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use sightline_core::{Grid, Point, Scene};

/// Builder for map descriptions used across integration tests.
///
/// Records are stored verbatim, so malformed or out-of-bounds obstacles
/// can be written out to exercise the validator.
#[derive(Clone, Debug)]
pub struct TestMapBuilder {
    width: i64,
    height: i64,
    cell_size: i64,
    obstacles: Vec<Vec<i64>>,
}

impl TestMapBuilder {
    pub fn new(width: i64, height: i64, cell_size: i64) -> Self {
        Self {
            width,
            height,
            cell_size,
            obstacles: Vec::new(),
        }
    }

    /// Add an obstacle given in cell units; coordinates are scaled by the
    /// cell size.
    pub fn cells(mut self, x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let s = self.cell_size;
        self.obstacles.push(vec![x1 * s, y1 * s, x2 * s, y2 * s]);
        self
    }

    /// Add a raw record in physical units.
    pub fn record(mut self, record: &[i64]) -> Self {
        self.obstacles.push(record.to_vec());
        self
    }

    pub fn records(&self) -> &[Vec<i64>] {
        &self.obstacles
    }

    /// The map in its text format.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{} {} {}\n{}\n",
            self.width,
            self.height,
            self.cell_size,
            self.obstacles.len()
        );
        for record in &self.obstacles {
            let line: Vec<String> = record.iter().map(i64::to_string).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }

    /// Validate into a scene, panicking on invalid input.
    pub fn scene(&self, robot: Point) -> Scene {
        let grid = Grid::new(self.width, self.height, self.cell_size)
            .unwrap_or_else(|e| panic!("test grid invalid: {e}"));
        Scene::new(grid, &self.obstacles, robot)
            .unwrap_or_else(|e| panic!("test scene invalid: {e}"))
    }
}
