//! Command-line options and the end-to-end pipeline behind the binary.

use crate::report::Report;
use anyhow::Context;
use clap::Parser;
use sightline_core::Point;
use sightline_map::{MapDescription, MapError};
use sightline_render::RenderConfig;
use std::path::{Path, PathBuf};

/// Draws the map from a description file and a robot position, and finds
/// the closest obstacle to the robot in each direction.
#[derive(Parser, Debug, Clone)]
#[command(name = "sightline", version, term_width = 100)]
pub struct Cli {
    /// Path to the file with the map description
    pub map_file: PathBuf,

    /// Robot x coordinate, in the map's physical units
    #[arg(allow_negative_numbers = true)]
    pub robot_x: f64,

    /// Robot y coordinate, in the map's physical units (grows downward)
    #[arg(allow_negative_numbers = true)]
    pub robot_y: f64,

    /// Where to write the PNG visualization
    #[arg(short, long, default_value = "output/visualization.png")]
    pub output: PathBuf,

    /// Pixels per grid cell in the visualization
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub cell_px: u32,

    /// Only print the sightlines, do not write an image
    #[arg(long)]
    pub no_render: bool,
}

impl Cli {
    /// The robot position given on the command line.
    pub fn robot(&self) -> Point {
        Point::new(self.robot_x, self.robot_y)
    }

    /// Rendering configuration derived from the options.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            cell_px: self.cell_px,
            ..RenderConfig::default()
        }
    }
}

/// Load, validate, scan and optionally render, as configured by `cli`.
pub fn run(cli: &Cli) -> anyhow::Result<Report> {
    let map = MapDescription::load(&cli.map_file)?;
    let scene = map
        .into_scene(cli.robot())
        .with_context(|| format!("invalid map '{}'", cli.map_file.display()))?;
    let result = scene.scan();
    log::info!(
        "scanned {} obstacles from {}",
        scene.obstacles().len(),
        scene.robot()
    );
    for (direction, crossing) in result.iter() {
        log::debug!(
            "{direction}: {crossing} at distance {}",
            result.clearance(direction, scene.robot())
        );
    }

    let image_path = if cli.no_render {
        None
    } else {
        let image = sightline_render::render(&scene, &result, &cli.render_config())?;
        sightline_render::save_png(&image, &cli.output)?;
        Some(cli.output.clone())
    };

    Ok(Report {
        result,
        image_path,
    })
}

/// The line printed for a failed run.
///
/// A map file that does not exist gets a short dedicated message; every
/// other failure prints its full context chain.
pub fn error_message(err: &anyhow::Error, map_file: &Path) -> String {
    let missing = err
        .chain()
        .filter_map(|e| e.downcast_ref::<MapError>())
        .any(MapError::is_not_found);
    if missing {
        format!("Error: the file '{}' does not exist", map_file.display())
    } else {
        format!("Error: {err:#}")
    }
}
