//! Rendering configuration.

use image::Rgb;

/// Colours and scale used when drawing a scene.
///
/// The defaults draw 100 pixels per cell on a white canvas with black grid
/// lines and obstacles, a red robot and green sightlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Pixels per grid cell.
    pub cell_px: u32,
    /// Canvas background.
    pub background: Rgb<u8>,
    /// Grid line colour.
    pub grid_line: Rgb<u8>,
    /// Obstacle fill colour.
    pub obstacle: Rgb<u8>,
    /// Robot marker colour.
    pub robot: Rgb<u8>,
    /// Sightline and endpoint marker colour.
    pub sightline: Rgb<u8>,
    /// Sightline stroke width in pixels.
    pub line_width: u32,
}

impl RenderConfig {
    /// Half-diagonal of the robot diamond, in pixels.
    pub fn robot_radius(&self) -> f64 {
        f64::from(self.cell_px) / 10.0
    }

    /// Radius of the sightline endpoint disks, in pixels.
    pub fn endpoint_radius(&self) -> f64 {
        f64::from(self.cell_px) / 20.0
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_px: 100,
            background: Rgb([255, 255, 255]),
            grid_line: Rgb([0, 0, 0]),
            obstacle: Rgb([0, 0, 0]),
            robot: Rgb([255, 0, 0]),
            sightline: Rgb([0, 128, 0]),
            line_width: 2,
        }
    }
}
