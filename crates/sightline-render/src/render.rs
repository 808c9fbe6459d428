//! Scene rendering and PNG output.

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::raster::Canvas;
use image::RgbImage;
use sightline_core::{Axis, DirectionResult, Point, Scene};
use std::path::Path;

/// Largest canvas side length, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 1 << 15;

/// Draw `scene` and the sightlines of `result`.
///
/// The canvas is `width * cell_px + 1` by `height * cell_px + 1` pixels so
/// the closing grid lines on the right and bottom edges are visible.
/// Layers are drawn in order: grid lines, obstacles, robot, sightlines.
pub fn render(
    scene: &Scene,
    result: &DirectionResult,
    config: &RenderConfig,
) -> Result<RgbImage, RenderError> {
    let grid = scene.grid();
    let cell_px = u64::from(config.cell_px);
    let side_limit = u64::from(MAX_CANVAS_SIDE);
    let span = |cells: i64| {
        u64::try_from(cells)
            .ok()
            .and_then(|c| c.checked_mul(cell_px))
    };
    let (width_px, height_px) = match (span(grid.width()), span(grid.height())) {
        (Some(w), Some(h)) if w < side_limit && h < side_limit => (w, h),
        (w, h) => {
            return Err(RenderError::CanvasTooLarge {
                width: w.map_or(u64::MAX, |w| w.saturating_add(1)),
                height: h.map_or(u64::MAX, |h| h.saturating_add(1)),
                max: MAX_CANVAS_SIDE,
            })
        }
    };

    let mut canvas = Canvas::new(width_px as u32 + 1, height_px as u32 + 1, config.background);
    let scale = config.cell_px as f64 / grid.cell_size() as f64;
    let to_px = |p: Point| (p.x * scale, p.y * scale);

    let (w, h) = (width_px as f64, height_px as f64);
    for row in 0..=grid.height() {
        let y = (row as u64 * cell_px) as f64;
        canvas.line((0.0, y), (w, y), 1, config.grid_line);
    }
    for col in 0..=grid.width() {
        let x = (col as u64 * cell_px) as f64;
        canvas.line((x, 0.0), (x, h), 1, config.grid_line);
    }

    for o in scene.obstacles() {
        let a = to_px(Point::new(o.x1 as f64, o.y1 as f64));
        let b = to_px(Point::new(o.x2 as f64, o.y2 as f64));
        canvas.fill_rect(a, b, config.obstacle);
    }

    let robot = to_px(scene.robot());
    canvas.fill_diamond(robot, config.robot_radius(), config.robot);

    for (_, crossing) in result.iter() {
        let end = to_px(crossing);
        canvas.line(robot, end, config.line_width, config.sightline);
        canvas.fill_disk(end, config.endpoint_radius(), config.sightline);
    }

    log::debug!(
        "rendered {}x{} canvas ({} obstacles, extent {}x{})",
        width_px + 1,
        height_px + 1,
        scene.obstacles().len(),
        grid.extent(Axis::X),
        grid.extent(Axis::Y)
    );
    Ok(canvas.into_image())
}

/// Write `image` as PNG to `path`, creating missing parent directories.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), RenderError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| RenderError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!(
        "saved visualization to '{}' ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}
