//! Clipped drawing primitives over an [`RgbImage`].
//!
//! All coordinates are in pixels as `f64` and are rounded to the nearest
//! pixel. Anything falling outside the canvas is silently clipped.

use image::{Rgb, RgbImage};

/// An RGB canvas with clipped drawing operations.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// A `width x height` canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    /// Consume the canvas and return the image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Set one pixel, ignoring coordinates outside the canvas.
    pub fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Fill the rectangle spanned by two corners, both corners included.
    pub fn fill_rect(&mut self, (ax, ay): (f64, f64), (bx, by): (f64, f64), color: Rgb<u8>) {
        let (x0, x1) = ordered(px(ax), px(bx));
        let (y0, y1) = ordered(px(ay), px(by));
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(i64::from(self.image.width()) - 1);
        let y1 = y1.min(i64::from(self.image.height()) - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put(x, y, color);
            }
        }
    }

    /// Draw a straight line with a square pen of `width` pixels.
    ///
    /// For even widths the extra pixel falls above/left of the centre line.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), width: u32, color: Rgb<u8>) {
        let (x0, y0) = (px(from.0), px(from.1));
        let (x1, y1) = (px(to.0), px(to.1));
        let steps = (x1 - x0).abs().max((y1 - y0).abs());
        let w = i64::from(width.max(1));
        let lo = -(w / 2);
        let hi = lo + w - 1;
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
            let cx = x0 + ((x1 - x0) as f64 * t).round() as i64;
            let cy = y0 + ((y1 - y0) as f64 * t).round() as i64;
            for dy in lo..=hi {
                for dx in lo..=hi {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Fill a square rotated by 45° (a diamond) with the given half-diagonal.
    pub fn fill_diamond(&mut self, center: (f64, f64), radius: f64, color: Rgb<u8>) {
        self.fill_where(center, radius, color, |dx, dy| dx.abs() + dy.abs() <= radius);
    }

    /// Fill a disk.
    pub fn fill_disk(&mut self, center: (f64, f64), radius: f64, color: Rgb<u8>) {
        self.fill_where(center, radius, color, |dx, dy| dx.hypot(dy) <= radius);
    }

    fn fill_where(
        &mut self,
        (cx, cy): (f64, f64),
        radius: f64,
        color: Rgb<u8>,
        inside: impl Fn(f64, f64) -> bool,
    ) {
        let r = radius.ceil() as i64;
        let (ox, oy) = (px(cx), px(cy));
        for y in oy - r..=oy + r {
            for x in ox - r..=ox + r {
                if inside(x as f64 - cx, y as f64 - cy) {
                    self.put(x, y, color);
                }
            }
        }
    }
}

fn px(v: f64) -> i64 {
    v.round() as i64
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const INK: Rgb<u8> = Rgb([1, 2, 3]);

    fn count(canvas: &Canvas, color: Rgb<u8>) -> usize {
        canvas.image.pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn put_clips_out_of_range() {
        let mut c = Canvas::new(4, 4, WHITE);
        c.put(-1, 0, INK);
        c.put(4, 0, INK);
        c.put(0, 4, INK);
        assert_eq!(count(&c, INK), 0);
        c.put(3, 3, INK);
        assert_eq!(count(&c, INK), 1);
    }

    #[test]
    fn fill_rect_is_corner_inclusive() {
        let mut c = Canvas::new(10, 10, WHITE);
        c.fill_rect((2.0, 3.0), (4.0, 5.0), INK);
        assert_eq!(count(&c, INK), 9);
        assert_eq!(*c.image.get_pixel(2, 3), INK);
        assert_eq!(*c.image.get_pixel(4, 5), INK);
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut c = Canvas::new(3, 3, WHITE);
        c.fill_rect((-5.0, -5.0), (50.0, 50.0), INK);
        assert_eq!(count(&c, INK), 9);
    }

    #[test]
    fn horizontal_line_has_requested_width() {
        let mut c = Canvas::new(20, 20, WHITE);
        c.line((2.0, 10.0), (11.0, 10.0), 2, INK);
        assert_eq!(count(&c, INK), 20);
        assert_eq!(*c.image.get_pixel(5, 9), INK);
        assert_eq!(*c.image.get_pixel(5, 10), INK);
        assert_eq!(*c.image.get_pixel(5, 11), WHITE);
    }

    #[test]
    fn degenerate_line_is_a_dot() {
        let mut c = Canvas::new(5, 5, WHITE);
        c.line((2.0, 2.0), (2.0, 2.0), 1, INK);
        assert_eq!(count(&c, INK), 1);
    }

    #[test]
    fn diamond_excludes_bounding_box_corners() {
        let mut c = Canvas::new(21, 21, WHITE);
        c.fill_diamond((10.0, 10.0), 5.0, INK);
        assert_eq!(*c.image.get_pixel(10, 5), INK);
        assert_eq!(*c.image.get_pixel(15, 10), INK);
        assert_eq!(*c.image.get_pixel(14, 14), WHITE);
    }

    #[test]
    fn disk_is_round() {
        let mut c = Canvas::new(21, 21, WHITE);
        c.fill_disk((10.0, 10.0), 5.0, INK);
        assert_eq!(*c.image.get_pixel(10, 15), INK);
        assert_eq!(*c.image.get_pixel(14, 13), INK);
        assert_eq!(*c.image.get_pixel(14, 14), WHITE);
    }
}
