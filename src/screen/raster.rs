use geo_types::Point;
use image::{Rgba, RgbaImage};

use super::{Canvas, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::config::ScreenConfig;
use crate::errors::{CanvasError, TurtleError};
use crate::turtle::pen::{white, CssColor};

/// In-memory canvas. Everything drawn lands straight in an [`RgbaImage`]
/// that starts out filled with the background color, so it works without a
/// display and can be inspected pixel by pixel.
///
/// Lines are one pixel wide regardless of the pen width.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterCanvas {
    buffer: RgbaImage,
    background: CssColor,
}

impl Default for RasterCanvas {
    fn default() -> Self {
        Self::blank(DEFAULT_WIDTH, DEFAULT_HEIGHT, white())
    }
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: CssColor) -> Result<Self, TurtleError> {
        if width == 0 || height == 0 {
            return Err(TurtleError::invalid(format!(
                "canvas dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self::blank(width, height, background))
    }

    /// A white canvas of the given size.
    pub fn with_size(width: u32, height: u32) -> Result<Self, TurtleError> {
        Self::new(width, height, white())
    }

    /// A default sized canvas with a custom background.
    pub fn with_background(background: CssColor) -> Self {
        Self::blank(DEFAULT_WIDTH, DEFAULT_HEIGHT, background)
    }

    pub fn from_config(config: &ScreenConfig) -> Result<Self, TurtleError> {
        Self::new(config.width, config.height, config.background.clone())
    }

    fn blank(width: u32, height: u32, background: CssColor) -> Self {
        let buffer = RgbaImage::from_pixel(width, height, Rgba(background.to_rgba8()));
        Self { buffer, background }
    }

    pub fn background(&self) -> &CssColor {
        &self.background
    }

    pub fn image(&self) -> &RgbaImage {
        &self.buffer
    }

    pub fn into_image(self) -> RgbaImage {
        self.buffer
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x < self.buffer.width() && y < self.buffer.height() {
            Some(*self.buffer.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Paint one pixel, blending source-over when the color is translucent.
    /// Anything outside the image is dropped.
    fn plot(&mut self, x: f64, y: f64, color: [u8; 4]) {
        let (px, py) = (x.floor(), y.floor());
        if px < 0.0 || py < 0.0 {
            return;
        }
        let (px, py) = (px as u32, py as u32);
        if px >= self.buffer.width() || py >= self.buffer.height() {
            return;
        }
        let blended = match color[3] {
            255 => color,
            0 => return,
            alpha => {
                let dst = self.buffer.get_pixel(px, py).0;
                let a = f32::from(alpha) / 255.0;
                let da = f32::from(dst[3]) / 255.0;
                let mix =
                    |s: u8, d: u8| (f32::from(s) * a + f32::from(d) * (1.0 - a)).round() as u8;
                [
                    mix(color[0], dst[0]),
                    mix(color[1], dst[1]),
                    mix(color[2], dst[2]),
                    ((a + da * (1.0 - a)) * 255.0).round() as u8,
                ]
            }
        };
        self.buffer.put_pixel(px, py, Rgba(blended));
    }

    /// Liang-Barsky clip of a segment against the image bounds, padded by a
    /// pixel so strokes along the edges survive.
    fn clip(&self, from: Point<f64>, to: Point<f64>) -> Option<(Point<f64>, Point<f64>)> {
        let (x_min, y_min) = (-1.0, -1.0);
        let x_max = f64::from(self.buffer.width()) + 1.0;
        let y_max = f64::from(self.buffer.height()) + 1.0;
        let dx = to.x() - from.x();
        let dy = to.y() - from.y();
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        for (p, q) in [
            (-dx, from.x() - x_min),
            (dx, x_max - from.x()),
            (-dy, from.y() - y_min),
            (dy, y_max - from.y()),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some((
            Point::new(from.x() + t0 * dx, from.y() + t0 * dy),
            Point::new(from.x() + t1 * dx, from.y() + t1 * dy),
        ))
    }
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.buffer.width()
    }

    fn height(&self) -> u32 {
        self.buffer.height()
    }

    fn draw_line(
        &mut self,
        from: Point<f64>,
        to: Point<f64>,
        color: &CssColor,
    ) -> Result<(), CanvasError> {
        let rgba = color.to_rgba8();
        let Some((start, end)) = self.clip(from, to) else {
            return Ok(());
        };
        let (dx, dy) = (end.x() - start.x(), end.y() - start.y());
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u64;
        let n = steps as f64;
        for i in 0..=steps {
            let i = i as f64;
            self.plot(start.x() + dx * i / n, start.y() + dy * i / n, rgba);
        }
        Ok(())
    }

    fn draw_dot(
        &mut self,
        corner: Point<f64>,
        diameter: f64,
        color: &CssColor,
    ) -> Result<(), CanvasError> {
        let rgba = color.to_rgba8();
        let radius = diameter / 2.0;
        let (cx, cy) = (corner.x() + radius, corner.y() + radius);
        let x_start = corner.x().floor().max(0.0);
        let y_start = corner.y().floor().max(0.0);
        let x_end = (corner.x() + diameter).ceil().min(f64::from(self.buffer.width()));
        let y_end = (corner.y() + diameter).ceil().min(f64::from(self.buffer.height()));
        let mut py = y_start;
        while py < y_end {
            let mut px = x_start;
            while px < x_end {
                let (ox, oy) = (px + 0.5 - cx, py + 0.5 - cy);
                if ox * ox + oy * oy <= radius * radius {
                    self.plot(px, py, rgba);
                }
                px += 1.0;
            }
            py += 1.0;
        }
        Ok(())
    }
}
