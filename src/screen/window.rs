use std::sync::Mutex;

use geo_types::Point;
use nannou::image::{DynamicImage, RgbaImage as NannouImage};
use nannou::wgpu;
use nannou::{App, Frame};

use super::{Canvas, RasterCanvas};
use crate::config::ScreenConfig;
use crate::errors::{CanvasError, TurtleError};
use crate::turtle::pen::CssColor;

pub const WINDOW_TITLE: &str = "Turtle Graphics";

/// A canvas that ends up on screen. Drawing goes into an in-memory
/// [`RasterCanvas`]; [`WindowCanvas::show`] then opens a fixed-size nannou
/// window presenting it.
#[derive(Debug, Clone, Default)]
pub struct WindowCanvas {
    raster: RasterCanvas,
}

/// Handoff to the nannou model function, which can't capture anything.
struct Presented {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

static PRESENTED: Mutex<Option<Presented>> = Mutex::new(None);

struct Model {
    texture: wgpu::Texture,
}

impl WindowCanvas {
    pub fn new(width: u32, height: u32, background: CssColor) -> Result<Self, TurtleError> {
        Ok(Self {
            raster: RasterCanvas::new(width, height, background)?,
        })
    }

    pub fn from_config(config: &ScreenConfig) -> Result<Self, TurtleError> {
        Ok(Self {
            raster: RasterCanvas::from_config(config)?,
        })
    }

    pub fn raster(&self) -> &RasterCanvas {
        &self.raster
    }

    /// Open the window and block until it is closed.
    pub fn show(&self) {
        let image = self.raster.image().clone();
        let (width, height) = image.dimensions();
        match PRESENTED.lock() {
            Ok(mut slot) => {
                *slot = Some(Presented {
                    width,
                    height,
                    pixels: image.into_raw(),
                })
            }
            Err(err) => {
                tracing::error!(%err, "window handoff poisoned");
                return;
            }
        }
        tracing::info!(width, height, "opening turtle window");
        nannou::app(model).run();
    }
}

fn model(app: &App) -> Model {
    let presented = PRESENTED
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .unwrap_or(Presented {
            width: 1,
            height: 1,
            pixels: vec![255, 255, 255, 255],
        });
    if let Err(err) = app
        .new_window()
        .title(WINDOW_TITLE)
        .size(presented.width, presented.height)
        .resizable(false)
        .view(view)
        .build()
    {
        tracing::error!(?err, "failed to build turtle window");
        app.quit();
    }
    let image = NannouImage::from_raw(presented.width, presented.height, presented.pixels)
        .unwrap_or_else(|| NannouImage::new(presented.width, presented.height));
    let texture = wgpu::Texture::from_image(app, &DynamicImage::ImageRgba8(image));
    Model { texture }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.texture(&model.texture);
    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::error!(?err, "failed to present turtle canvas");
    }
}

impl Canvas for WindowCanvas {
    fn width(&self) -> u32 {
        self.raster.width()
    }

    fn height(&self) -> u32 {
        self.raster.height()
    }

    fn draw_line(
        &mut self,
        from: Point<f64>,
        to: Point<f64>,
        color: &CssColor,
    ) -> Result<(), CanvasError> {
        self.raster.draw_line(from, to, color)
    }

    fn draw_dot(
        &mut self,
        corner: Point<f64>,
        diameter: f64,
        color: &CssColor,
    ) -> Result<(), CanvasError> {
        self.raster.draw_dot(corner, diameter, color)
    }
}
