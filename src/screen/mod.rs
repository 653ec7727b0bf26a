//! The drawing surface turtles talk to. A [`Canvas`] only knows two things:
//! how to stroke a line between two pixel points and how to fill a dot.
//! Everything a turtle draws goes through those two calls, already mapped
//! into pixel space by a [`mapper::CoordinateMapper`].
use std::cell::RefCell;
use std::rc::Rc;

use geo_types::Point;

use crate::errors::CanvasError;
use crate::turtle::pen::CssColor;

pub mod mapper;

pub mod raster;

pub mod recording;

/// On-screen canvas backed by a nannou window.
#[cfg(feature = "nannou")]
pub mod window;

pub use mapper::CoordinateMapper;
pub use raster::RasterCanvas;
pub use recording::{DrawCall, RecordingCanvas};
#[cfg(feature = "nannou")]
pub use window::WindowCanvas;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 600;

/// A canvas shared by every turtle drawing on it. Access is single
/// threaded and each draw call holds the borrow only for its own duration.
pub type SharedCanvas<C> = Rc<RefCell<C>>;

/// Wrap a canvas so several turtles can draw on it.
pub fn shared<C: Canvas>(canvas: C) -> SharedCanvas<C> {
    Rc::new(RefCell::new(canvas))
}

/// Pixel-space drawing surface. Coordinates have their origin in the top
/// left corner, with Y growing downwards.
pub trait Canvas {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Stroke a line from `from` to `to`. The update must be visible to
    /// anyone inspecting the canvas as soon as this returns.
    fn draw_line(
        &mut self,
        from: Point<f64>,
        to: Point<f64>,
        color: &CssColor,
    ) -> Result<(), CanvasError>;

    /// Fill a circle of `diameter` whose framing square has its upper-left
    /// corner at `corner`.
    fn draw_dot(
        &mut self,
        corner: Point<f64>,
        diameter: f64,
        color: &CssColor,
    ) -> Result<(), CanvasError>;
}
