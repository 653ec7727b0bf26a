//! Logo-style turtle graphics.
//!
//! A [`turtle::Turtle`] walks around in its own coordinate system, origin in
//! the middle of the canvas and Y pointing up, leaving lines behind while its
//! pen is down. Those moves are translated into pixel coordinates and handed
//! to a [`screen::Canvas`]: an in-memory [`screen::RasterCanvas`] by default,
//! a [`screen::RecordingCanvas`] when you only want to know what was drawn, or
//! a nannou window with the `nannou` feature.
//!
//! ```rust
//! use turtlegraphics::prelude::*;
//!
//! let canvas = shared(RasterCanvas::with_size(200, 200)?);
//! let mut leonardo = Turtle::on(&canvas)?;
//! let mut raphael = Turtle::on(&canvas)?;
//!
//! leonardo.forward(50.0)?;
//! raphael.set_pen_color(parse_css_color("red")?).right(180.0)?.forward(50.0)?;
//!
//! assert_eq!(canvas.borrow().pixel(100, 75).unwrap().0, [0, 0, 0, 255]);
//! assert_eq!(canvas.borrow().pixel(100, 125).unwrap().0, [255, 0, 0, 255]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Error types shared by turtles and canvases.
pub mod errors;

/// Turtle implementation and its pen.
pub mod turtle;

/// Canvases turtles draw on, and the mapping from turtle space into them.
pub mod screen;

/// Screen parameters loaded from RON.
pub mod config;

/// L-system implementation, with expansion/recursion
pub mod l_system;

/// Import prelude::* for the usual suspects.
pub mod prelude {
    pub use crate::config::ScreenConfig;
    pub use crate::errors::{CanvasError, TurtleError};
    pub use crate::l_system::LSystem;
    pub use crate::screen::{
        shared, Canvas, CoordinateMapper, DrawCall, RasterCanvas, RecordingCanvas, SharedCanvas,
    };
    #[cfg(feature = "nannou")]
    pub use crate::screen::WindowCanvas;
    pub use crate::turtle::pen::{parse_css_color, CssColor, Pen};
    pub use crate::turtle::Turtle;
}
