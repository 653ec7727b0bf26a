use geo_types::Point;

use super::Canvas;
use crate::errors::{CanvasError, TurtleError};
use crate::turtle::pen::CssColor;

/// One call received by a [`RecordingCanvas`], in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line {
        from: Point<f64>,
        to: Point<f64>,
        color: CssColor,
    },
    Dot {
        corner: Point<f64>,
        diameter: f64,
        color: CssColor,
    },
}

/// A headless canvas that keeps every draw call it receives, in order,
/// instead of rasterizing it. Handy for checking exactly what a turtle asked
/// for without comparing pixels.
///
/// # Example
///
/// ```rust
/// use turtlegraphics::screen::{shared, DrawCall, RecordingCanvas};
/// use turtlegraphics::turtle::Turtle;
/// use geo_types::Point;
///
/// let canvas = shared(RecordingCanvas::new(600, 600).unwrap());
/// let mut turtle = Turtle::with_canvas(Some(canvas.clone())).unwrap();
/// turtle.forward(100.0).unwrap();
///
/// let calls = canvas.borrow();
/// match &calls.calls()[0] {
///     DrawCall::Line { from, to, .. } => {
///         assert_eq!(*from, Point::new(300.0, 300.0));
///         assert_eq!(*to, Point::new(300.0, 200.0));
///     }
///     other => panic!("expected a line, got {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, TurtleError> {
        if width == 0 || height == 0 {
            return Err(TurtleError::invalid(format!(
                "canvas dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            calls: vec![],
        })
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_line(
        &mut self,
        from: Point<f64>,
        to: Point<f64>,
        color: &CssColor,
    ) -> Result<(), CanvasError> {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color: color.clone(),
        });
        Ok(())
    }

    fn draw_dot(
        &mut self,
        corner: Point<f64>,
        diameter: f64,
        color: &CssColor,
    ) -> Result<(), CanvasError> {
        self.calls.push(DrawCall::Dot {
            corner,
            diameter,
            color: color.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::turtle::pen::black;

    #[test]
    fn test_rejects_empty_canvas() {
        assert!(matches!(
            RecordingCanvas::new(0, 10),
            Err(TurtleError::InvalidArgument(_))
        ));
        assert!(RecordingCanvas::new(10, 0).is_err());
    }

    #[test]
    fn test_keeps_order() {
        let mut c = RecordingCanvas::new(10, 10).unwrap();
        c.draw_dot(Point::new(1.0, 1.0), 2.0, &black()).unwrap();
        c.draw_line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), &black())
            .unwrap();
        assert!(matches!(c.calls()[0], DrawCall::Dot { .. }));
        assert!(matches!(c.calls()[1], DrawCall::Line { .. }));
        c.clear();
        assert!(c.calls().is_empty());
    }
}
