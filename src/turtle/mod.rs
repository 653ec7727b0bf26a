use std::rc::Rc;

use geo_types::Point;

use crate::errors::{ensure_finite, CanvasError, TurtleError};
use crate::screen::{shared, Canvas, CoordinateMapper, RasterCanvas, SharedCanvas};

/// The pen a turtle draws with.
pub mod pen;

use pen::{CssColor, Pen};

/// Diameter used by [`Turtle::dot`] and [`Turtle::dot_colored`].
pub const DEFAULT_DOT_DIAMETER: f64 = 4.0;

/// Wrap any heading into `[0, 360)`. Works for every finite input in one
/// step; a remainder that rounds up to 360 collapses to 0.
pub fn normalize_heading(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[derive(Debug, Clone, PartialEq)]
struct TurtleState {
    position: Point<f64>,
    heading: f64,
    pen: Pen,
}

/// # Turtle
///
/// A logo-style turtle bound to a [`Canvas`] for its whole life. It lives in
/// its own coordinate system: origin in the middle of the canvas, Y pointing
/// up, and a heading in degrees measured clockwise from "up". Every move with
/// the pen down turns into exactly one line on the canvas, issued before the
/// turtle commits to its new position.
///
/// Several turtles may share one canvas; their drawings land in the order
/// the calls are made.
///
/// # Example
///
/// ```
/// use turtlegraphics::turtle::Turtle;
///
/// let mut t = Turtle::new();
/// t.forward(100.0)?
///     .right(90.0)?
///     .forward(100.0)?
///     .right(90.0)?
///     .forward(100.0)?
///     .right(90.0)?
///     .forward(100.0)?
///     .dot()?;
/// assert!(t.x().abs() < 1e-9 && t.y().abs() < 1e-9);
/// assert_eq!(t.heading(), 270.0);
///
/// // Started at the center and went straight up first.
/// let canvas = t.canvas().borrow();
/// assert_eq!(canvas.pixel(300, 250).unwrap().0, [0, 0, 0, 255]);
/// # Ok::<(), turtlegraphics::errors::TurtleError>(())
/// ```
pub struct Turtle<C: Canvas = RasterCanvas> {
    canvas: SharedCanvas<C>,
    mapper: CoordinateMapper,
    stack: Vec<TurtleState>,
    position: Point<f64>,
    heading: f64,
    pen: Pen,
}

impl Turtle<RasterCanvas> {
    /// A turtle on a brand new 600x600 white [`RasterCanvas`].
    pub fn new() -> Self {
        let canvas = RasterCanvas::default();
        let mapper = CoordinateMapper::new(canvas.width(), canvas.height());
        Self::from_parts(shared(canvas), mapper)
    }
}

impl Default for Turtle<RasterCanvas> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Canvas> Clone for Turtle<C> {
    /// The clone draws on the same canvas, starting from the same state.
    fn clone(&self) -> Self {
        Self {
            canvas: Rc::clone(&self.canvas),
            mapper: self.mapper,
            stack: self.stack.clone(),
            position: self.position,
            heading: self.heading,
            pen: self.pen.clone(),
        }
    }
}

impl<C: Canvas> Turtle<C> {
    /// Bind a new turtle to `canvas`. Passing `None` is an error: a turtle
    /// cannot exist without somewhere to draw.
    pub fn with_canvas(canvas: Option<SharedCanvas<C>>) -> Result<Self, TurtleError> {
        let canvas = canvas.ok_or_else(|| {
            tracing::warn!("turtle constructed without a canvas");
            TurtleError::MissingCollaborator("a turtle needs a canvas to draw on")
        })?;
        let mapper = {
            let c = canvas.try_borrow().map_err(|_| CanvasError::Busy)?;
            CoordinateMapper::new(c.width(), c.height())
        };
        Ok(Self::from_parts(canvas, mapper))
    }

    /// Another turtle on a canvas that is already in use.
    pub fn on(canvas: &SharedCanvas<C>) -> Result<Self, TurtleError> {
        Self::with_canvas(Some(Rc::clone(canvas)))
    }

    fn from_parts(canvas: SharedCanvas<C>, mapper: CoordinateMapper) -> Self {
        Turtle {
            canvas,
            mapper,
            stack: vec![],
            position: Point::new(0.0, 0.0),
            heading: 0.0,
            pen: Pen::new(),
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x()
    }

    pub fn y(&self) -> f64 {
        self.position.y()
    }

    pub fn position(&self) -> Point<f64> {
        self.position
    }

    /// Degrees clockwise from "up", always in `[0, 360)`.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen.is_down()
    }

    pub fn canvas(&self) -> &SharedCanvas<C> {
        &self.canvas
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Turn clockwise by `angle` degrees.
    pub fn right(&mut self, angle: f64) -> Result<&mut Self, TurtleError> {
        let angle = ensure_finite("angle", angle)?;
        // Reduce first so a huge angle can't swallow the current heading.
        self.heading = normalize_heading(self.heading + angle.rem_euclid(360.0));
        tracing::trace!(heading = self.heading, "turned");
        Ok(self)
    }

    /// Turn counterclockwise by `angle` degrees.
    pub fn left(&mut self, angle: f64) -> Result<&mut Self, TurtleError> {
        let angle = ensure_finite("angle", angle)?;
        self.right(-angle)
    }

    /// Walk `distance` along the current heading. Negative distances walk
    /// backwards.
    pub fn forward(&mut self, distance: f64) -> Result<&mut Self, TurtleError> {
        let distance = ensure_finite("distance", distance)?;
        let angle = CoordinateMapper::to_radians(self.heading);
        let target = Point::new(
            self.position.x() + distance * angle.cos(),
            self.position.y() + distance * angle.sin(),
        );
        self.move_to(target)
    }

    /// Walk straight to an absolute turtle-space point.
    pub fn go_to(&mut self, x: f64, y: f64) -> Result<&mut Self, TurtleError> {
        self.move_to(Point::new(x, y))
    }

    pub fn go_to_point(
        &mut self,
        destination: impl Into<Point<f64>>,
    ) -> Result<&mut Self, TurtleError> {
        self.move_to(destination.into())
    }

    fn move_to(&mut self, target: Point<f64>) -> Result<&mut Self, TurtleError> {
        ensure_finite("x", target.x())?;
        ensure_finite("y", target.y())?;
        if self.pen.is_down() {
            let from = self.mapper.to_canvas_point(self.position.x(), self.position.y());
            let to = self.mapper.to_canvas_point(target.x(), target.y());
            tracing::debug!(
                x0 = from.x(),
                y0 = from.y(),
                x1 = to.x(),
                y1 = to.y(),
                "draw line"
            );
            self.canvas
                .try_borrow_mut()
                .map_err(|_| CanvasError::Busy)?
                .draw_line(from, to, self.pen.color())?;
        }
        self.position = target;
        Ok(self)
    }

    pub fn pen_up(&mut self) -> &mut Self {
        self.pen.set_down(false);
        tracing::trace!("pen up");
        self
    }

    pub fn pen_down(&mut self) -> &mut Self {
        self.pen.set_down(true);
        tracing::trace!("pen down");
        self
    }

    pub fn set_pen_color(&mut self, color: CssColor) -> &mut Self {
        self.pen.set_color(color);
        self
    }

    pub fn set_pen_width(&mut self, width: f64) -> Result<&mut Self, TurtleError> {
        self.pen.set_width(width)?;
        Ok(self)
    }

    /// Fill a dot of `diameter` centered on the turtle. Dots are drawn
    /// whether the pen is up or down.
    pub fn dot_with(
        &mut self,
        diameter: f64,
        color: &CssColor,
    ) -> Result<&mut Self, TurtleError> {
        if !(diameter.is_finite() && diameter > 0.0) {
            return Err(TurtleError::invalid(format!(
                "dot diameter must be positive, got {diameter}"
            )));
        }
        let corner = self
            .mapper
            .dot_corner(self.position.x(), self.position.y(), diameter);
        tracing::debug!(x = corner.x(), y = corner.y(), diameter, "draw dot");
        self.canvas
            .try_borrow_mut()
            .map_err(|_| CanvasError::Busy)?
            .draw_dot(corner, diameter, color)?;
        Ok(self)
    }

    /// A dot in the pen's color.
    pub fn dot_sized(&mut self, diameter: f64) -> Result<&mut Self, TurtleError> {
        let color = self.pen.color().clone();
        self.dot_with(diameter, &color)
    }

    pub fn dot_colored(&mut self, color: &CssColor) -> Result<&mut Self, TurtleError> {
        self.dot_with(DEFAULT_DOT_DIAMETER, color)
    }

    /// A [`DEFAULT_DOT_DIAMETER`] dot in the pen's color.
    pub fn dot(&mut self) -> Result<&mut Self, TurtleError> {
        self.dot_sized(DEFAULT_DOT_DIAMETER)
    }

    /// Remember position, heading and pen so [`Turtle::pop`] can come back.
    pub fn push(&mut self) -> &mut Self {
        self.stack.push(TurtleState {
            position: self.position,
            heading: self.heading,
            pen: self.pen.clone(),
        });
        self
    }

    /// Jump back to the last pushed state without drawing. Popping an empty
    /// stack leaves the turtle where it is.
    pub fn pop(&mut self) -> &mut Self {
        if let Some(state) = self.stack.pop() {
            self.position = state.position;
            self.heading = state.heading;
            self.pen = state.pen;
        }
        self
    }

    /// Walk an L-system path, typically from [`crate::l_system::LSystem::expand`].
    /// `[` pushes, `]` pops, `-` turns left and `+` turns right by `angle`
    /// degrees; anything else moves forward by `distance`.
    pub fn walk_lpath(
        &mut self,
        lpath: &str,
        angle: f64,
        distance: f64,
    ) -> Result<&mut Self, TurtleError> {
        for c in lpath.chars() {
            match c {
                '[' => {
                    self.push();
                }
                ']' => {
                    self.pop();
                }
                '-' => {
                    self.left(angle)?;
                }
                '+' => {
                    self.right(angle)?;
                }
                _ => {
                    self.forward(distance)?;
                }
            }
        }
        Ok(self)
    }
}
