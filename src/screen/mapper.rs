//! Conversions between turtle space and canvas space.
//!
//! Turtle space has its origin in the middle of the canvas, X pointing
//! right and Y pointing up. Headings are compass-style: degrees measured
//! clockwise from "up". Canvas space has its origin in the top left corner,
//! X pointing right and Y pointing down, measured in pixels.
use geo_types::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    width: f64,
    height: f64,
}

impl CoordinateMapper {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    pub fn to_canvas_x(&self, x: f64) -> f64 {
        x + self.width / 2.0
    }

    pub fn to_canvas_y(&self, y: f64) -> f64 {
        -y + self.height / 2.0
    }

    pub fn to_canvas_point(&self, x: f64, y: f64) -> Point<f64> {
        Point::new(self.to_canvas_x(x), self.to_canvas_y(y))
    }

    /// Inverse of [`CoordinateMapper::to_canvas_point`].
    pub fn to_turtle_point(&self, x: f64, y: f64) -> Point<f64> {
        Point::new(x - self.width / 2.0, self.height / 2.0 - y)
    }

    /// Upper-left corner of the box framing a dot of `diameter` centered on
    /// the turtle-space point (x, y). The radius is added to Y before mapping
    /// since the Y axis flips.
    pub fn dot_corner(&self, x: f64, y: f64, diameter: f64) -> Point<f64> {
        self.to_canvas_point(x - diameter / 2.0, y + diameter / 2.0)
    }

    /// Rebase a compass heading (0 = up, clockwise) onto a standard angle in
    /// radians (0 = right, counterclockwise) for use with cos/sin.
    pub fn to_radians(heading: f64) -> f64 {
        (90.0 - heading).to_radians()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_origin_is_center() {
        let m = CoordinateMapper::new(600, 600);
        assert_eq!(m.to_canvas_point(0.0, 0.0), Point::new(300.0, 300.0));
        assert_eq!(m.to_canvas_point(0.0, 100.0), Point::new(300.0, 200.0));
        assert_eq!(m.to_canvas_point(-300.0, -300.0), Point::new(0.0, 600.0));
    }

    #[test]
    fn test_odd_dimensions() {
        let m = CoordinateMapper::new(101, 51);
        assert_eq!(m.to_canvas_x(0.0), 50.5);
        assert_eq!(m.to_canvas_y(0.0), 25.5);
    }

    #[test]
    fn test_round_trip() {
        let m = CoordinateMapper::new(640, 480);
        for (x, y) in [(0.0, 0.0), (12.5, -7.25), (-320.0, 240.0), (1e6, -3.0)] {
            let p = m.to_canvas_point(x, y);
            assert_eq!(m.to_turtle_point(p.x(), p.y()), Point::new(x, y));
        }
    }

    #[test]
    fn test_dot_corner() {
        let m = CoordinateMapper::new(600, 600);
        // A 4px dot at the origin spans 298..302 on both axes.
        assert_eq!(m.dot_corner(0.0, 0.0, 4.0), Point::new(298.0, 298.0));
        assert_eq!(m.dot_corner(10.0, 10.0, 10.0), Point::new(305.0, 285.0));
    }

    #[test]
    fn test_to_radians() {
        assert!((CoordinateMapper::to_radians(0.0) - FRAC_PI_2).abs() < 1e-15);
        assert_eq!(CoordinateMapper::to_radians(90.0), 0.0);
        assert!((CoordinateMapper::to_radians(180.0) + FRAC_PI_2).abs() < 1e-15);
        assert!((CoordinateMapper::to_radians(270.0) + std::f64::consts::PI).abs() < 1e-12);
    }
}
