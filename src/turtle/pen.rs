pub use csscolorparser::Color as CssColor;
pub use csscolorparser::parse as parse_css_color;

use crate::errors::TurtleError;

/// Opaque black, the color every new pen starts with.
pub fn black() -> CssColor {
    CssColor::from_rgba8(0, 0, 0, 255)
}

/// Opaque white, the default screen background.
pub fn white() -> CssColor {
    CssColor::from_rgba8(255, 255, 255, 255)
}

/// The pen a [`crate::turtle::Turtle`] holds. While it is down, moving the
/// turtle leaves a line behind in the pen's color.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    down: bool,
    color: CssColor,
    width: f64,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            down: true,
            color: black(),
            width: 1.0,
        }
    }
}

impl Pen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn set_down(&mut self, down: bool) {
        self.down = down;
    }

    pub fn color(&self) -> &CssColor {
        &self.color
    }

    pub fn set_color(&mut self, color: CssColor) {
        self.color = color;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Width must be a finite number greater than zero; anything else is
    /// rejected and the old width is kept.
    pub fn set_width(&mut self, width: f64) -> Result<(), TurtleError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(TurtleError::invalid(format!(
                "pen width must be positive, got {width}"
            )));
        }
        self.width = width;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let pen = Pen::new();
        assert!(pen.is_down());
        assert_eq!(pen.color().to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(pen.width(), 1.0);
    }

    #[test]
    fn test_set_width_rejects_non_positive() {
        let mut pen = Pen::new();
        pen.set_width(2.5).unwrap();
        assert_eq!(pen.width(), 2.5);
        assert!(matches!(
            pen.set_width(0.0),
            Err(TurtleError::InvalidArgument(_))
        ));
        assert!(pen.set_width(-1.0).is_err());
        assert!(pen.set_width(f64::NAN).is_err());
        assert_eq!(pen.width(), 2.5);
    }

    #[test]
    fn test_css_color() {
        let mut pen = Pen::new();
        pen.set_color(parse_css_color("red").unwrap());
        pen.set_down(false);
        assert_eq!(pen.color().to_rgba8(), [255, 0, 0, 255]);
        assert!(!pen.is_down());
    }
}
