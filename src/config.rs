//! Screen construction parameters, loadable from a [RON](https://github.com/ron-rs/ron)
//! document. Missing fields fall back to a 600x600 white screen.
//!
//! ```rust
//! use turtlegraphics::config::ScreenConfig;
//!
//! let config = ScreenConfig::from_ron_str(r#"(width: 800, background: "navy")"#).unwrap();
//! assert_eq!(config.width, 800);
//! assert_eq!(config.height, 600);
//! assert_eq!(config.background.to_rgba8(), [0, 0, 128, 255]);
//! ```
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::TurtleError;
use crate::screen::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::turtle::pen::{white, CssColor};

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "white")]
    pub background: CssColor,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: white(),
        }
    }
}

impl ScreenConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, TurtleError> {
        let config: ScreenConfig = ron::from_str(source)?;
        tracing::debug!(
            width = config.width,
            height = config.height,
            "loaded screen config"
        );
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TurtleError> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_ron_str(&source)
    }
}
