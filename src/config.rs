#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Display name of the engine.
pub const ENGINE_NAME: &str = "Prophecy";

/// Engine version, taken from the crate version.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options for the game's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GameConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Background color as `0xRRGGBB`.
    pub background_color: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background_color: 0x00_00_00,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, background_color: u32) -> Self {
        self.background_color = background_color;
        self
    }

    /// The drawing surface as a rectangle anchored at the origin.
    #[must_use]
    pub fn surface(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.background_color, 0);
    }

    #[test]
    fn builder_overrides() {
        let config = GameConfig::default()
            .with_width(1024)
            .with_height(768)
            .with_background_color(0x1d_1d_1d);
        assert_eq!(
            config,
            GameConfig {
                width: 1024,
                height: 768,
                background_color: 0x1d_1d_1d,
            }
        );
    }

    #[test]
    fn surface_matches_dimensions() {
        let surface = GameConfig::default().with_width(320).surface();
        assert_eq!(surface, Rect::new(0.0, 0.0, 320.0, 600.0));
    }

    #[test]
    fn engine_version_is_crate_version() {
        assert_eq!(ENGINE_VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(ENGINE_NAME, "Prophecy");
    }
}
