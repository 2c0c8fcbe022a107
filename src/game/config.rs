// Game settings
//
// Defaults match the stock window and sprite sheets; a couple of values can be
// overridden from the environment.

use glam::IVec2;
use std::path::PathBuf;

use super::pets::ColorVariant;

/// Environment variable pointing at the asset directory
pub const ASSETS_ENV: &str = "DOG_VS_CAT_ASSETS";

/// Environment variable overriding the animation frame duration (ms)
pub const FRAME_MS_ENV: &str = "DOG_VS_CAT_FRAME_MS";

/// Settings for one pet on screen
#[derive(Debug, Clone, PartialEq)]
pub struct PetConfig {
    pub name: String,
    /// Sheet file name inside the texture directory
    pub sprite_sheet: String,
    pub color: ColorVariant,
    pub spawn: IVec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub assets_dir: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
    pub dog: PetConfig,
    pub cat: PetConfig,
    /// Size of a single sprite frame in pixels
    pub frame_width: u32,
    pub frame_height: u32,
    /// How long each animation frame is shown
    pub frame_duration_ms: f64,
    /// Pixels a pet walks per simulation tick
    pub walk_step: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            window_width: 800,
            window_height: 600,
            dog: PetConfig {
                name: "Dog".to_string(),
                sprite_sheet: "dog_sprite.png".to_string(),
                color: ColorVariant::Brown,
                spawn: IVec2::new(100, 100),
            },
            cat: PetConfig {
                name: "Cat".to_string(),
                sprite_sheet: "cat_sprite.png".to_string(),
                color: ColorVariant::Black,
                spawn: IVec2::new(600, 100),
            },
            frame_width: 32,
            frame_height: 32,
            frame_duration_ms: 200.0,
            walk_step: 4,
        }
    }
}

impl GameConfig {
    /// Defaults with overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ASSETS_ENV) {
            config.assets_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(FRAME_MS_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(ms) if ms.is_finite() && ms > 0.0 => config.frame_duration_ms = ms,
                _ => log::warn!(
                    "Ignoring {}={:?}, expected a positive number of milliseconds",
                    FRAME_MS_ENV,
                    raw
                ),
            }
        }

        config
    }
}
