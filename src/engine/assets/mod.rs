// Asset loading
//
// Sprite sheets are read from disk, decoded with the `image` crate and sliced
// into frames by the animation system.

mod loader;
mod sheet;

pub use loader::{AssetLoader, AssetType};
pub use sheet::{Frame, FrameRegion, SpriteSheet};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode image {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Frame {width}x{height} at ({x}, {y}) lies outside the {sheet_width}x{sheet_height} sheet")]
    FrameOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        sheet_width: u32,
        sheet_height: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("dog_sprite.png".to_string());
        assert_eq!(err.to_string(), "Asset not found: dog_sprite.png");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = AssetError::FrameOutOfBounds {
            x: 64,
            y: 0,
            width: 32,
            height: 32,
            sheet_width: 64,
            sheet_height: 64,
        };
        assert_eq!(
            err.to_string(),
            "Frame 32x32 at (64, 0) lies outside the 64x64 sheet"
        );
    }
}
