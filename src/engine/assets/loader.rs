// Asset loading functionality

use super::{AssetError, SpriteSheet};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Supported asset types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Texture,
}

impl AssetType {
    /// Get the default directory for this asset type
    pub fn default_directory(&self) -> &'static str {
        match self {
            AssetType::Texture => "textures",
        }
    }
}

/// Asset loader responsible for finding and loading asset files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, asset_type: AssetType, name: &str) -> PathBuf {
        self.base_path
            .join(asset_type.default_directory())
            .join(name)
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, asset_type: AssetType, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve_path(asset_type, name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()).into());
        }

        Ok(std::fs::read(&path).map_err(AssetError::Io)?)
    }

    /// Load and decode a sprite sheet from the texture directory
    pub fn load_sprite_sheet(&self, name: &str) -> Result<SpriteSheet> {
        let bytes = self.load_bytes(AssetType::Texture, name)?;
        let sheet = SpriteSheet::from_bytes(&bytes, name)?;
        log::info!(
            "Loaded sprite sheet {} ({}x{})",
            name,
            sheet.width(),
            sheet.height()
        );
        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_directories() {
        assert_eq!(AssetType::Texture.default_directory(), "textures");
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path(AssetType::Texture, "dog_sprite.png");

        assert_eq!(path, PathBuf::from("/game/assets/textures/dog_sprite.png"));
    }

    #[test]
    fn test_missing_sheet_is_not_found() {
        let loader = AssetLoader::new("/definitely/not/here");
        let err = loader.load_sprite_sheet("cat_sprite.png").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_sprite_sheet_from_disk() {
        let dir = std::env::temp_dir().join(format!("dog-vs-cat-assets-{}", std::process::id()));
        let textures = dir.join("textures");
        std::fs::create_dir_all(&textures).unwrap();

        let image = image::RgbaImage::from_pixel(8, 4, image::Rgba([10, 20, 30, 255]));
        image.save(textures.join("tiny.png")).unwrap();

        let loader = AssetLoader::new(&dir);
        assert!(loader.resolve_path(AssetType::Texture, "tiny.png").is_file());

        let sheet = loader.load_sprite_sheet("tiny.png").unwrap();
        assert_eq!(sheet.width(), 8);
        assert_eq!(sheet.height(), 4);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_undecodable_sheet() {
        let dir = std::env::temp_dir().join(format!("dog-vs-cat-garbage-{}", std::process::id()));
        let textures = dir.join("textures");
        std::fs::create_dir_all(&textures).unwrap();
        std::fs::write(textures.join("broken.png"), b"not a png").unwrap();

        let loader = AssetLoader::new(&dir);
        let err = loader.load_sprite_sheet("broken.png").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::Decode { .. })
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
