// Sprite sheet images and frame regions

use super::AssetError;
use image::RgbaImage;

/// A single decoded animation frame
pub type Frame = RgbaImage;

/// A rectangular region within a sprite sheet, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FrameRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the region fits entirely inside a sheet of the given size
    pub fn fits_within(&self, sheet_width: u32, sheet_height: u32) -> bool {
        let right = self.x.checked_add(self.width);
        let bottom = self.y.checked_add(self.height);
        matches!((right, bottom), (Some(r), Some(b)) if r <= sheet_width && b <= sheet_height)
    }
}

/// A decoded sprite sheet
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    /// Wrap an already decoded image
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Decode a sprite sheet from encoded image bytes
    pub fn from_bytes(bytes: &[u8], name: &str) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory(bytes).map_err(|source| AssetError::Decode {
            name: name.to_string(),
            source,
        })?;
        Ok(Self::new(decoded.to_rgba8()))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Describe a region of this sheet, failing if it falls outside the image
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<FrameRegion, AssetError> {
        let region = FrameRegion::new(x, y, width, height);
        if region.width == 0 || region.height == 0 || !region.fits_within(self.width(), self.height()) {
            return Err(self.out_of_bounds(x, y, width, height));
        }
        Ok(region)
    }

    fn out_of_bounds(&self, x: u32, y: u32, width: u32, height: u32) -> AssetError {
        AssetError::FrameOutOfBounds {
            x,
            y,
            width,
            height,
            sheet_width: self.width(),
            sheet_height: self.height(),
        }
    }

    /// Copy the pixels of a region out into an owned frame
    pub fn slice(&self, region: &FrameRegion) -> Frame {
        image::imageops::crop_imm(&self.image, region.x, region.y, region.width, region.height)
            .to_image()
    }

    /// Copy out `count` frames laid out left to right starting at (`x`, `y`).
    /// A strip whose offsets overflow `u32` is out of bounds like any other.
    pub fn slice_strip(
        &self,
        x: u32,
        y: u32,
        frame_width: u32,
        frame_height: u32,
        count: u32,
    ) -> Result<Vec<Frame>, AssetError> {
        (0..count)
            .map(|i| {
                let frame_x = i
                    .checked_mul(frame_width)
                    .and_then(|offset| x.checked_add(offset))
                    .ok_or_else(|| self.out_of_bounds(x, y, frame_width, frame_height))?;
                let region = self.region(frame_x, y, frame_width, frame_height)?;
                Ok(self.slice(&region))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker_sheet() -> SpriteSheet {
        // Each 2x2 cell is coloured by its column index
        SpriteSheet::new(RgbaImage::from_fn(8, 4, |x, _| Rgba([(x / 2) as u8 * 50, 0, 0, 255])))
    }

    #[test]
    fn test_region_fits_within() {
        assert!(FrameRegion::new(0, 0, 64, 64).fits_within(256, 256));
        assert!(FrameRegion::new(192, 192, 64, 64).fits_within(256, 256));
        assert!(!FrameRegion::new(193, 0, 64, 64).fits_within(256, 256));
        assert!(!FrameRegion::new(u32::MAX, 0, 1, 1).fits_within(u32::MAX, 1));
    }

    #[test]
    fn test_region_bounds() {
        let sheet = checker_sheet();

        assert!(sheet.region(6, 2, 2, 2).is_ok());
        assert!(matches!(
            sheet.region(7, 0, 2, 2),
            Err(AssetError::FrameOutOfBounds { .. })
        ));
        assert!(sheet.region(0, 0, 0, 2).is_err());
    }

    #[test]
    fn test_slice_copies_pixels() {
        let sheet = checker_sheet();
        let region = sheet.region(4, 0, 2, 2).unwrap();
        let frame = sheet.slice(&region);

        assert_eq!(frame.dimensions(), (2, 2));
        assert_eq!(frame.get_pixel(0, 0), &Rgba([100, 0, 0, 255]));
    }

    #[test]
    fn test_slice_strip() {
        let sheet = checker_sheet();
        let frames = sheet.slice_strip(0, 2, 2, 2, 4).unwrap();

        assert_eq!(frames.len(), 4);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.get_pixel(1, 1)[0], i as u8 * 50);
        }

        // Fifth frame would start past the right edge
        assert!(sheet.slice_strip(0, 0, 2, 2, 5).is_err());
    }

    #[test]
    fn test_slice_strip_huge_frames() {
        let sheet = checker_sheet();

        // Later frames would start past u32::MAX
        assert!(matches!(
            sheet.slice_strip(0, 0, 1 << 30, 2, 5),
            Err(AssetError::FrameOutOfBounds { .. })
        ));
        assert!(sheet.slice_strip(u32::MAX, 0, 2, 2, 2).is_err());
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = SpriteSheet::from_bytes(b"nope", "bad.png").unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }
}
