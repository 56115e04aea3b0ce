//! # Normalize Module
//!
//! Turns two arbitrary letter images into a pair of equally sized grayscale
//! buffers the similarity metric can compare.
//!
//! ## Steps
//! 1. Decode both files (zune-jpeg for JPEG, image crate otherwise)
//! 2. Flatten the first image onto white if it is transparent; the second
//!    image simply loses its alpha channel
//! 3. Convert both to BT.601 grayscale
//! 4. Resize both to the target size (300x300 by default)

pub mod composite;
pub mod decode;
pub mod resize;

pub use composite::{composite_on_white, flatten_discarding_alpha, flatten_onto_white, to_grayscale};
pub use decode::FastDecoder;
pub use resize::FastResizer;

use crate::error::{CompareError, Result};
use image::{DynamicImage, GrayImage};
use std::path::Path;
use tracing::debug;

/// Side length used when neither image size is configured
pub const DEFAULT_TARGET_SIZE: u32 = 300;

/// Two grayscale images of identical dimensions
#[derive(Debug, Clone)]
pub struct NormalizedPair {
    pub first: GrayImage,
    pub second: GrayImage,
}

/// Loads and normalizes image pairs
pub struct Normalizer {
    width: u32,
    height: u32,
    resizer: FastResizer,
}

impl Normalizer {
    /// Create a normalizer producing `width` x `height` grayscale images
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            resizer: FastResizer::new(),
        }
    }

    /// Decode both files and normalize them.
    ///
    /// Fails with a [`crate::error::LoadError`] if either file cannot be read.
    pub fn load_pair(&mut self, first: &Path, second: &Path) -> Result<NormalizedPair> {
        let first_image = FastDecoder::decode(first);
        let second_image = FastDecoder::decode(second);

        let first_image = first_image?;
        let second_image = second_image?;

        debug!(
            first = %first.display(),
            second = %second.display(),
            first_color = ?first_image.color(),
            second_color = ?second_image.color(),
            "decoded letter images"
        );

        Ok(self.normalize_pair(&first_image, &second_image)?)
    }

    /// Normalize two already-decoded images.
    pub fn normalize_pair(
        &mut self,
        first: &DynamicImage,
        second: &DynamicImage,
    ) -> std::result::Result<NormalizedPair, CompareError> {
        let first = to_grayscale(&flatten_onto_white(first));
        let second = to_grayscale(&flatten_discarding_alpha(second));

        Ok(NormalizedPair {
            first: self.resizer.resize(&first, self.width, self.height)?,
            second: self.resizer.resize(&second, self.width, self.height)?,
        })
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_SIZE, DEFAULT_TARGET_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LetterDetectorError;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn pair_shares_target_dimensions() {
        let mut normalizer = Normalizer::default();
        let small = DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 35, Rgb([0, 0, 0])));
        let large = DynamicImage::ImageRgb8(RgbImage::from_pixel(640, 480, Rgb([0, 0, 0])));

        let pair = normalizer.normalize_pair(&small, &large).unwrap();

        assert_eq!(pair.first.dimensions(), (300, 300));
        assert_eq!(pair.second.dimensions(), (300, 300));
    }

    #[test]
    fn transparent_first_image_normalizes_to_white() {
        let mut normalizer = Normalizer::new(16, 16);
        let clear = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0])));

        let pair = normalizer.normalize_pair(&clear, &clear).unwrap();

        assert!(pair.first.pixels().all(|p| p[0] >= 254));
        // the second image is not composited, so hidden black stays black
        assert!(pair.second.pixels().all(|p| p[0] <= 1));
    }

    #[test]
    fn opaque_first_image_keeps_its_ink() {
        let mut normalizer = Normalizer::new(8, 8);
        let ink = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255])));

        let pair = normalizer.normalize_pair(&ink, &ink).unwrap();

        assert!(pair.first.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn load_pair_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("a.png");
        RgbImage::from_pixel(4, 4, Rgb([255, 255, 255])).save(&present).unwrap();

        let mut normalizer = Normalizer::default();
        let result = normalizer.load_pair(&present, &temp_dir.path().join("missing.png"));

        assert!(matches!(result, Err(LetterDetectorError::Load(_))));
    }
}
