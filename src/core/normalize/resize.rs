//! Fast SIMD-accelerated image resizing.
//!
//! Uses fast_image_resize crate which is 5-14x faster than image crate's resize.
//! Automatically uses AVX2/NEON SIMD when available.

use crate::error::CompareError;
use fast_image_resize::{images::Image, PixelType, ResizeOptions, Resizer};
use image::{GrayImage, ImageBuffer, Luma};

/// Fast grayscale resizer using SIMD acceleration
pub struct FastResizer {
    resizer: Resizer,
}

impl FastResizer {
    /// Create a new fast resizer
    pub fn new() -> Self {
        Self {
            resizer: Resizer::new(),
        }
    }

    /// Resize a grayscale image to exactly `width` x `height` (bilinear).
    pub fn resize(
        &mut self,
        gray: &GrayImage,
        width: u32,
        height: u32,
    ) -> Result<GrayImage, CompareError> {
        let (src_width, src_height) = gray.dimensions();

        if src_width == 0 || src_height == 0 {
            return Err(CompareError::ResizeFailed(
                "Invalid source dimensions".to_string(),
            ));
        }

        if width == 0 || height == 0 {
            return Err(CompareError::ResizeFailed(
                "Invalid destination dimensions".to_string(),
            ));
        }

        if (src_width, src_height) == (width, height) {
            return Ok(gray.clone());
        }

        let src_image = Image::from_vec_u8(src_width, src_height, gray.as_raw().clone(), PixelType::U8)
            .map_err(|e| CompareError::ResizeFailed(format!("Failed to create source image: {}", e)))?;

        let mut dst_image = Image::new(width, height, PixelType::U8);

        let options = ResizeOptions::new()
            .resize_alg(fast_image_resize::ResizeAlg::Convolution(
                fast_image_resize::FilterType::Bilinear,
            ));

        self.resizer
            .resize(&src_image, &mut dst_image, &options)
            .map_err(|e| CompareError::ResizeFailed(e.to_string()))?;

        let result_buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
            ImageBuffer::from_raw(width, height, dst_image.into_vec()).ok_or_else(|| {
                CompareError::ResizeFailed("Failed to create result buffer".to_string())
            })?;

        Ok(result_buffer)
    }
}

impl Default for FastResizer {
    fn default() -> Self {
        Self::new()
    }
}
