//! Structural similarity (MSSIM) via the image-compare crate.
//!
//! `Algorithm::MSSIMSimple` scores non-overlapping 8x8 blocks and averages
//! them, so the difference map is constant within each block. A 7x7 window
//! sliding one pixel at a time (scikit-image's default) scores the same pair
//! differently, so thresholds tuned against sliding-window SSIM, such as
//! 0.84, are not exact equivalents here.

use super::traits::{SimilarityMetric, SimilarityScore};
use crate::error::CompareError;
use image::GrayImage;
use image_compare::Algorithm;

/// Mean structural similarity over local windows.
///
/// Scores fall in `[-1, 1]`; identical images score 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralSimilarity;

impl StructuralSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityMetric for StructuralSimilarity {
    fn score(&self, left: &GrayImage, right: &GrayImage) -> Result<SimilarityScore, CompareError> {
        if left.dimensions() != right.dimensions() {
            return Err(CompareError::DimensionMismatch {
                left: left.dimensions(),
                right: right.dimensions(),
            });
        }

        let similarity =
            image_compare::gray_similarity_structure(&Algorithm::MSSIMSimple, left, right)
                .map_err(|e| CompareError::MetricFailed(e.to_string()))?;

        // The color map clamps each local score to [0, 1] and scales it by 255.
        let diff = similarity.image.to_color_map().to_luma8();

        Ok(SimilarityScore {
            score: similarity.score,
            diff,
        })
    }

    fn name(&self) -> &'static str {
        "SSIM"
    }
}
