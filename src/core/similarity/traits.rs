//! Trait definitions for similarity metrics.

use crate::error::CompareError;
use image::GrayImage;

/// Output of a similarity metric
#[derive(Debug, Clone)]
pub struct SimilarityScore {
    /// Scalar similarity; 1.0 means identical
    pub score: f64,
    /// Per-pixel similarity scaled to 0-255 (255 = locally identical)
    pub diff: GrayImage,
}

/// A metric scoring how alike two equally sized grayscale images are
pub trait SimilarityMetric: Send + Sync {
    /// Score two images of identical dimensions
    fn score(&self, left: &GrayImage, right: &GrayImage) -> Result<SimilarityScore, CompareError>;

    /// Highest score the metric can produce
    fn max_score(&self) -> f64 {
        1.0
    }

    /// Short human-readable name
    fn name(&self) -> &'static str;
}
