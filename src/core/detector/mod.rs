//! # Detector Module
//!
//! Runs the full comparison: normalize, score, decide.
//!
//! ## Example
//! ```rust,ignore
//! use letter_detector::core::detector::DetectorConfig;
//!
//! let mut detector = DetectorConfig::new().threshold(0.84).build()?;
//! let verdict = detector.compare(&drawing, &reference)?;
//! println!("{}", verdict.answer());
//! ```

use crate::core::decision::{ThresholdDecision, Verdict, DEFAULT_THRESHOLD};
use crate::core::normalize::{NormalizedPair, Normalizer, DEFAULT_TARGET_SIZE};
use crate::core::similarity::{SimilarityMetric, StructuralSimilarity};
use crate::error::{LetterDetectorError, Result};
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Configuration builder for the detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Width both images are resized to
    target_width: u32,
    /// Height both images are resized to
    target_height: u32,
    /// Minimum score counted as the same letter
    threshold: f64,
}

impl DetectorConfig {
    /// Create a configuration with defaults (300x300, threshold 0.84)
    pub fn new() -> Self {
        Self {
            target_width: DEFAULT_TARGET_SIZE,
            target_height: DEFAULT_TARGET_SIZE,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Set the common resolution both images are resized to
    pub fn target_size(mut self, width: u32, height: u32) -> Self {
        self.target_width = width;
        self.target_height = height;
        self
    }

    /// Set the similarity threshold.
    ///
    /// Any value is accepted: `-inf` matches everything, `inf` and NaN nothing.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Validate and build the detector
    pub fn build(self) -> Result<LetterDetector> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(LetterDetectorError::Config(format!(
                "target size must be non-zero, got {}x{}",
                self.target_width, self.target_height
            )));
        }
        Ok(LetterDetector {
            normalizer: Normalizer::new(self.target_width, self.target_height),
            metric: Box::new(StructuralSimilarity::new()),
            decision: ThresholdDecision::new(self.threshold),
        })
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares letter images and decides whether they show the same letter
pub struct LetterDetector {
    normalizer: Normalizer,
    metric: Box<dyn SimilarityMetric>,
    decision: ThresholdDecision,
}

impl LetterDetector {
    /// Replace the similarity metric
    pub fn with_metric(mut self, metric: Box<dyn SimilarityMetric>) -> Self {
        self.metric = metric;
        self
    }

    /// Compare two image files.
    ///
    /// The first image is treated as the drawing: any transparency is
    /// composited onto white before comparison.
    pub fn compare(&mut self, first: &Path, second: &Path) -> Result<Verdict> {
        let pair = self.normalizer.load_pair(first, second)?;
        self.score_pair(&pair)
    }

    /// Compare two already-decoded images.
    pub fn compare_images(&mut self, first: &DynamicImage, second: &DynamicImage) -> Result<Verdict> {
        let pair = self.normalizer.normalize_pair(first, second)?;
        self.score_pair(&pair)
    }

    fn score_pair(&self, pair: &NormalizedPair) -> Result<Verdict> {
        let scored = self.metric.score(&pair.first, &pair.second)?;
        let verdict = self.decision.decide(scored.score, scored.diff);

        debug!(
            metric = self.metric.name(),
            score = verdict.score,
            threshold = self.decision.threshold(),
            same_letter = verdict.same_letter,
            "scored letter pair"
        );

        Ok(verdict)
    }
}

/// Compare two letter images, never failing.
///
/// Any error, in practice an unreadable image, is logged and reported as
/// [`Verdict::load_failed`].
pub fn are_same_letter(first: &Path, second: &Path, threshold: f64) -> Verdict {
    let outcome = DetectorConfig::new()
        .threshold(threshold)
        .build()
        .and_then(|mut detector| detector.compare(first, second));

    match outcome {
        Ok(verdict) => verdict,
        Err(error) => {
            warn!(%error, "could not compare letter images");
            Verdict::load_failed()
        }
    }
}
