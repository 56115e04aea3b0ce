//! # Core Module
//!
//! The letter comparison engine.
//!
//! ## Modules
//! - `normalize` - Loads images, flattens transparency, converts to grayscale, resizes
//! - `similarity` - Scores a normalized pair (SSIM)
//! - `decision` - Thresholds the score into a verdict
//! - `detector` - Orchestrates the full comparison
//! - `reference` - Checks drawings against stored reference letters

pub mod decision;
pub mod detector;
pub mod normalize;
pub mod reference;
pub mod similarity;

// Re-export commonly used types
pub use decision::{ThresholdDecision, Verdict, DEFAULT_THRESHOLD, LOAD_FAILURE_SCORE};
pub use detector::{are_same_letter, DetectorConfig, LetterDetector};
pub use normalize::{NormalizedPair, Normalizer};
pub use reference::{LetterCheck, ReferenceLetters};
pub use similarity::{SimilarityMetric, SimilarityScore, StructuralSimilarity};
