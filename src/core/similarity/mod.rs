//! # Similarity Module
//!
//! Scores how alike two normalized letter images are.
//!
//! The heavy lifting is done by the `image-compare` crate; this module wraps it
//! behind [`SimilarityMetric`] so the decision step only sees a score and a
//! difference map.

mod structural;
mod traits;

pub use structural::StructuralSimilarity;
pub use traits::{SimilarityMetric, SimilarityScore};
