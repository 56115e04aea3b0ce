//! # Decision Module
//!
//! Turns a similarity score into a "same letter" verdict.

use image::GrayImage;
use serde::{Deserialize, Serialize};

/// Threshold the web backend uses when checking a child's drawing
pub const DEFAULT_THRESHOLD: f64 = 0.84;

/// Score reported when one of the images could not be loaded
pub const LOAD_FAILURE_SCORE: f64 = -2.0;

/// Threshold-based decision: scores at or above the threshold are a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdDecision {
    threshold: f64,
}

impl ThresholdDecision {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether `score` counts as the same letter
    pub fn is_same_letter(&self, score: f64) -> bool {
        score >= self.threshold
    }

    /// Build the full verdict for a scored pair
    pub fn decide(&self, score: f64, diff: GrayImage) -> Verdict {
        Verdict {
            same_letter: self.is_same_letter(score),
            score,
            diff: Some(diff),
        }
    }
}

impl Default for ThresholdDecision {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Result of comparing two letter images
#[derive(Debug, Clone)]
pub struct Verdict {
    /// True when the score reached the threshold
    pub same_letter: bool,
    /// Similarity score, or [`LOAD_FAILURE_SCORE`] if loading failed
    pub score: f64,
    /// 8-bit difference map; absent when loading failed
    pub diff: Option<GrayImage>,
}

impl Verdict {
    /// Sentinel verdict for an unreadable image
    pub fn load_failed() -> Self {
        Self {
            same_letter: false,
            score: LOAD_FAILURE_SCORE,
            diff: None,
        }
    }

    pub fn is_load_failure(&self) -> bool {
        self.diff.is_none()
    }

    /// "YES" or "NO"
    pub fn answer(&self) -> &'static str {
        if self.same_letter {
            "YES"
        } else {
            "NO"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        let decision = ThresholdDecision::new(0.84);

        assert!(decision.is_same_letter(0.85));
        assert!(decision.is_same_letter(0.84));
        assert!(!decision.is_same_letter(0.8399));
    }

    #[test]
    fn lowering_threshold_never_revokes_a_match() {
        let scores = [-1.0, -0.2, 0.0, 0.5, 0.84, 0.9, 1.0];
        let thresholds = [1.0, 0.95, 0.84, 0.5, 0.0, -0.5, -1.0];

        for score in scores {
            let mut matched = false;
            for threshold in thresholds {
                let now = ThresholdDecision::new(threshold).is_same_letter(score);
                assert!(now || !matched, "score {score} lost its match at {threshold}");
                matched = now;
            }
        }
    }

    #[test]
    fn decide_carries_score_and_diff() {
        let verdict = ThresholdDecision::default().decide(0.9, GrayImage::new(3, 3));

        assert!(verdict.same_letter);
        assert_eq!(verdict.score, 0.9);
        assert_eq!(verdict.answer(), "YES");
        assert!(!verdict.is_load_failure());
    }

    #[test]
    fn load_failure_sentinel() {
        let verdict = Verdict::load_failed();

        assert!(!verdict.same_letter);
        assert_eq!(verdict.score, LOAD_FAILURE_SCORE);
        assert!(verdict.diff.is_none());
        assert!(verdict.is_load_failure());
        assert_eq!(verdict.answer(), "NO");
    }

    #[test]
    fn default_threshold_matches_backend() {
        assert_eq!(ThresholdDecision::default().threshold(), 0.84);
    }
}
