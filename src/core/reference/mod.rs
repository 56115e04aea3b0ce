//! # Reference Module
//!
//! Checks a drawing against the stored reference glyph for a letter.
//!
//! References live in one directory as `<letter_index>.png`. The drawing is
//! always the first image so its transparent canvas is flattened onto white.

use crate::core::decision::Verdict;
use crate::core::detector::LetterDetector;
use crate::core::normalize::FastDecoder;
use crate::error::{ReferenceError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of checking a drawing against a reference letter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterCheck {
    pub is_match: bool,
    pub similarity: f64,
}

impl From<&Verdict> for LetterCheck {
    fn from(verdict: &Verdict) -> Self {
        Self {
            is_match: verdict.same_letter,
            similarity: verdict.score,
        }
    }
}

/// A directory of reference letter images
#[derive(Debug, Clone)]
pub struct ReferenceLetters {
    dir: PathBuf,
}

impl ReferenceLetters {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the reference image for `index`
    pub fn path_for(&self, index: u32) -> PathBuf {
        self.dir.join(format!("{}.png", index))
    }

    fn existing_path(&self, index: u32) -> Result<PathBuf> {
        let path = self.path_for(index);
        if !path.is_file() {
            return Err(ReferenceError::NotFound { index, path }.into());
        }
        Ok(path)
    }

    /// Check a drawing file against reference letter `index`
    pub fn verify(
        &self,
        detector: &mut LetterDetector,
        drawing: &Path,
        index: u32,
    ) -> Result<LetterCheck> {
        let reference = self.existing_path(index)?;
        debug!(index, reference = %reference.display(), "checking drawing");

        let verdict = detector.compare(drawing, &reference)?;
        Ok(LetterCheck::from(&verdict))
    }

    /// Check an encoded in-memory drawing (e.g. an uploaded PNG)
    pub fn verify_bytes(
        &self,
        detector: &mut LetterDetector,
        drawing: &[u8],
        index: u32,
    ) -> Result<LetterCheck> {
        let reference = self.existing_path(index)?;

        let drawing = FastDecoder::decode_bytes(drawing)?;
        let reference = FastDecoder::decode(&reference)?;

        let verdict = detector.compare_images(&drawing, &reference)?;
        Ok(LetterCheck::from(&verdict))
    }
}
