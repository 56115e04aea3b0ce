//! # Error Module
//!
//! Error types for the letter detector.
//!
//! ## Design Principles
//! - **Never panic** on user images - return errors instead
//! - **Include context** - paths and what went wrong
//! - **One failure the caller acts on** - anything that stops an image from
//!   loading is a [`LoadError`]

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum LetterDetectorError {
    #[error("Image loading error: {0}")]
    Load(#[from] LoadError),

    #[error("Comparison error: {0}")]
    Compare(#[from] CompareError),

    #[error("Reference letter error: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LetterDetectorError {
    /// True when the error means one of the images could not be read.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, LetterDetectorError::Load(_))
    }
}

/// Errors that occur while reading an image
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Image not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to open image file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {reason}")]
    DecodeError { path: PathBuf, reason: String },

    #[error("Image is empty or corrupted: {path}")]
    EmptyImage { path: PathBuf },
}

/// Errors that occur while normalizing or scoring a pair of images
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Image dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch { left: (u32, u32), right: (u32, u32) },

    #[error("Resize failed: {0}")]
    ResizeFailed(String),

    #[error("Similarity metric failed: {0}")]
    MetricFailed(String),
}

/// Errors that occur when checking a drawing against a reference letter
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Reference image for letter {index} not found at {path}")]
    NotFound { index: u32, path: PathBuf },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, LetterDetectorError>;
