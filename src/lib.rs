//! # Letter Detector
//!
//! Decides whether two letter-glyph images show the same character.
//!
//! ## How It Works
//! 1. Load both images; flatten the first onto white if it is transparent
//! 2. Convert to grayscale and resize both to 300x300
//! 3. Score the pair with structural similarity (SSIM)
//! 4. Compare the score against a threshold
//!
//! ## Architecture
//! - `core` - The comparison engine
//! - `error` - Error types
//! - `cli` (binary only) - `letterdetector <image1> <image2> <threshold>`

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use crate::core::{are_same_letter, DetectorConfig, LetterDetector, Verdict};
pub use crate::error::{LetterDetectorError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point. Logs go to stderr,
/// filtered by `RUST_LOG` (default `warn`), so stdout stays parseable.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    // A host application may already have installed a subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
