//! # CLI Module
//!
//! ## Usage
//! ```bash
//! letterdetector <image1_path> <image2_path> <similarity_threshold>
//! ```
//!
//! Stdout carries exactly what callers parse:
//! ```text
//! SSIM score: 0.9132
//! Are the same letter: YES
//! ```
//! or, when an image cannot be read,
//! ```text
//! Error: Could not open or find the images.
//! ```

use clap::Parser;
use console::{style, Term};
use letter_detector::core::{DetectorConfig, Verdict};
use letter_detector::error::Result;
use std::path::PathBuf;

/// Line printed when either image cannot be loaded
const LOAD_FAILURE_MESSAGE: &str = "Error: Could not open or find the images.";

/// Letter Detector - Do two images show the same letter?
#[derive(Parser, Debug)]
#[command(name = "letterdetector")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First image (the drawing; transparency is flattened onto white)
    image1_path: PathBuf,

    /// Second image (the reference letter)
    image2_path: PathBuf,

    /// Minimum SSIM score counted as the same letter (`-inf`, `inf` and `nan` allowed)
    #[arg(allow_hyphen_values = true)]
    similarity_threshold: f64,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut detector = DetectorConfig::new()
        .threshold(cli.similarity_threshold)
        .build()?;

    match detector.compare(&cli.image1_path, &cli.image2_path) {
        Ok(verdict) => print_verdict(&verdict),
        Err(error) if error.is_load_failure() => {
            Term::stderr()
                .write_line(&format!("{} {}", style("✗").red().bold(), error))
                .ok();
            println!("{}", LOAD_FAILURE_MESSAGE);
        }
        Err(error) => return Err(error),
    }

    Ok(())
}

fn print_verdict(verdict: &Verdict) {
    println!("SSIM score: {:.4}", verdict.score);
    println!("Are the same letter: {}", verdict.answer());
}
