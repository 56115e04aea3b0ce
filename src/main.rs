//! # letterdetector CLI
//!
//! Command-line interface for the letter detector.
//!
//! ## Usage
//! ```bash
//! letterdetector drawing.png reference/3.png 0.84
//! ```

mod cli;

use letter_detector::Result;

fn main() -> Result<()> {
    letter_detector::init_tracing();
    cli::run()
}
