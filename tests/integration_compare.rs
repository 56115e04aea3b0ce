//! Integration tests for letter comparison.
//!
//! These tests verify end-to-end behavior on real files:
//! - Identical and different glyphs
//! - Missing and corrupt files
//! - Transparent drawings
//! - Threshold monotonicity

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use letter_detector::core::{are_same_letter, DetectorConfig, LOAD_FAILURE_SCORE};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Draw a crude glyph: `strokes` lists (x0, y0, x1, y1) black rectangles on white
fn save_glyph(dir: &Path, name: &str, strokes: &[(u32, u32, u32, u32)]) -> PathBuf {
    let image = RgbImage::from_fn(120, 120, |x, y| {
        let inked = strokes
            .iter()
            .any(|&(x0, y0, x1, y1)| (x0..x1).contains(&x) && (y0..y1).contains(&y));
        if inked {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

const LETTER_T: &[(u32, u32, u32, u32)] = &[(10, 10, 110, 25), (52, 10, 68, 110)];
const LETTER_L: &[(u32, u32, u32, u32)] = &[(15, 10, 30, 110), (15, 95, 105, 110)];

#[test]
fn identical_images_score_maximum_and_match() {
    let temp_dir = TempDir::new().unwrap();
    let t = save_glyph(temp_dir.path(), "t.png", LETTER_T);

    for threshold in [-1.0, 0.0, 0.5, 0.84, 0.99] {
        let verdict = are_same_letter(&t, &t, threshold);

        assert!((verdict.score - 1.0).abs() < 1e-6);
        assert!(verdict.same_letter, "threshold {threshold}");
    }
}

#[test]
fn different_letters_score_lower_than_identical() {
    let temp_dir = TempDir::new().unwrap();
    let t = save_glyph(temp_dir.path(), "t.png", LETTER_T);
    let l = save_glyph(temp_dir.path(), "l.png", LETTER_L);

    let verdict = are_same_letter(&t, &l, 0.99);

    assert!(!verdict.is_load_failure());
    assert!(verdict.score < 0.99);
    assert!(!verdict.same_letter);
}

#[test]
fn nonexistent_path_returns_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    let t = save_glyph(temp_dir.path(), "t.png", LETTER_T);
    let missing = temp_dir.path().join("missing.png");

    for (first, second) in [(&t, &missing), (&missing, &t)] {
        let verdict = are_same_letter(first, second, 0.84);

        assert!(!verdict.same_letter);
        assert_eq!(verdict.score, LOAD_FAILURE_SCORE);
        assert!(verdict.diff.is_none());
    }
}

#[test]
fn corrupt_file_returns_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    let t = save_glyph(temp_dir.path(), "t.png", LETTER_T);
    let corrupt = temp_dir.path().join("corrupt.png");
    fs::write(&corrupt, b"this is not a valid image file").unwrap();

    let verdict = are_same_letter(&corrupt, &t, 0.84);

    assert!(verdict.is_load_failure());
}

#[test]
fn verdict_is_monotonic_in_threshold() {
    let temp_dir = TempDir::new().unwrap();
    let t = save_glyph(temp_dir.path(), "t.png", LETTER_T);
    let l = save_glyph(temp_dir.path(), "l.png", LETTER_L);

    let mut matched = false;
    for step in (0..=20).rev() {
        let threshold = -1.0 + step as f64 * 0.1;
        let verdict = are_same_letter(&t, &l, threshold);
        assert!(verdict.same_letter || !matched, "match lost at {threshold}");
        matched = verdict.same_letter;
    }
    assert!(matched, "threshold -1.0 must accept every pair");
}

#[test]
fn transparent_drawing_is_flattened_onto_white() {
    let temp_dir = TempDir::new().unwrap();
    let reference = save_glyph(temp_dir.path(), "t.png", LETTER_T);

    // Same glyph, but the background is fully transparent black
    let drawing = RgbaImage::from_fn(120, 120, |x, y| {
        let inked = LETTER_T
            .iter()
            .any(|&(x0, y0, x1, y1)| (x0..x1).contains(&x) && (y0..y1).contains(&y));
        if inked {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let drawing_path = temp_dir.path().join("drawing.png");
    drawing.save(&drawing_path).unwrap();

    let verdict = are_same_letter(&drawing_path, &reference, 0.84);

    assert!(verdict.same_letter);
    assert!(verdict.score > 0.99);
}

#[test]
fn diff_map_has_target_resolution() {
    let temp_dir = TempDir::new().unwrap();
    let t = save_glyph(temp_dir.path(), "t.png", LETTER_T);
    let l = save_glyph(temp_dir.path(), "l.png", LETTER_L);

    let mut detector = DetectorConfig::new().build().unwrap();
    let verdict = detector.compare(&t, &l).unwrap();
    let diff = verdict.diff.unwrap();

    assert_eq!(diff.dimensions(), (300, 300));
    assert!(diff.pixels().any(|p| p[0] < 128));
}

#[test]
fn format_is_detected_from_contents_not_extension() {
    let temp_dir = TempDir::new().unwrap();
    let glyph = RgbaImage::from_pixel(40, 40, Rgba([0, 0, 0, 255]));

    let extensionless = temp_dir.path().join("drawing_upload");
    glyph.save_with_format(&extensionless, ImageFormat::Png).unwrap();
    let mislabeled = temp_dir.path().join("mislabeled.jpg");
    glyph.save_with_format(&mislabeled, ImageFormat::Png).unwrap();

    for path in [&extensionless, &mislabeled] {
        let verdict = are_same_letter(path, path, 0.84);

        assert!(!verdict.is_load_failure(), "{}", path.display());
        assert!((verdict.score - 1.0).abs() < 1e-6);
        assert!(verdict.same_letter);
    }
}
