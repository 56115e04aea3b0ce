//! Alpha compositing and grayscale conversion.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

/// Channel value of the opaque background transparent pixels are blended onto.
pub const WHITE: u8 = 255;

/// Blend every pixel onto an opaque white background.
///
/// `out = fg * a + 255 * (1 - a)` with `a = alpha / 255`, truncated to `u8`.
pub fn composite_on_white(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        let alpha = a as f64 / 255.0;
        let blend = |channel: u8| {
            (channel as f64 * alpha + WHITE as f64 * (1.0 - alpha)) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Flatten an image to RGB, compositing onto white when it has transparency.
pub fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    if image.color().has_alpha() {
        composite_on_white(&image.to_rgba8())
    } else {
        image.to_rgb8()
    }
}

/// Flatten an image to RGB, discarding any alpha channel unblended.
pub fn flatten_discarding_alpha(image: &DynamicImage) -> RgbImage {
    image.to_rgb8()
}

/// Convert to single-channel luma with BT.601 weights.
///
/// The image crate's `to_luma8` uses Rec. 709 weights; letter references were
/// tuned against `0.299 R + 0.587 G + 0.114 B`.
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
        Luma([luma.round().min(255.0) as u8])
    })
}
