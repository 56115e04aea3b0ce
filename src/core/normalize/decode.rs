//! Fast image decoding with format-specific optimizations.
//!
//! The format is sniffed from the file contents, never the extension.
//! JPEG data goes through zune-jpeg (1.5-2x faster than image crate),
//! everything else through the image crate.

use crate::error::LoadError;
use image::{DynamicImage, ImageBuffer, ImageFormat, ImageReader, Luma, Rgb};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

/// Fast image decoder that uses optimized decoders per format
pub struct FastDecoder;

impl FastDecoder {
    /// Decode an image from a file path, keeping every channel it carries.
    ///
    /// The format comes from the file contents; the extension is ignored.
    ///
    /// - JPEG: zune-jpeg, falling back to the image crate on failure
    /// - Other formats: image crate
    pub fn decode(path: &Path) -> Result<DynamicImage, LoadError> {
        if !path.is_file() {
            return Err(LoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let reader = Self::sniff(path)?;
        let image = match reader.format() {
            Some(ImageFormat::Jpeg) => {
                Self::decode_jpeg(path).or_else(|_| Self::decode_reader(reader, path))
            }
            _ => Self::decode_reader(reader, path),
        }?;

        Self::ensure_not_empty(image, path)
    }

    /// Decode an in-memory encoded image (PNG upload, embedded fixture).
    pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, LoadError> {
        let label = PathBuf::from("<memory>");
        let image = image::load_from_memory(bytes).map_err(|e| LoadError::DecodeError {
            path: label.clone(),
            reason: e.to_string(),
        })?;

        Self::ensure_not_empty(image, &label)
    }

    fn ensure_not_empty(image: DynamicImage, path: &Path) -> Result<DynamicImage, LoadError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(LoadError::EmptyImage {
                path: path.to_path_buf(),
            });
        }
        Ok(image)
    }

    /// Fast JPEG decoding using zune-jpeg
    fn decode_jpeg(path: &Path) -> Result<DynamicImage, LoadError> {
        let file_bytes = fs::read(path).map_err(|e| LoadError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let options = DecoderOptions::new_fast().jpeg_set_out_colorspace(ColorSpace::RGB);
        let mut decoder = JpegDecoder::new_with_options(&file_bytes, options);

        let pixels = decoder.decode().map_err(|e| LoadError::DecodeError {
            path: path.to_path_buf(),
            reason: format!("zune-jpeg decode failed: {:?}", e),
        })?;

        let info = decoder.info().ok_or_else(|| LoadError::DecodeError {
            path: path.to_path_buf(),
            reason: "Failed to get image info".to_string(),
        })?;

        let width = info.width as u32;
        let height = info.height as u32;

        let image = match decoder.get_output_colorspace().unwrap_or(ColorSpace::RGB) {
            ColorSpace::RGB => {
                let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
                    ImageBuffer::from_raw(width, height, pixels).ok_or_else(|| {
                        LoadError::DecodeError {
                            path: path.to_path_buf(),
                            reason: "Failed to create RGB buffer".to_string(),
                        }
                    })?;
                DynamicImage::ImageRgb8(buffer)
            }
            ColorSpace::Luma => {
                let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
                    ImageBuffer::from_raw(width, height, pixels).ok_or_else(|| {
                        LoadError::DecodeError {
                            path: path.to_path_buf(),
                            reason: "Failed to create Luma buffer".to_string(),
                        }
                    })?;
                DynamicImage::ImageLuma8(buffer)
            }
            // CMYK and friends
            _ => return Self::decode_reader(Self::sniff(path)?, path),
        };

        Ok(image)
    }

    /// Open `path` with its format guessed from the leading bytes
    fn sniff(path: &Path) -> Result<ImageReader<BufReader<fs::File>>, LoadError> {
        let io_error = |source| LoadError::IoError {
            path: path.to_path_buf(),
            source,
        };
        ImageReader::open(path)
            .map_err(io_error)?
            .with_guessed_format()
            .map_err(io_error)
    }

    fn decode_reader(
        reader: ImageReader<BufReader<fs::File>>,
        path: &Path,
    ) -> Result<DynamicImage, LoadError> {
        reader.decode().map_err(|e| match e {
            image::ImageError::IoError(source) => LoadError::IoError {
                path: path.to_path_buf(),
                source,
            },
            other => LoadError::DecodeError {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        })
    }
}
