// imgprep/src/processors/loader.rs
use crate::core::{ImageRecord, PrepError, Resolution, Result};
use crate::utils::{color_mode_tag, image_format_to_string};
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use std::path::Path;

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Reads resolution, container format and color mode from the header
    /// without decoding pixel data.
    pub fn probe(&self, path: &Path) -> Result<ImageRecord> {
        let decode_err = |source: image::ImageError| PrepError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?;

        let format = reader
            .format()
            .map(image_format_to_string)
            .unwrap_or_else(|| "UNKNOWN".to_string());

        let decoder = reader.into_decoder().map_err(decode_err)?;
        let (width, height) = decoder.dimensions();
        let mode = color_mode_tag(decoder.original_color_type());

        log::debug!(
            "Probed {}: {}x{} {} {}",
            path.display(),
            width,
            height,
            format,
            mode
        );

        Ok(ImageRecord {
            resolution: Resolution::new(width, height),
            format,
            mode,
        })
    }

    /// Decodes the whole image into an 8-bit RGB buffer.
    ///
    /// Alpha is dropped and grayscale expanded so every image reaching the
    /// fit step has the same three-channel layout.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|source| PrepError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
    }

    pub fn detect_format(&self, path: &Path) -> Result<ImageFormat> {
        ImageFormat::from_path(path).map_err(|_| {
            PrepError::ProcessingError(format!(
                "Failed to detect format for: {}",
                path.display()
            ))
        })
    }
}
