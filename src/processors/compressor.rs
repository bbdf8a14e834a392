// imgprep/src/processors/compressor.rs
use crate::core::{PrepError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use oxipng::{optimize_from_memory, Options};
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

pub struct Compressor {
    quality: u8,
    optimize_png: bool,
}

impl Compressor {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
            optimize_png: false,
        }
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    pub fn save_with_format(
        &self,
        image: &DynamicImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<()> {
        log::debug!(
            "Saving image to {} with format {:?}, quality: {}",
            path.display(),
            format,
            self.quality
        );

        match format {
            ImageFormat::Jpeg => self.save_jpeg(image, path),
            ImageFormat::Png => self.save_png(image, path),
            other => Err(PrepError::ProcessingError(format!(
                "Unsupported output format {:?} for {}",
                other,
                path.display()
            ))),
        }
    }

    fn save_jpeg(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
        image.write_with_encoder(encoder)?;
        writer.flush()?;

        self.log_save_result(path)
    }

    fn save_png(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        if self.optimize_png {
            let mut buffer = Cursor::new(Vec::new());
            image.write_to(&mut buffer, ImageFormat::Png)?;

            let optimized = optimize_from_memory(&buffer.into_inner(), &Options::default())
                .map_err(|e| {
                    PrepError::ProcessingError(format!("PNG optimization failed: {}", e))
                })?;

            std::fs::write(path, optimized)?;
        } else {
            let mut writer = BufWriter::new(File::create(path)?);
            image.write_to(&mut writer, ImageFormat::Png)?;
            writer.flush()?;
        }

        self.log_save_result(path)
    }

    fn log_save_result(&self, path: &Path) -> Result<()> {
        let file_size = std::fs::metadata(path)?.len();
        log::debug!("Saved image: {} ({} bytes)", path.display(), file_size);
        Ok(())
    }
}
