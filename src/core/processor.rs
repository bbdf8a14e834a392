// imgprep/src/core/processor.rs
use super::{NormalizeConfig, Result};
use crate::processors::{Compressor, FitPlan, Loader, Resizer};
use std::path::Path;

/// Load, fit and save a single image.
pub struct ImageProcessor {
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageProcessor {
    pub fn new(config: &NormalizeConfig) -> Self {
        Self {
            loader: Loader::new(),
            resizer: Resizer::new(config.algorithm, config.target_size),
            compressor: Compressor::new(config.quality)
                .with_png_optimization(config.optimize_png),
        }
    }

    pub fn process(&self, input_path: &Path, output_path: &Path) -> Result<FitPlan> {
        let output_format = self.loader.detect_format(output_path)?;
        let image = self.loader.load(input_path)?;

        let (fitted, plan) = self.resizer.fit(&image);
        self.compressor
            .save_with_format(&fitted, output_path, output_format)?;

        Ok(plan)
    }
}
