// imgprep/src/processors/normalizer.rs
use crate::core::processor::ImageProcessor;
use crate::core::{NormalizeConfig, PrepError, ProcessingStats, Result};
use crate::processors::FitPlan;
use crate::utils::{dir_base_name, has_image_suffix, output_file_name};
use indicatif::{ProgressBar, ProgressStyle};
use std::ffi::OsString;
use std::path::Path;
use walkdir::WalkDir;

/// Brings every image of several source directories to one fixed size.
pub struct Normalizer {
    config: NormalizeConfig,
    processor: ImageProcessor,
}

impl Normalizer {
    pub fn new(config: NormalizeConfig) -> Result<Self> {
        config.validate()?;
        let processor = ImageProcessor::new(&config);

        Ok(Self { config, processor })
    }

    /// Processes the source directories in order.
    ///
    /// The first error of any kind stops the run; files already written stay.
    pub fn run(&self) -> Result<ProcessingStats> {
        let output_dir = &self.config.output_dir;
        std::fs::create_dir_all(output_dir)?;

        let mut stats = ProcessingStats::default();

        for source_dir in &self.config.source_dirs {
            self.process_directory(source_dir, output_dir, &mut stats)?;
            stats.source_dirs += 1;
        }

        Ok(stats)
    }

    fn process_directory(
        &self,
        source_dir: &Path,
        output_dir: &Path,
        stats: &mut ProcessingStats,
    ) -> Result<()> {
        let base_name = dir_base_name(source_dir);
        let file_names = self.collect_image_names(source_dir)?;

        log::info!(
            "Processing {} images from {}",
            file_names.len(),
            source_dir.display()
        );

        let pb = self.create_progress_bar(file_names.len());

        for file_name in &file_names {
            let input_path = source_dir.join(file_name);
            let output_path = output_dir.join(output_file_name(&base_name, file_name));

            match self.processor.process(&input_path, &output_path)? {
                FitPlan::Resize { .. } => stats.resized_count += 1,
                FitPlan::Crop { .. } => stats.cropped_count += 1,
            }
            stats.processed_count += 1;
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(())
    }

    fn collect_image_names(&self, source_dir: &Path) -> Result<Vec<OsString>> {
        let mut names = Vec::new();

        for entry in WalkDir::new(source_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| PrepError::Directory {
                path: source_dir.to_path_buf(),
                source: e.into(),
            })?;

            if has_image_suffix(&entry.file_name().to_string_lossy()) {
                names.push(entry.file_name().to_os_string());
            }
        }

        Ok(names)
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }
}
