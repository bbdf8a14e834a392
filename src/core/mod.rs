// imgprep/src/core/mod.rs
pub mod processor;
pub mod state;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub use state::{AggregateState, Tally};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeAlgorithm {
    Nearest,
    #[default]
    Bilinear,
    Bicubic,
    Lanczos3,
}

/// Pixel dimensions of an image.
///
/// Ordering is lexicographic: width is compared first, height only breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// Header-level facts about one image file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub resolution: Resolution,
    pub format: String,
    pub mode: String,
}

#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub directory: PathBuf,
    pub save_results: bool,
    pub per_subdir: bool,
}

impl AnalyzeConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            save_results: false,
            per_subdir: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    pub source_dirs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    /// Target (width, height).
    pub target_size: (u32, u32),
    pub algorithm: ResizeAlgorithm,
    pub quality: u8,
    pub optimize_png: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            source_dirs: vec![PathBuf::from("dir1"), PathBuf::from("dir2")],
            output_dir: PathBuf::new(),
            target_size: (0, 0),
            algorithm: ResizeAlgorithm::Bilinear,
            quality: 95,
            optimize_png: false,
        }
    }
}

impl NormalizeConfig {
    pub fn validate(&self) -> Result<()> {
        // Target dimensions are deliberately left unchecked.
        if self.quality == 0 || self.quality > 100 {
            return Err(PrepError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(PrepError::InvalidParameter(
                "Output directory must be specified".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub processed_count: usize,
    pub resized_count: usize,
    pub cropped_count: usize,
    pub source_dirs: usize,
}

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Cannot read directory {}: {source}", path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Couldn't read {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Processing error: {0}")]
    ProcessingError(String),
}

impl PrepError {
    /// Whether a scan may log this error and move on to the next file.
    pub fn is_skippable(&self) -> bool {
        matches!(self, PrepError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;
