mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{Algorithm, Cli, Commands};
pub use crate::core::processor::ImageProcessor;
pub use crate::core::{
    AggregateState, AnalyzeConfig, ImageRecord, NormalizeConfig, PrepError, ProcessingStats,
    ResizeAlgorithm, Resolution, Result, Tally,
};
pub use processors::{
    AnalysisSummary, Analyzer, Compressor, FitPlan, Loader, Normalizer, Resizer, ScopeReport,
    REPORT_FILE_NAME,
};
pub use utils::{has_image_suffix, is_image_file_name};

pub mod prelude {
    pub use crate::{
        AnalyzeConfig, Analyzer, Compressor, FitPlan, ImageProcessor, Loader, NormalizeConfig,
        Normalizer, Resizer,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
