// imgprep/src/processors/mod.rs
mod analyzer;
mod compressor;
mod loader;
mod normalizer;
mod report;
mod resizer;

pub use analyzer::{AnalysisSummary, Analyzer};
pub use compressor::Compressor;
pub use loader::Loader;
pub use normalizer::Normalizer;
pub use report::{ScopeReport, REPORT_FILE_NAME};
pub use resizer::{FitPlan, Resizer};
