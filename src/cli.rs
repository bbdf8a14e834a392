// imgprep/src/cli.rs
use crate::core::ResizeAlgorithm;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imgprep", version, about = "Inspect and normalize image datasets")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report resolution, format and color mode distributions
    Analyze {
        /// The directory to analyze
        directory: PathBuf,

        /// Save each report to image_analysis.txt in its directory
        #[arg(long)]
        save: bool,

        /// Report every subdirectory separately
        #[arg(long = "per_subdir", visible_alias = "per-subdir")]
        per_subdir: bool,
    },

    /// Resize or center-crop images into one directory at a fixed size
    Normalize {
        /// Input directories
        #[arg(long, num_args = 0.., default_values = ["dir1", "dir2"])]
        dirs: Vec<PathBuf>,

        /// Output directory
        #[arg(long = "output_dir", visible_alias = "output-dir")]
        output_dir: PathBuf,

        /// Output resolution
        #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"], required = true)]
        size: Vec<u32>,

        /// Interpolation used when upscaling
        #[arg(long, value_enum, default_value_t = Algorithm::Bilinear)]
        algorithm: Algorithm,

        /// JPEG quality (1-100)
        #[arg(long, default_value_t = 95, value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: u8,

        /// Recompress PNG output with oxipng
        #[arg(long)]
        optimize_png: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}
