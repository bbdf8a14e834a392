use anyhow::{bail, Context, Result};
use clap::Parser;
use imgprep::{AnalyzeConfig, Analyzer, Cli, Commands, NormalizeConfig, Normalizer};
use log::LevelFilter;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics share stdout with the reports
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .target(env_logger::Target::Stdout)
        .init();

    match cli.command {
        Commands::Analyze {
            directory,
            save,
            per_subdir,
        } => {
            process_analyze(directory, save, per_subdir)?;
        }
        Commands::Normalize {
            dirs,
            output_dir,
            size,
            algorithm,
            quality,
            optimize_png,
        } => {
            let target_size = match size.as_slice() {
                [width, height] => (*width, *height),
                _ => bail!("--size takes exactly two values: WIDTH HEIGHT"),
            };

            let config = NormalizeConfig {
                source_dirs: dirs,
                output_dir,
                target_size,
                algorithm: algorithm.into(),
                quality,
                optimize_png,
            };
            process_normalize(config)?;
        }
    }

    Ok(())
}

fn process_analyze(directory: PathBuf, save: bool, per_subdir: bool) -> Result<()> {
    let config = AnalyzeConfig {
        directory: directory.clone(),
        save_results: save,
        per_subdir,
    };

    let summary = Analyzer::new(config)
        .analyze()
        .with_context(|| format!("Failed to analyze {}", directory.display()))?;

    if !summary.skipped.is_empty() {
        log::info!("Skipped {} unreadable images", summary.skipped.len());
    }

    Ok(())
}

fn process_normalize(config: NormalizeConfig) -> Result<()> {
    let normalizer = Normalizer::new(config).context("Invalid normalize options")?;
    let stats = normalizer.run().context("Normalization failed")?;

    println!(
        "Normalization complete. Processed {} images ({} resized, {} cropped) from {} directories to: {}",
        stats.processed_count,
        stats.resized_count,
        stats.cropped_count,
        stats.source_dirs,
        normalizer.output_dir().display()
    );

    Ok(())
}
