// imgprep/src/processors/report.rs
use crate::core::{AggregateState, Resolution, Result, Tally};
use crate::utils::format_percentage;
use std::fmt::Display;
use std::hash::Hash;
use std::path::PathBuf;

pub const REPORT_FILE_NAME: &str = "image_analysis.txt";

/// Statistics for one directory scope, ready to print or persist.
#[derive(Debug, Clone)]
pub struct ScopeReport {
    pub directory: PathBuf,
    pub state: AggregateState,
}

impl ScopeReport {
    pub fn new(directory: impl Into<PathBuf>, state: AggregateState) -> Self {
        Self {
            directory: directory.into(),
            state,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let state = &self.state;
        let total = state.total_images;

        let mut output = vec![
            format!("Directory: {}", self.directory.display()),
            format!("Total number of images: {}", total),
        ];

        if total == 0 {
            output.push(String::new());
            output.push("No images found, no statistics to report.".to_string());
            return output;
        }

        output.push(String::new());
        output.push("Resolution info:".to_string());
        push_distribution(&mut output, &state.resolutions, total);

        output.push(String::new());
        output.push(format!("Smallest resolution: {}", display_extreme(state.smallest)));
        output.push(format!("Largest resolution: {}", display_extreme(state.largest)));

        output.push(String::new());
        output.push("Format info:".to_string());
        push_distribution(&mut output, &state.formats, total);

        output.push(String::new());
        output.push("Mode info:".to_string());
        push_distribution(&mut output, &state.modes, total);

        output
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }

    pub fn report_path(&self) -> PathBuf {
        self.directory.join(REPORT_FILE_NAME)
    }

    /// Writes the rendered report next to the images it describes.
    pub fn save(&self) -> Result<PathBuf> {
        let path = self.report_path();
        std::fs::write(&path, self.render())?;
        log::debug!("Saved report to {}", path.display());
        Ok(path)
    }
}

fn push_distribution<K>(output: &mut Vec<String>, tally: &Tally<K>, total: usize)
where
    K: Display + Eq + Hash + Clone,
{
    for (key, count) in tally.iter() {
        output.push(format!(
            "{}: {} images ({}%)",
            key,
            count,
            format_percentage(count, total)
        ));
    }
}

fn display_extreme(resolution: Option<Resolution>) -> String {
    resolution
        .map(|r| r.to_string())
        .unwrap_or_else(|| "None".to_string())
}
