// imgprep/src/processors/analyzer.rs
use crate::core::{AggregateState, AnalyzeConfig, PrepError, Result};
use crate::processors::{Loader, ScopeReport};
use crate::utils::is_image_file_name;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Everything an analyze run produced, in emission order.
#[derive(Debug, Default, Clone)]
pub struct AnalysisSummary {
    pub reports: Vec<ScopeReport>,
    /// Directories visited below the root.
    pub subdirs: usize,
    /// Image files that could not be read.
    pub skipped: Vec<PathBuf>,
}

pub struct Analyzer {
    config: AnalyzeConfig,
    loader: Loader,
}

impl Analyzer {
    pub fn new(config: AnalyzeConfig) -> Self {
        Self {
            config,
            loader: Loader::new(),
        }
    }

    pub fn analyze(&self) -> Result<AnalysisSummary> {
        let root = self.config.directory.as_path();
        let per_subdir = self.config.per_subdir;

        if !root.is_dir() {
            return Err(PrepError::DirectoryNotFound(root.to_path_buf()));
        }

        log::debug!("Analyzing images in {}", root.display());

        let mut summary = AnalysisSummary::default();
        let mut state = AggregateState::new();

        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(PrepError::Directory {
                        path: root.to_path_buf(),
                        source: e.into(),
                    })
                }
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let dir = entry.path();
            let is_root = entry.depth() == 0;

            let files = match self.collect_image_paths(dir) {
                Ok(files) => files,
                Err(e) if is_root => return Err(e),
                Err(e) => {
                    log::warn!("{}", e);
                    continue;
                }
            };

            if !is_root {
                summary.subdirs += 1;
                if per_subdir {
                    state = AggregateState::new();
                }
            }

            let (scanned, skipped) = self.scan_files(&files, state);
            state = scanned;
            summary.skipped.extend(skipped);

            if per_subdir && !state.is_empty() {
                self.emit(ScopeReport::new(dir, state.clone()), &mut summary)?;
            }
        }

        if !per_subdir {
            self.emit(ScopeReport::new(root, state), &mut summary)?;
            println!("\nNumber of subdirectories analyzed: {}", summary.subdirs);
        }

        Ok(summary)
    }

    /// Folds every readable image in `files` into `state`.
    ///
    /// Unreadable files are returned separately and leave the counters alone.
    pub fn scan_files(
        &self,
        files: &[PathBuf],
        mut state: AggregateState,
    ) -> (AggregateState, Vec<PathBuf>) {
        let mut skipped = Vec::new();

        for path in files {
            match self.loader.probe(path) {
                Ok(record) => state.record(&record),
                Err(e) => {
                    log::warn!("Couldn't read {}. Skipping.", path.display());
                    log::debug!("{}", e);
                    skipped.push(path.clone());
                }
            }
        }

        (state, skipped)
    }

    fn collect_image_paths(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| PrepError::Directory {
                path: dir.to_path_buf(),
                source: e.into(),
            })?;

            // Symlinks to directories count as directories, not files.
            if entry.path().is_dir() {
                continue;
            }

            if is_image_file_name(&entry.file_name().to_string_lossy()) {
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }

    fn emit(&self, report: ScopeReport, summary: &mut AnalysisSummary) -> Result<()> {
        println!("{}", report.render());

        if self.config.save_results {
            report.save()?;
        }

        summary.reports.push(report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::new(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn scan_of_one_directory_in_isolation() {
        let dir = TempDir::new().unwrap();
        let files = vec![
            write_png(dir.path(), "a.png", 8, 8),
            write_png(dir.path(), "b.png", 4, 2),
        ];
        let analyzer = Analyzer::new(AnalyzeConfig::new(dir.path()));

        let (state, skipped) = analyzer.scan_files(&files, AggregateState::new());
        assert_eq!(state.total_images, 2);
        assert!(skipped.is_empty());

        // Folding again continues from the given state.
        let (state, _) = analyzer.scan_files(&files[..1], state);
        assert_eq!(state.total_images, 3);
    }

    #[test]
    fn collects_images_ignoring_case_and_other_files() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "upper.PNG", 1, 1);
        write_png(dir.path(), "lower.png", 1, 1);
        std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let analyzer = Analyzer::new(AnalyzeConfig::new(dir.path()));
        let mut names: Vec<String> = analyzer
            .collect_image_paths(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, vec!["lower.png", "upper.PNG"]);
    }

    #[test]
    fn root_images_get_their_own_scope_per_subdir() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "root.png", 3, 3);
        let child = dir.path().join("child");
        std::fs::create_dir(&child).unwrap();
        write_png(&child, "c1.png", 5, 5);
        write_png(&child, "c2.png", 5, 5);

        let config = AnalyzeConfig {
            per_subdir: true,
            ..AnalyzeConfig::new(dir.path())
        };
        let summary = Analyzer::new(config).analyze().unwrap();

        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.reports[0].directory, dir.path());
        assert_eq!(summary.reports[0].state.total_images, 1);
        assert_eq!(summary.reports[1].directory, child);
        assert_eq!(summary.reports[1].state.total_images, 2);
    }

    #[test]
    fn whole_tree_accumulates_across_directories() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "root.png", 3, 3);
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        write_png(&nested, "deep.png", 9, 9);

        let summary = Analyzer::new(AnalyzeConfig::new(dir.path()))
            .analyze()
            .unwrap();

        assert_eq!(summary.reports.len(), 1);
        assert_eq!(summary.reports[0].state.total_images, 2);
        assert_eq!(summary.subdirs, 2);
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = Analyzer::new(AnalyzeConfig::new(&missing))
            .analyze()
            .unwrap_err();
        assert!(matches!(err, PrepError::DirectoryNotFound(_)));
        assert!(!err.is_skippable());
    }
}
