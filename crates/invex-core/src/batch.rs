//! Sequential extraction over every PDF in an input directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use glob::{MatchOptions, Pattern, glob_with};
use tracing::{debug, info, warn};

use crate::error::{InvexError, Result};
use crate::invoice::{ExtractionResult, InvoiceParser, MarketplaceParser};
use crate::models::config::ExtractionConfig;
use crate::models::record::InvoiceRecord;
use crate::pdf::{PdfExtractor, PdfProcessor};

/// A file that produced no row.
#[derive(Debug, Clone)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

/// Per-file progress reported while a batch runs.
#[derive(Debug)]
pub enum FileOutcome<'a> {
    Extracted(&'a Path, &'a ExtractionResult),
    Failed(&'a Path, &'a InvexError),
}

/// Result of a batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// One record per successfully extracted file, in file-name order.
    pub records: Vec<InvoiceRecord>,
    /// Files that were skipped, with the reason.
    pub failed: Vec<FailedFile>,
    /// Number of PDF files found in the input directory.
    pub discovered: usize,
    /// Wall time of the whole run in milliseconds.
    pub processing_time_ms: u64,
}

/// Runs extraction over a directory, one file at a time.
///
/// A failure on one file is recorded and the run moves on to the next.
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    parser: MarketplaceParser,
}

impl BatchRunner {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            parser: MarketplaceParser::new(config),
        }
    }

    /// List the `.pdf` files (any extension case) directly inside `dir`,
    /// sorted by file name.
    pub fn scan_input_dir(dir: &Path) -> Result<Vec<PathBuf>> {
        let input_error = |reason: &str| InvexError::InputDir {
            path: dir.to_path_buf(),
            reason: reason.to_string(),
        };

        if !dir.exists() {
            return Err(input_error("directory does not exist"));
        }
        if !dir.is_dir() {
            return Err(input_error("not a directory"));
        }

        let pattern = format!("{}/*.pdf", Pattern::escape(&dir.to_string_lossy()));
        let options = MatchOptions {
            case_sensitive: false,
            ..MatchOptions::new()
        };

        let mut files: Vec<PathBuf> = glob_with(&pattern, options)
            .map_err(|e| input_error(&e.to_string()))?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect();

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!("Found {} PDF files in {}", files.len(), dir.display());
        Ok(files)
    }

    /// Extract one PDF into a record.
    pub fn process_file(&self, path: &Path) -> Result<ExtractionResult> {
        let extractor = PdfExtractor::open(path)?;
        let text = extractor.extract_text()?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(self.parser.parse(&text, &file_name)?)
    }

    /// Process every PDF in `input_dir`.
    ///
    /// Only a missing or unreadable input directory fails the run.
    pub fn run(
        &self,
        input_dir: &Path,
        on_file: impl FnMut(FileOutcome<'_>),
    ) -> Result<BatchOutcome> {
        let files = Self::scan_input_dir(input_dir)?;
        info!("Processing {} PDF files from {}", files.len(), input_dir.display());
        Ok(self.run_files(&files, on_file))
    }

    /// Process the given files in order. Per-file failures never abort.
    pub fn run_files(
        &self,
        files: &[PathBuf],
        mut on_file: impl FnMut(FileOutcome<'_>),
    ) -> BatchOutcome {
        let start = Instant::now();
        let mut outcome = BatchOutcome {
            discovered: files.len(),
            ..Default::default()
        };

        for path in files {
            match self.process_file(path) {
                Ok(result) => {
                    debug!(
                        "Extracted {} in {}ms ({} fields missing)",
                        path.display(),
                        result.processing_time_ms,
                        result.missing_fields.len()
                    );
                    on_file(FileOutcome::Extracted(path, &result));
                    outcome.records.push(result.record);
                }
                Err(e) => {
                    warn!("Failed to process {}: {}", path.display(), e);
                    on_file(FileOutcome::Failed(path, &e));
                    outcome.failed.push(FailedFile {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        outcome.processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Extracted {} of {} files in {}ms",
            outcome.records.len(),
            outcome.discovered,
            outcome.processing_time_ms
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "A.PDF", "notes.txt", "c.Pdf"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let files = BatchRunner::scan_input_dir(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["A.PDF", "b.pdf", "c.Pdf"]);
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        assert!(matches!(
            BatchRunner::scan_input_dir(&missing),
            Err(InvexError::InputDir { .. })
        ));
    }

    #[test]
    fn test_corrupt_file_is_recorded_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.pdf"), b"not a pdf at all").unwrap();

        let mut failures = 0;
        let outcome = BatchRunner::default()
            .run(dir.path(), |event| {
                if matches!(event, FileOutcome::Failed(..)) {
                    failures += 1;
                }
            })
            .unwrap();

        assert_eq!(failures, 1);
        assert_eq!(outcome.discovered, 1);
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.failed.len(), 1);
        assert!(outcome.failed[0].path.ends_with("broken.pdf"));
    }

    #[test]
    fn test_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = BatchRunner::default().run(dir.path(), |_| {}).unwrap();

        assert_eq!(outcome.discovered, 0);
        assert!(outcome.records.is_empty());
        assert!(outcome.failed.is_empty());
    }
}
