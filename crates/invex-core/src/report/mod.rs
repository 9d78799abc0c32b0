//! Spreadsheet report output.

mod delimited;
mod xlsx;

pub use delimited::CsvReportWriter;
pub use xlsx::XlsxReportWriter;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ReportError;
use crate::models::config::ReportConfig;
use crate::models::record::InvoiceRecord;

/// Timestamp embedded in report file names.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Spreadsheet encoding of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// Trait for report writers.
pub trait ReportWriter {
    /// Write a header row plus one row per record to `path`.
    fn write(&self, records: &[InvoiceRecord], path: &Path) -> Result<()>;
}

/// Make sure `dir` exists and is a directory.
pub fn ensure_output_dir(dir: &Path, create: bool) -> Result<()> {
    let output_error = |source: io::Error| ReportError::OutputDir {
        path: dir.to_path_buf(),
        source,
    };

    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(output_error(io::Error::other("not a directory")));
    }
    if !create {
        return Err(output_error(io::Error::new(
            io::ErrorKind::NotFound,
            "directory does not exist",
        )));
    }

    std::fs::create_dir_all(dir).map_err(output_error)?;
    debug!("Created output directory {}", dir.display());
    Ok(())
}

/// `<prefix>_<timestamp>.<ext>` inside `dir`.
///
/// When that name is taken, `_1`, `_2`, ... is appended to the stem so an
/// earlier report is never overwritten.
pub fn output_path(dir: &Path, prefix: &str, timestamp: &str, extension: &str) -> PathBuf {
    let stem = format!("{prefix}_{timestamp}");
    let mut path = dir.join(format!("{stem}.{extension}"));

    let mut n = 1;
    while path.exists() {
        path = dir.join(format!("{stem}_{n}.{extension}"));
        n += 1;
    }
    path
}

/// Write `records` to a new timestamped report in `output_dir`.
///
/// Returns the path of the written file.
pub fn write_report(
    records: &[InvoiceRecord],
    config: &ReportConfig,
    output_dir: &Path,
    create_dir: bool,
) -> Result<PathBuf> {
    ensure_output_dir(output_dir, create_dir)?;

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let path = output_path(output_dir, &config.file_prefix, &timestamp, config.format.extension());

    let writer: Box<dyn ReportWriter> = match config.format {
        ReportFormat::Xlsx => Box::new(XlsxReportWriter::from_config(config)),
        ReportFormat::Csv => Box::new(CsvReportWriter::new()),
    };
    writer.write(records, &path)?;

    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(path)
}
