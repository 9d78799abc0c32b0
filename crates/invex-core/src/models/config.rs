//! Configuration structures for the extraction run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{InvexError, Result};
use crate::report::ReportFormat;

/// Directory that holds the conventional input and output folders.
pub const BASE_DIR: &str = "InvoiceDataExtraction";

/// Main configuration for invex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvexConfig {
    /// Input and output locations.
    pub paths: PathConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Report output configuration.
    pub report: ReportConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Directory scanned for invoice PDFs.
    pub input_dir: PathBuf,

    /// Directory the report is written to.
    pub output_dir: PathBuf,

    /// Create the output directory when it does not exist.
    pub create_output_dir: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(BASE_DIR).join("Input_Folder"),
            output_dir: PathBuf::from(BASE_DIR).join("Output_Folder"),
            create_output_dir: true,
        }
    }
}

/// Invoice extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Drop seller GSTINs whose check character does not match.
    pub validate_gstin: bool,

    /// Maximum characters kept for the product description.
    pub max_product_len: usize,

    /// Maximum characters kept for the seller name.
    pub max_seller_len: usize,

    /// Maximum characters kept for billing and shipping addresses.
    pub max_address_len: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            validate_gstin: true,
            max_product_len: 200,
            max_seller_len: 100,
            max_address_len: 150,
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Spreadsheet encoding.
    pub format: ReportFormat,

    /// File name prefix, followed by the run timestamp.
    pub file_prefix: String,

    /// Worksheet name (XLSX only).
    pub sheet_name: String,

    /// Upper bound for auto-sized column widths (XLSX only).
    pub max_column_width: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Xlsx,
            file_prefix: "extracted_invoices".to_string(),
            sheet_name: "Invoice_Data".to_string(),
            max_column_width: 50.0,
        }
    }
}

impl InvexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| InvexError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| InvexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
