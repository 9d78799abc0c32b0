//! Core library for Amazon and Flipkart invoice extraction.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Vendor detection and rule-based field extraction for Amazon and Flipkart invoices
//! - A flat, fixed-schema invoice record
//! - Spreadsheet report writers (XLSX and CSV)
//! - A sequential batch runner over an input directory

pub mod batch;
pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;
pub mod report;

pub use batch::{BatchOutcome, BatchRunner, FailedFile, FileOutcome};
pub use error::{ExtractionError, InvexError, PdfError, ReportError, Result};
pub use invoice::{ExtractionResult, InvoiceExtractor, InvoiceParser, MarketplaceParser, detect_vendor};
pub use models::config::InvexConfig;
pub use models::record::{COLUMNS, Cell, InvoiceRecord, PLACEHOLDER, Vendor};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use report::{CsvReportWriter, ReportFormat, ReportWriter, XlsxReportWriter, write_report};
