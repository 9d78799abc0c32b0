//! CSV report writer.

use std::path::Path;

use super::{ReportWriter, Result};
use crate::models::record::{COLUMNS, InvoiceRecord};

/// Writes the report as comma-separated text, every value rendered as shown
/// in the spreadsheet.
#[derive(Debug, Clone, Default)]
pub struct CsvReportWriter;

impl CsvReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for CsvReportWriter {
    fn write(&self, records: &[InvoiceRecord], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(COLUMNS)?;
        for record in records {
            writer.write_record(record.row())?;
        }

        writer.flush()?;
        Ok(())
    }
}
