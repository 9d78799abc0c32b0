//! XLSX report writer using rust_xlsxwriter.

use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use super::{ReportWriter, Result};
use crate::models::config::ReportConfig;
use crate::models::record::{COLUMNS, Cell, InvoiceRecord};

/// Extra characters added to the longest value of a column.
const WIDTH_PADDING: usize = 2;

/// Writes one worksheet with a bold, frozen header row.
///
/// Amounts are numeric cells with two decimals; every other value, the
/// placeholder included, is written as text.
#[derive(Debug, Clone)]
pub struct XlsxReportWriter {
    sheet_name: String,
    max_column_width: f64,
}

impl XlsxReportWriter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            max_column_width: ReportConfig::default().max_column_width,
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.sheet_name.clone()).with_max_column_width(config.max_column_width)
    }

    /// Cap for auto-sized column widths.
    pub fn with_max_column_width(mut self, width: f64) -> Self {
        self.max_column_width = width;
        self
    }

    fn column_widths(&self, records: &[InvoiceRecord]) -> Vec<f64> {
        let mut longest: Vec<usize> = COLUMNS.iter().map(|h| h.chars().count()).collect();

        for record in records {
            for (len, value) in longest.iter_mut().zip(record.row()) {
                *len = (*len).max(value.chars().count());
            }
        }

        longest
            .into_iter()
            .map(|len| ((len + WIDTH_PADDING) as f64).min(self.max_column_width))
            .collect()
    }
}

impl Default for XlsxReportWriter {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

impl ReportWriter for XlsxReportWriter {
    fn write(&self, records: &[InvoiceRecord], path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        let header_format = Format::new().set_bold();
        let amount_format = Format::new().set_num_format("#,##0.00");

        for (col, header) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (idx, record) in records.iter().enumerate() {
            let row = (idx + 1) as u32;
            for (col, cell) in record.cells().iter().enumerate() {
                write_cell(worksheet, row, col as u16, cell, &amount_format)?;
            }
        }

        for (col, width) in self.column_widths(records).into_iter().enumerate() {
            worksheet.set_column_width(col as u16, width)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        workbook.save(path)?;
        Ok(())
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    amount_format: &Format,
) -> std::result::Result<(), XlsxError> {
    let written = match cell {
        Cell::Amount(amount) => match amount.to_f64() {
            Some(value) => worksheet.write_number_with_format(row, col, value, amount_format),
            None => worksheet.write_string(row, col, cell.to_string()),
        },
        Cell::Integer(n) => worksheet.write_number(row, col, f64::from(*n)),
        Cell::Text(_) | Cell::Missing => worksheet.write_string(row, col, cell.to_string()),
    };
    written.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{PLACEHOLDER, Vendor};
    use calamine::{DataType, Reader, open_workbook_auto};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample() -> InvoiceRecord {
        InvoiceRecord {
            order_id: Some("402-1234567-7654321".to_string()),
            product_description: Some("Prestige Electric Kettle 1.5 Litre".to_string()),
            quantity: Some(2),
            unit_price: Some(Decimal::from_str("1270.34").unwrap()),
            tax_rate: Some(Decimal::from_str("18").unwrap()),
            ..InvoiceRecord::new("amazon_kettle.pdf", Vendor::Amazon)
        }
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        XlsxReportWriter::default().write(&[sample()], &path).unwrap();

        let mut workbook = open_workbook_auto(&path).unwrap();
        let range = workbook.worksheet_range("Invoice_Data").unwrap();
        let rows: Vec<_> = range.rows().collect();

        assert_eq!(rows.len(), 2);
        let headers: Vec<String> = rows[0].iter().map(|c| c.as_string().unwrap_or_default()).collect();
        assert_eq!(headers, COLUMNS.to_vec());

        let row = rows[1];
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0].as_string().as_deref(), Some("amazon_kettle.pdf"));
        assert_eq!(row[1].as_string().as_deref(), Some("Amazon"));
        assert_eq!(row[3].as_string().as_deref(), Some(PLACEHOLDER));
        assert_eq!(row[13].get_float(), Some(2.0));
        assert!((row[14].get_float().unwrap() - 1270.34).abs() < 1e-9);
        assert_eq!(row[17].as_string().as_deref(), Some("18%"));
        assert!(row.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_header_only_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");

        XlsxReportWriter::new("Sheet A").write(&[], &path).unwrap();

        let mut workbook = open_workbook_auto(&path).unwrap();
        let range = workbook.worksheet_range("Sheet A").unwrap();
        assert_eq!(range.height(), 1);
        assert_eq!(range.width(), COLUMNS.len());
    }

    #[test]
    fn test_column_widths_are_capped() {
        let mut record = sample();
        record.buyer_address = Some("x".repeat(120));

        let widths = XlsxReportWriter::default().column_widths(&[record]);
        assert_eq!(widths.len(), COLUMNS.len());
        assert_eq!(widths[0], ("amazon_kettle.pdf".len() + 2) as f64);
        assert_eq!(widths[7], 50.0);
    }

    #[test]
    fn test_invalid_sheet_name_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.xlsx");

        let result = XlsxReportWriter::new("bad[name]").write(&[], &path);
        assert!(result.is_err());
    }
}
