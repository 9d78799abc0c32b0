//! Flat invoice record shared by every vendor template.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel written for any field that could not be located.
pub const PLACEHOLDER: &str = "N/A";

/// Number of columns in every report row.
pub const COLUMN_COUNT: usize = 23;

/// Report column headers, in row order.
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "File Name",
    "Invoice Source",
    "Order Number",
    "Invoice Number",
    "Order Date",
    "Invoice Date",
    "Buyer Name",
    "Billing Address",
    "Shipping Address",
    "Seller Name",
    "Seller GST",
    "Product Name",
    "HSN Code",
    "Quantity",
    "Unit Price",
    "Net Amount",
    "Tax Type",
    "Tax Rate",
    "Tax Amount",
    "Total Amount",
    "Shipping Charges",
    "Grand Total",
    "Payment Mode",
];

/// Marketplace whose invoice layout was recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Vendor {
    Amazon,
    Flipkart,
    /// No vendor keyword found; extracted with the generic pattern set.
    #[default]
    Unknown,
}

impl Vendor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::Flipkart => "Flipkart",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rendered spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Free text.
    Text(String),
    /// Monetary amount, rendered with two decimals.
    Amount(Decimal),
    /// Whole number (quantities).
    Integer(u32),
    /// Field not found in the source text.
    Missing,
}

impl Cell {
    fn text(value: &Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::Text(v.clone()),
            _ => Self::Missing,
        }
    }

    fn amount(value: Option<Decimal>) -> Self {
        value.map(Self::Amount).unwrap_or(Self::Missing)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Amount(d) => write!(f, "{:.2}", d),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Missing => f.write_str(PLACEHOLDER),
        }
    }
}

/// One extracted invoice.
///
/// Optional fields that stay `None` render as [`PLACEHOLDER`]. The record is
/// built once by a vendor template and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Source file name (without directory).
    pub file_name: String,
    /// Detected vendor template.
    pub vendor: Vendor,

    pub order_id: Option<String>,
    pub invoice_number: Option<String>,
    /// Order date, `DD/MM/YYYY` when recognisable.
    pub order_date: Option<String>,
    /// Invoice date, `DD/MM/YYYY` when recognisable.
    pub invoice_date: Option<String>,

    pub buyer_name: Option<String>,
    /// Full billing block, whitespace-collapsed.
    pub buyer_address: Option<String>,
    pub shipping_address: Option<String>,

    pub seller_name: Option<String>,
    /// Seller GSTIN.
    pub seller_gst: Option<String>,

    pub product_description: Option<String>,
    pub hsn_code: Option<String>,
    pub quantity: Option<u32>,
    pub unit_price: Option<Decimal>,
    pub net_amount: Option<Decimal>,

    /// `IGST`, `CGST+SGST` or `CGST+UTGST`.
    pub tax_type: Option<String>,
    /// Combined tax rate in percent.
    pub tax_rate: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
    pub total_amount: Option<Decimal>,
    pub shipping_charges: Option<Decimal>,
    pub grand_total: Option<Decimal>,

    pub payment_method: Option<String>,
}

impl InvoiceRecord {
    /// Create an empty record for a file.
    pub fn new(file_name: impl Into<String>, vendor: Vendor) -> Self {
        Self {
            file_name: file_name.into(),
            vendor,
            ..Default::default()
        }
    }

    /// Render the record in [`COLUMNS`] order.
    pub fn cells(&self) -> [Cell; COLUMN_COUNT] {
        [
            Cell::Text(if self.file_name.is_empty() {
                PLACEHOLDER.to_string()
            } else {
                self.file_name.clone()
            }),
            Cell::Text(self.vendor.to_string()),
            Cell::text(&self.order_id),
            Cell::text(&self.invoice_number),
            Cell::text(&self.order_date),
            Cell::text(&self.invoice_date),
            Cell::text(&self.buyer_name),
            Cell::text(&self.buyer_address),
            Cell::text(&self.shipping_address),
            Cell::text(&self.seller_name),
            Cell::text(&self.seller_gst),
            Cell::text(&self.product_description),
            Cell::text(&self.hsn_code),
            self.quantity.map(Cell::Integer).unwrap_or(Cell::Missing),
            Cell::amount(self.unit_price),
            Cell::amount(self.net_amount),
            Cell::text(&self.tax_type),
            match self.tax_rate {
                Some(rate) => Cell::Text(format!("{}%", rate.normalize())),
                None => Cell::Missing,
            },
            Cell::amount(self.tax_amount),
            Cell::amount(self.total_amount),
            Cell::amount(self.shipping_charges),
            Cell::amount(self.grand_total),
            Cell::text(&self.payment_method),
        ]
    }

    /// Render the record as display strings in [`COLUMNS`] order.
    pub fn row(&self) -> Vec<String> {
        self.cells().iter().map(ToString::to_string).collect()
    }

    /// Headers of the columns that fell back to the placeholder.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.cells()
            .iter()
            .zip(COLUMNS)
            .filter(|(cell, _)| cell.is_missing())
            .map(|(_, name)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_empty_record_renders_placeholders() {
        let record = InvoiceRecord::new("a.pdf", Vendor::Flipkart);
        let row = record.row();

        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], "a.pdf");
        assert_eq!(row[1], "Flipkart");
        assert!(row[2..].iter().all(|c| c == PLACEHOLDER));
        assert_eq!(record.missing_fields().len(), COLUMN_COUNT - 2);
    }

    #[test]
    fn test_values_render() {
        let mut record = InvoiceRecord::new("b.pdf", Vendor::Amazon);
        record.quantity = Some(2);
        record.unit_price = Some(Decimal::from_str("1234.5").unwrap());
        record.tax_rate = Some(Decimal::from_str("18.0").unwrap());
        record.seller_name = Some(String::new());

        let row = record.row();
        assert_eq!(row[13], "2");
        assert_eq!(row[14], "1234.50");
        assert_eq!(row[17], "18%");
        assert_eq!(row[9], PLACEHOLDER);
    }

    #[test]
    fn test_no_cell_is_empty() {
        let record = InvoiceRecord::new("", Vendor::Unknown);
        assert!(record.row().iter().all(|c| !c.is_empty()));
    }
}
