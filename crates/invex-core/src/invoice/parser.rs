//! Vendor-dispatching invoice parser.

use std::time::Instant;

use tracing::{debug, info};

use super::rules::normalize_text;
use super::{AmazonTemplate, FlipkartTemplate, InvoiceExtractor, Result, detect_vendor};
use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::record::{InvoiceRecord, Vendor};

/// Result of invoice extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: InvoiceRecord,
    /// Vendor template that was applied.
    pub vendor: Vendor,
    /// Columns that fell back to the placeholder.
    pub missing_fields: Vec<&'static str>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for invoice parsing.
pub trait InvoiceParser {
    /// Parse an invoice from the raw text of one file.
    fn parse(&self, text: &str, file_name: &str) -> Result<ExtractionResult>;
}

/// Parser for Amazon and Flipkart invoices.
///
/// Invoices from neither marketplace go through the Amazon rules and are
/// labelled [`Vendor::Unknown`].
#[derive(Debug, Clone, Default)]
pub struct MarketplaceParser {
    amazon: AmazonTemplate,
    flipkart: FlipkartTemplate,
}

impl MarketplaceParser {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            amazon: AmazonTemplate::new(config.clone()),
            flipkart: FlipkartTemplate::new(config),
        }
    }
}

impl InvoiceParser for MarketplaceParser {
    fn parse(&self, text: &str, file_name: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        let text = normalize_text(text);
        if text.is_empty() {
            return Err(ExtractionError::NoText);
        }

        let vendor = detect_vendor(&text, file_name);
        info!("Parsing {} as {} invoice ({} chars)", file_name, vendor, text.len());

        let record = match vendor {
            Vendor::Amazon => self.amazon.extract(&text, file_name),
            Vendor::Flipkart => self.flipkart.extract(&text, file_name),
            Vendor::Unknown => self.amazon.build(&text, file_name, Vendor::Unknown),
        };

        let missing_fields = record.missing_fields();
        if !missing_fields.is_empty() {
            debug!("{}: no value for {}", file_name, missing_fields.join(", "));
        }

        Ok(ExtractionResult {
            record,
            vendor,
            missing_fields,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_rejected() {
        let parser = MarketplaceParser::default();

        assert!(matches!(parser.parse("", "a.pdf"), Err(ExtractionError::NoText)));
        assert!(matches!(parser.parse(" \n\t\r\n ", "a.pdf"), Err(ExtractionError::NoText)));
    }

    #[test]
    fn test_dispatch_by_file_name() {
        let parser = MarketplaceParser::default();
        let text = "Order ID: OD1234567890\nGrand Total ₹ 499.00";

        let flipkart = parser.parse(text, "flipkart_1.pdf").unwrap();
        assert_eq!(flipkart.vendor, Vendor::Flipkart);
        assert_eq!(flipkart.record.order_id.as_deref(), Some("OD1234567890"));
        assert!(!flipkart.missing_fields.contains(&"Grand Total"));
    }

    #[test]
    fn test_unknown_vendor_uses_amazon_rules() {
        let parser = MarketplaceParser::default();
        let text = "Tax Invoice\nOrder Number:   171-1111111-2222222\n\nTOTAL: ₹10.00 ₹110.00";

        let result = parser.parse(text, "scan_001.pdf").unwrap();
        assert_eq!(result.vendor, Vendor::Unknown);
        assert_eq!(result.record.vendor, Vendor::Unknown);
        assert_eq!(result.record.order_id.as_deref(), Some("171-1111111-2222222"));
        assert_eq!(result.record.row()[1], "Unknown");
        assert!(result.missing_fields.contains(&"Invoice Number"));
    }

    #[test]
    fn test_missing_fields_listed_in_column_order() {
        let parser = MarketplaceParser::default();
        let result = parser.parse("amazon", "a.pdf").unwrap();

        assert_eq!(result.vendor, Vendor::Amazon);
        assert_eq!(result.missing_fields.first(), Some(&"Order Number"));
        assert_eq!(result.missing_fields.last(), Some(&"Payment Mode"));
    }
}
