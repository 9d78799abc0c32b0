//! Invoice field extraction module.

mod amazon;
mod fields;
mod flipkart;
mod parser;
pub mod rules;

pub use amazon::AmazonTemplate;
pub use flipkart::FlipkartTemplate;
pub use parser::{ExtractionResult, InvoiceParser, MarketplaceParser};

use crate::error::ExtractionError;
use crate::models::record::{InvoiceRecord, Vendor};

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// A vendor template: one fixed set of pattern rules.
pub trait InvoiceExtractor {
    /// Build a record from normalised invoice text.
    fn extract(&self, text: &str, file_name: &str) -> InvoiceRecord;
}

/// Pick the vendor template for a file.
///
/// The file name is checked before the content, and Amazon before Flipkart.
pub fn detect_vendor(text: &str, file_name: &str) -> Vendor {
    let name = file_name.to_lowercase();
    if name.contains("amazon") {
        return Vendor::Amazon;
    }
    if name.contains("flipkart") {
        return Vendor::Flipkart;
    }

    let text = text.to_lowercase();
    if text.contains("amazon") {
        Vendor::Amazon
    } else if text.contains("flipkart") {
        Vendor::Flipkart
    } else {
        Vendor::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_takes_precedence() {
        assert_eq!(detect_vendor("Sold by Flipkart seller", "amazon_march.pdf"), Vendor::Amazon);
        assert_eq!(detect_vendor("ASSPL-Amazon", "FLIPKART-01.PDF"), Vendor::Flipkart);
    }

    #[test]
    fn test_content_detection() {
        assert_eq!(detect_vendor("Tax Invoice ... ASSPL-Amazon-Seller", "inv1.pdf"), Vendor::Amazon);
        assert_eq!(detect_vendor("Ordered Through Flipkart", "inv2.pdf"), Vendor::Flipkart);
        assert_eq!(detect_vendor("Tax Invoice", "inv3.pdf"), Vendor::Unknown);
    }

    #[test]
    fn test_amazon_keyword_wins_in_content() {
        assert_eq!(detect_vendor("flipkart ... amazon", "x.pdf"), Vendor::Amazon);
    }
}
