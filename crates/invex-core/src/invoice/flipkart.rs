//! Flipkart tax invoice template.

use super::InvoiceExtractor;
use super::fields;
use super::rules::patterns::{
    FK_BILL_TO, FK_GRAND_TOTAL, FK_INVOICE_NUMBER, FK_NET_AMOUNT, FK_ORDER_ID, FK_PRODUCT,
    FK_PRODUCT_LEADING_NUMBER, FK_PRODUCT_TRAILING_NUMBERS, FK_QUANTITY, FK_SELLER_GST,
    FK_SHIPPING, FK_SHIP_TO, FK_SOLD_BY, FK_TOTAL_AMOUNT, FK_UNIT_PRICE, HSN_CODE, INVOICE_DATE,
    ORDER_DATE, PAYMENT_METHOD,
};
use super::rules::{collapse_whitespace, extract_tax, parse_amount, standardize_date, truncate_chars};
use crate::models::config::ExtractionConfig;
use crate::models::record::{InvoiceRecord, Vendor};

/// Shorter candidates are column headers or stray tokens.
const MIN_PRODUCT_LEN: usize = 10;

/// Template for Flipkart marketplace invoices.
#[derive(Debug, Clone, Default)]
pub struct FlipkartTemplate {
    config: ExtractionConfig,
}

impl FlipkartTemplate {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    fn product_description(&self, text: &str) -> Option<String> {
        FK_PRODUCT.find_map(text, |candidate| {
            let cleaned = FK_PRODUCT_TRAILING_NUMBERS.replace(candidate, "");
            let cleaned = FK_PRODUCT_LEADING_NUMBER.replace(cleaned.trim(), "");
            let cleaned = collapse_whitespace(&cleaned);

            (cleaned.chars().count() > MIN_PRODUCT_LEN)
                .then(|| truncate_chars(&cleaned, self.config.max_product_len))
        })
    }
}

impl InvoiceExtractor for FlipkartTemplate {
    fn extract(&self, text: &str, file_name: &str) -> InvoiceRecord {
        let tax = extract_tax(text);
        let (buyer_name, buyer_address) =
            fields::address_block(FK_BILL_TO.capture(text), self.config.max_address_len);
        let (_, shipping_address) =
            fields::address_block(FK_SHIP_TO.capture(text), self.config.max_address_len);

        InvoiceRecord {
            file_name: file_name.to_string(),
            vendor: Vendor::Flipkart,
            order_id: fields::text(FK_ORDER_ID.capture(text)),
            invoice_number: fields::text(FK_INVOICE_NUMBER.capture(text)),
            order_date: ORDER_DATE.capture(text).and_then(standardize_date),
            invoice_date: INVOICE_DATE.capture(text).and_then(standardize_date),
            buyer_name,
            buyer_address,
            shipping_address,
            seller_name: fields::capped(FK_SOLD_BY.capture(text), self.config.max_seller_len),
            seller_gst: fields::seller_gst(
                FK_SELLER_GST.capture(text),
                text,
                self.config.validate_gstin,
            ),
            product_description: self.product_description(text),
            hsn_code: fields::text(HSN_CODE.capture(text)),
            quantity: FK_QUANTITY.capture(text).and_then(|q| q.parse().ok()),
            unit_price: FK_UNIT_PRICE.capture(text).and_then(parse_amount),
            net_amount: FK_NET_AMOUNT.capture(text).and_then(parse_amount),
            tax_type: tax.tax_type,
            tax_rate: tax.rate,
            tax_amount: tax.amount,
            total_amount: FK_TOTAL_AMOUNT.capture(text).and_then(parse_amount),
            // A zero charge line is skipped in favour of a later, non-zero one
            shipping_charges: FK_SHIPPING
                .find_map(text, |v| parse_amount(v).filter(|amount| !amount.is_zero())),
            grand_total: FK_GRAND_TOTAL.capture(text).and_then(parse_amount),
            payment_method: fields::text(PAYMENT_METHOD.capture(text)),
        }
    }
}
