//! Amazon "Tax Invoice/Bill of Supply/Cash Memo" template.

use rust_decimal::Decimal;

use super::InvoiceExtractor;
use super::fields;
use super::rules::amounts::last_amount;
use super::rules::patterns::{
    AMZ_BILLING_ADDRESS, AMZ_GRAND_TOTAL, AMZ_INVOICE_NUMBER, AMZ_ITEM_ROW, AMZ_ITEM_START,
    AMZ_ITEM_STOP, AMZ_ORDER_NUMBER, AMZ_PRICE_TAIL, AMZ_SELLER_GST, AMZ_SHIPPING,
    AMZ_SHIPPING_ADDRESS, AMZ_SOLD_BY, AMZ_TOTAL_AMOUNT, HSN_CODE, INVOICE_DATE, ORDER_DATE,
    PAYMENT_METHOD,
};
use super::rules::{extract_tax, parse_amount, standardize_date, truncate_chars};
use crate::models::config::ExtractionConfig;
use crate::models::record::{InvoiceRecord, Vendor};

/// Lines following the item line that may still belong to the description.
const DESCRIPTION_CONTINUATION: usize = 4;

/// Continuation lines containing these words are table furniture, not product text.
const DESCRIPTION_SKIP_WORDS: [&str; 4] = ["total", "amount", "tax", "gst"];

/// Item row figures: unit price, quantity, net amount.
type ItemRow = (Option<Decimal>, Option<u32>, Option<Decimal>);

/// Template for Amazon seller invoices.
///
/// Also used for invoices whose vendor cannot be detected.
#[derive(Debug, Clone, Default)]
pub struct AmazonTemplate {
    config: ExtractionConfig,
}

impl AmazonTemplate {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Build a record with the Amazon rules, labelled with `vendor`.
    pub fn build(&self, text: &str, file_name: &str, vendor: Vendor) -> InvoiceRecord {
        let tax = extract_tax(text);
        let (unit_price, quantity, net_amount) = item_row(text);
        let (buyer_name, buyer_address) =
            fields::address_block(AMZ_BILLING_ADDRESS.capture(text), self.config.max_address_len);
        let (_, shipping_address) =
            fields::address_block(AMZ_SHIPPING_ADDRESS.capture(text), self.config.max_address_len);

        InvoiceRecord {
            file_name: file_name.to_string(),
            vendor,
            order_id: fields::text(AMZ_ORDER_NUMBER.capture(text)),
            invoice_number: fields::text(AMZ_INVOICE_NUMBER.capture(text)),
            order_date: ORDER_DATE.capture(text).and_then(standardize_date),
            invoice_date: INVOICE_DATE.capture(text).and_then(standardize_date),
            buyer_name,
            buyer_address,
            shipping_address,
            seller_name: fields::capped(AMZ_SOLD_BY.capture(text), self.config.max_seller_len),
            seller_gst: fields::seller_gst(
                AMZ_SELLER_GST.capture(text),
                text,
                self.config.validate_gstin,
            ),
            product_description: self.product_description(text),
            hsn_code: fields::text(HSN_CODE.capture(text)),
            quantity,
            unit_price,
            net_amount,
            tax_type: tax.tax_type,
            tax_rate: tax.rate,
            tax_amount: tax.amount,
            total_amount: AMZ_TOTAL_AMOUNT
                .captures(text)
                .and_then(|caps| parse_amount(&caps[1])),
            shipping_charges: AMZ_SHIPPING.capture(text).and_then(parse_amount),
            grand_total: AMZ_GRAND_TOTAL.find_map(text, last_amount),
            payment_method: fields::text(PAYMENT_METHOD.capture(text)),
        }
    }

    /// Description of the first line item.
    ///
    /// The item line starts with serial number `1`. The description may wrap
    /// onto following lines until the HSN line or a price/tax line.
    fn product_description(&self, text: &str) -> Option<String> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let (start, first) = lines
            .iter()
            .enumerate()
            .find_map(|(i, line)| AMZ_ITEM_START.captures(line).map(|caps| (i, caps)))?;

        let mut parts = vec![first[1].trim().to_string()];
        for line in lines.iter().skip(start + 1).take(DESCRIPTION_CONTINUATION) {
            if line.is_empty() || AMZ_ITEM_STOP.is_match(line) {
                break;
            }
            let lower = line.to_lowercase();
            if DESCRIPTION_SKIP_WORDS.iter().any(|w| lower.contains(w)) {
                continue;
            }
            parts.push(line.to_string());
        }

        let joined = parts.join(" ");
        let description = AMZ_PRICE_TAIL.replace(&joined, "");
        fields::text(Some(description.as_ref())).map(|d| truncate_chars(&d, self.config.max_product_len))
    }
}

impl InvoiceExtractor for AmazonTemplate {
    fn extract(&self, text: &str, file_name: &str) -> InvoiceRecord {
        self.build(text, file_name, Vendor::Amazon)
    }
}

fn item_row(text: &str) -> ItemRow {
    match AMZ_ITEM_ROW.captures(text) {
        Some(caps) => (
            parse_amount(&caps[1]),
            caps[2].parse().ok(),
            parse_amount(&caps[3]),
        ),
        None => (None, None, None),
    }
}
