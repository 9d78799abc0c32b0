//! Regex patterns for Amazon and Flipkart invoice extraction.
//!
//! Every pattern runs against normalised text (see [`super::normalize_text`]).

use lazy_static::lazy_static;
use regex::Regex;

use super::PatternRule;

lazy_static! {
    // Dates
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(\d{2})[./\-](\d{2})[./\-](\d{4})"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"(\d{4})-(\d{2})-(\d{2})"
    ).unwrap();

    // Amounts (Indian format: ₹1,23,456.78)
    pub static ref AMOUNT: Regex = Regex::new(
        r"(?:₹|Rs\.?|INR)?\s?(\d[\d,]*(?:\.\d+)?)"
    ).unwrap();

    // Tax components: "18% IGST ₹76.27", "9% CGST ₹38.14"
    pub static ref TAX_COMPONENT: Regex = Regex::new(
        r"(?i)(\d+(?:\.\d+)?)\s?%\s*(IGST|CGST|SGST|UTGST)\s*:?\s*(?:₹|Rs\.?|INR)?\s?(\d[\d,]*\.\d+)"
    ).unwrap();

    pub static ref TAX_RATE_BEFORE: Regex = Regex::new(
        r"(?i)(\d+(?:\.\d+)?)\s?%\s*(IGST|CGST|SGST|UTGST)"
    ).unwrap();

    pub static ref TAX_RATE_AFTER: Regex = Regex::new(
        r"(?i)\b(IGST|CGST|SGST|UTGST)\s*:?\s*(\d+(?:\.\d+)?)\s?%"
    ).unwrap();

    pub static ref TAX_AMOUNT_ONLY: Regex = Regex::new(
        r"(?i)\b(IGST|CGST|SGST|UTGST)\b[^₹\d\n]*₹\s?(\d[\d,]*(?:\.\d+)?)"
    ).unwrap();

    // GSTIN: 2-digit state, 10-char PAN, entity code, 'Z', check character
    pub static ref GSTIN_FORMAT: Regex = Regex::new(
        r"^\d{2}[A-Z]{5}\d{4}[A-Z][1-9A-Z]Z[0-9A-Z]$"
    ).unwrap();

    pub static ref GSTIN_ANYWHERE: Regex = Regex::new(
        r"\b\d{2}[A-Z]{5}\d{4}[A-Z][1-9A-Z]Z[0-9A-Z]\b"
    ).unwrap();

    // Vendor-neutral fields
    pub static ref ORDER_DATE: PatternRule = PatternRule::new(&[
        r"(?i)Order\s*Date[:\s]*([0-9./\-]+)",
    ]);

    pub static ref INVOICE_DATE: PatternRule = PatternRule::new(&[
        r"(?i)Invoice\s*Date[:\s]*([0-9./\-]+)",
    ]);

    pub static ref HSN_CODE: PatternRule = PatternRule::new(&[
        r"(?i)HSN[:\s]*(\d+)",
    ]);

    pub static ref PAYMENT_METHOD: PatternRule = PatternRule::new(&[
        r"(?i)Mode\s*of\s*Payment[:\s]*([^\n]+)",
        r"(?i)Payment\s*(?:Mode|Method)[:\s]*([^\n]+)",
    ]);

    // Amazon
    pub static ref AMZ_ORDER_NUMBER: PatternRule = PatternRule::new(&[
        r"(?i)Order\s*Number[:\s]*(\d[\d\-]*)",
        r"(?i)Order\s*ID[:\s]*(\d[\d\-]*)",
        r"(?i)Amazon\s*Order[:\s]*(\d[\d\-]*)",
    ]);

    pub static ref AMZ_INVOICE_NUMBER: PatternRule = PatternRule::new(&[
        r"(?i)Invoice\s*Number[:\s]*([A-Z0-9][A-Z0-9\-]*)",
    ]);

    pub static ref AMZ_ITEM_START: Regex = Regex::new(
        r"^1\s+(.+)$"
    ).unwrap();

    pub static ref AMZ_ITEM_STOP: Regex = Regex::new(
        r"^(?:HSN|₹|\d+(?:\.\d+)?%|IGST|CGST|SGST|UTGST|Shipping)"
    ).unwrap();

    pub static ref AMZ_PRICE_TAIL: Regex = Regex::new(
        r"\s*₹\s?[\d,.]+\s+\d+\s+₹\s?[\d,.]+.*$"
    ).unwrap();

    // "₹423.73 1 ₹423.73": unit price, quantity, net amount
    pub static ref AMZ_ITEM_ROW: Regex = Regex::new(
        r"₹\s?(\d[\d,]*(?:\.\d+)?)\s+(\d+)\s+₹\s?(\d[\d,]*(?:\.\d+)?)"
    ).unwrap();

    pub static ref AMZ_TOTAL_AMOUNT: Regex = Regex::new(
        r"(?:IGST|CGST|SGST|UTGST)\s+₹\s?\d[\d,]*(?:\.\d+)?[ \t]+₹\s?(\d[\d,]*(?:\.\d+)?)"
    ).unwrap();

    pub static ref AMZ_SHIPPING: PatternRule = PatternRule::new(&[
        r"(?i)Shipping\s+Charges\s+₹\s?(\d[\d,]*(?:\.\d+)?)",
    ]);

    // The TOTAL row lists tax total then invoice total; the last amount wins.
    pub static ref AMZ_GRAND_TOTAL: PatternRule = PatternRule::new(&[
        r"(?i)\bTOTAL[:\s]*((?:₹ ?\d[\d,]*(?:\.\d+)?[ \t]*)+)",
        r"(?i)Invoice\s*Value[:\s]*₹?\s?(\d[\d,]*(?:\.\d+)?)",
        r"(?i)Grand\s*Total[:\s]*₹\s?(\d[\d,]*(?:\.\d+)?)",
    ]);

    pub static ref AMZ_SOLD_BY: PatternRule = PatternRule::new(&[
        r"(?i)Sold\s*By[:\s]*([^\n*]+)",
    ]);

    pub static ref AMZ_SELLER_GST: PatternRule = PatternRule::new(&[
        r"(?i)GST\s*Registration\s*No\b[:.\s]*([A-Z0-9]+)",
    ]);

    pub static ref AMZ_BILLING_ADDRESS: PatternRule = PatternRule::new(&[
        r"(?is)Billing\s*Address[:\s]*([^:]+?)\s*(?:Shipping\s*Address|State/UT|$)",
    ]);

    pub static ref AMZ_SHIPPING_ADDRESS: PatternRule = PatternRule::new(&[
        r"(?is)Shipping\s*Address[:\s]*([^:]+?)\s*(?:Place\s*of|State/UT|$)",
    ]);

    // Flipkart
    pub static ref FK_ORDER_ID: PatternRule = PatternRule::new(&[
        r"(?i)Order\s*(?:ID|Number)[:\s]*([A-Z0-9]+)",
    ]);

    pub static ref FK_INVOICE_NUMBER: PatternRule = PatternRule::new(&[
        r"(?i)Invoice\s*(?:Number|No)\b[:.\s#]*([A-Z0-9]+)",
        r"(?i)#\s*([A-Z0-9]{10,})",
    ]);

    pub static ref FK_PRODUCT: PatternRule = PatternRule::new(&[
        r"(?is)Product\s*Description\s+Qty.*?\n([^\n]+)",
        r"(?is)Description\s+Qty.*?\n([^\n]+)",
        r"(?i)([A-Za-z][^\n]*?)\s+HSN[:\s]*\d+",
        r"(?is)Ordered\s*Through.*?\n([^\n]+)",
    ]);

    pub static ref FK_PRODUCT_TRAILING_NUMBERS: Regex = Regex::new(
        r"\s+\d+\s+-?[\d,]+\.\d+.*$"
    ).unwrap();

    pub static ref FK_PRODUCT_LEADING_NUMBER: Regex = Regex::new(
        r"^\d+\s+"
    ).unwrap();

    pub static ref FK_QUANTITY: PatternRule = PatternRule::new(&[
        r"(?i)Qty[:\s]+(\d+)\b",
    ]);

    pub static ref FK_UNIT_PRICE: PatternRule = labeled_amount(&[r"Gross\s*Amount"]);

    pub static ref FK_NET_AMOUNT: PatternRule = labeled_amount(&[r"Taxable\s*Value"]);

    pub static ref FK_TOTAL_AMOUNT: PatternRule = labeled_amount(&[r"Total\s*(?:Amount|Price)"]);

    // A bare Total only counts with a rupee sign, so `Total Qty: 1` is skipped.
    pub static ref FK_GRAND_TOTAL: PatternRule = labeled_amount(&[r"Grand\s*Total", r"\bTotal\b[:\s]*₹"]);

    pub static ref FK_SHIPPING: PatternRule = labeled_amount(&[
        r"Shipping\s*(?:and\s*)?(?:Handling\s*)?Charges",
        r"Delivery\s*Charges",
    ]);

    pub static ref FK_SOLD_BY: PatternRule = PatternRule::new(&[
        r"(?i)Sold\s*By[:\s]*([^,\n]+)",
    ]);

    pub static ref FK_SELLER_GST: PatternRule = PatternRule::new(&[
        r"(?i)GSTIN[:\s\-]*([A-Z0-9]{15})\b",
        r"(?i)GST[:\s]*([A-Z0-9]{15})\b",
    ]);

    pub static ref FK_BILL_TO: PatternRule = PatternRule::new(&[
        r"(?is)Bill\s*To[:\s]*([^:]+?)\s*(?:Ship\s*To|Order\s*ID|Product\s*Description|$)",
    ]);

    pub static ref FK_SHIP_TO: PatternRule = PatternRule::new(&[
        r"(?is)Ship\s*To[:\s]*([^:]+?)\s*(?:Bill\s*To|Order\s*ID|Product\s*Description|$)",
    ]);
}

/// Rule for "<label> ... ₹ 1,234.00" on a single line.
fn labeled_amount(labels: &[&str]) -> PatternRule {
    let patterns: Vec<String> = labels
        .iter()
        .map(|label| format!(r"(?i){label}[^₹\d\n]*₹?[ \t]*(\d[\d,]*(?:\.\d+)?)"))
        .collect();
    let refs: Vec<&str> = patterns.iter().map(String::as_str).collect();
    PatternRule::new(&refs)
}
