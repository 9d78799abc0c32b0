//! Amount extraction for Indian invoices (₹1,23,456.78).

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT;
use super::{ExtractionMatch, FieldExtractor};

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in AMOUNT.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            if let Some(amount) = parse_amount(&caps[1]) {
                results.push(ExtractionMatch::new(amount, m.as_str()).with_position(m.start(), m.end()));
            }
        }

        results
    }
}

/// Parse an amount, ignoring currency symbols and thousands separators.
///
/// `"₹1,23,456.78"`, `"Rs. 499"` and `"1234.5"` all parse; strings without
/// digits yield `None`.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    // "Rs." leaves a leading dot behind
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned).ok()
}

/// Last amount in a string such as `"₹76.27 ₹500.00"`.
pub fn last_amount(s: &str) -> Option<Decimal> {
    AmountExtractor::new().extract_all(s).pop().map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("₹1,23,456.78"), Some(dec("123456.78")));
        assert_eq!(parse_amount("1,234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("Rs. 499"), Some(dec("499")));
        assert_eq!(parse_amount("INR 40.00"), Some(dec("40.00")));
        assert_eq!(parse_amount("₹"), None);
        assert_eq!(parse_amount("1.2.3"), None);
    }

    #[test]
    fn test_extract_all_amounts() {
        let extractor = AmountExtractor::new();
        let results = extractor.extract_all("₹76.27 ₹500.00");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].value, dec("76.27"));
        assert_eq!(last_amount("₹76.27 ₹500.00"), Some(dec("500.00")));
    }
}
