//! Date extraction and normalisation to `DD/MM/YYYY`.

use chrono::NaiveDate;

use super::patterns::{DATE_DMY, DATE_YMD};
use super::{ExtractionMatch, FieldExtractor};

/// Output format for every recognised date.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Date field extractor.
///
/// Finds `DD.MM.YYYY`, `DD/MM/YYYY`, `DD-MM-YYYY` and `YYYY-MM-DD` dates that
/// are valid calendar dates and renders them as `DD/MM/YYYY`.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let mut all = self.extract_all(text);
        all.sort_by_key(|m| m.position.map(|(start, _)| start));
        all.into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in DATE_DMY.captures_iter(text) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if let (Some(date), Some(m)) = (NaiveDate::from_ymd_opt(year, month, day), caps.get(0)) {
                results.push(ExtractionMatch::new(date, m.as_str()).with_position(m.start(), m.end()));
            }
        }

        for caps in DATE_YMD.captures_iter(text) {
            let year: i32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let day: u32 = caps[3].parse().unwrap_or(0);

            if let (Some(date), Some(m)) = (NaiveDate::from_ymd_opt(year, month, day), caps.get(0)) {
                // Skip if already found
                if results.iter().any(|r| r.value == date) {
                    continue;
                }
                results.push(ExtractionMatch::new(date, m.as_str()).with_position(m.start(), m.end()));
            }
        }

        results
    }
}

/// Normalise a captured date to `DD/MM/YYYY`.
///
/// Values that do not contain a valid calendar date are returned trimmed and
/// unchanged; empty input yields `None`.
pub fn standardize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match DateExtractor::new().extract(raw) {
        Some(m) => Some(m.value.format(DATE_FORMAT).to_string()),
        None => Some(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardize_formats() {
        assert_eq!(standardize_date("15.01.2024").as_deref(), Some("15/01/2024"));
        assert_eq!(standardize_date("15/01/2024").as_deref(), Some("15/01/2024"));
        assert_eq!(standardize_date("15-01-2024").as_deref(), Some("15/01/2024"));
        assert_eq!(standardize_date("2024-01-15").as_deref(), Some("15/01/2024"));
    }

    #[test]
    fn test_invalid_date_passes_through() {
        assert_eq!(standardize_date("31.02.2024").as_deref(), Some("31.02.2024"));
        assert_eq!(standardize_date(" 2024 ").as_deref(), Some("2024"));
        assert_eq!(standardize_date("  "), None);
    }

    #[test]
    fn test_extract_first_by_position() {
        let extractor = DateExtractor::new();
        let text = "Order Date: 2024-01-10 Invoice Date: 12.01.2024";

        let first = extractor.extract(text).unwrap();
        assert_eq!(first.value, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(extractor.extract_all(text).len(), 2);
    }
}
