//! GSTIN (Indian GST Identification Number) extraction and validation.

use super::patterns::{GSTIN_ANYWHERE, GSTIN_FORMAT};
use super::{ExtractionMatch, FieldExtractor};
use crate::error::ExtractionError;

const CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// GSTIN extractor over an arbitrary text.
pub struct GstinExtractor {
    validate: bool,
}

impl GstinExtractor {
    /// Create a new GSTIN extractor.
    pub fn new() -> Self {
        Self { validate: true }
    }

    /// Set whether to validate GSTIN check characters.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for GstinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GstinExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        GSTIN_ANYWHERE
            .find_iter(text)
            .filter(|m| !self.validate || validate_gstin(m.as_str()))
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Check the structure and mod-36 check character of a GSTIN.
pub fn validate_gstin(gstin: &str) -> bool {
    check_gstin(gstin).is_ok()
}

/// Like [`validate_gstin`] but explains why a GSTIN was rejected.
pub fn check_gstin(gstin: &str) -> Result<(), ExtractionError> {
    let invalid = |reason: &str| ExtractionError::Validation {
        field: "Seller GST".to_string(),
        reason: format!("{gstin}: {reason}"),
    };

    if !GSTIN_FORMAT.is_match(gstin) {
        return Err(invalid("not a 15-character GSTIN"));
    }

    let bytes = gstin.as_bytes();
    let expected = check_character(&bytes[..14]).ok_or_else(|| invalid("unexpected character"))?;
    if bytes[14] != expected {
        return Err(invalid("check character mismatch"));
    }
    Ok(())
}

fn check_character(body: &[u8]) -> Option<u8> {
    let mut sum = 0usize;
    for (i, c) in body.iter().enumerate() {
        let value = CHARSET.iter().position(|x| x == c)?;
        let product = value * if i % 2 == 0 { 1 } else { 2 };
        sum += product / 36 + product % 36;
    }
    Some(CHARSET[(36 - sum % 36) % 36])
}
