//! Rule-based field extractors for marketplace invoices.

pub mod amounts;
pub mod dates;
pub mod gstin;
pub mod patterns;
pub mod tax;
pub mod text;

pub use amounts::{AmountExtractor, parse_amount};
pub use dates::{DateExtractor, standardize_date};
pub use gstin::{GstinExtractor, validate_gstin};
pub use tax::{TaxSummary, extract_tax};
pub use text::{collapse_whitespace, normalize_text, truncate_chars};

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched value together with the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Source text that was matched.
    pub source: String,
    /// Byte range in the searched text.
    pub position: Option<(usize, usize)>,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            source: source.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Ordered patterns for one field. Capture group 1 holds the value.
///
/// Patterns are tried in order and the first one that matches wins.
pub struct PatternRule {
    patterns: Vec<Regex>,
}

impl PatternRule {
    /// Compile a rule from static patterns.
    ///
    /// # Panics
    ///
    /// Panics if a pattern is not a valid regex. Rules are built from
    /// literals inside `lazy_static!`, so this fires on first use in tests.
    pub fn new(patterns: &[&str]) -> Self {
        Self {
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("invalid pattern {p}: {e}")))
                .collect(),
        }
    }

    /// First non-empty capture of the first matching pattern.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.find_map(text, Some)
    }

    /// Try each pattern's first match in order and return the first value
    /// `accept` maps to `Some`.
    pub fn find_map<'t, T>(
        &self,
        text: &'t str,
        mut accept: impl FnMut(&'t str) -> Option<T>,
    ) -> Option<T> {
        self.patterns.iter().find_map(|re| {
            let caps = re.captures(text)?;
            let value = caps.get(1)?.as_str().trim();
            if value.is_empty() {
                return None;
            }
            accept(value)
        })
    }
}
