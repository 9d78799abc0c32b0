//! Field post-processing shared by the vendor templates.

use tracing::warn;

use super::rules::gstin::check_gstin;
use super::rules::{FieldExtractor, GstinExtractor, collapse_whitespace, truncate_chars};

/// Trimmed, non-empty owned text.
pub(crate) fn text(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Single-line text capped at `max` characters.
pub(crate) fn capped(value: Option<&str>, max: usize) -> Option<String> {
    text(value.map(collapse_whitespace).as_deref()).map(|v| truncate_chars(&v, max))
}

/// Split an address block into the name on its first line and the whole
/// block collapsed to one line.
pub(crate) fn address_block(block: Option<&str>, max: usize) -> (Option<String>, Option<String>) {
    let Some(block) = block else {
        return (None, None);
    };
    let name = capped(block.lines().map(str::trim).find(|l| !l.is_empty()), max);
    let address = capped(Some(block), max);
    (name, address)
}

/// Seller GSTIN from a labelled candidate, else the first GSTIN in the text.
///
/// A labelled value failing validation is dropped rather than replaced.
pub(crate) fn seller_gst(candidate: Option<&str>, text: &str, validate: bool) -> Option<String> {
    if let Some(candidate) = candidate {
        let candidate = candidate.trim().to_uppercase();
        if !validate {
            return Some(candidate);
        }
        return match check_gstin(&candidate) {
            Ok(()) => Some(candidate),
            Err(e) => {
                warn!("Dropping seller GSTIN: {}", e);
                None
            }
        };
    }

    GstinExtractor::new()
        .with_validation(validate)
        .extract(text)
        .map(|m| m.value)
}
