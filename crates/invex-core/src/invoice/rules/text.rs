//! Text normalisation helpers.

/// Normalise extracted PDF text for parsing.
///
/// Line breaks are unified to `\n`, whitespace runs inside a line collapse to
/// a single space, and blank lines are dropped. Line structure is kept.
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse every whitespace run (including newlines) to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].trim_end().to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_keeps_lines() {
        let text = "  Invoice   Number :\tIN-1 \r\n\r\n Sold  By: Acme\rEnd  ";
        assert_eq!(normalize_text(text), "Invoice Number : IN-1\nSold By: Acme\nEnd");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_text(" \n\t\n "), "");
    }

    #[test]
    fn test_truncate_chars_is_char_safe() {
        assert_eq!(truncate_chars("₹₹₹₹", 2), "₹₹");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("ab cd", 3), "ab");
    }
}
