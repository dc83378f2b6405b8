//! Term extraction helpers.

/// Characters with special meaning in the classic query-parser grammar.
pub const SPECIAL_CHARS: &[char] = &[
    '\\', '+', '-', '!', '(', ')', ':', '^', '[', ']', '"', '{', '}', '~', '*', '?', '|', '&',
];

/// Split literal text into non-empty terms on runs of whitespace.
pub fn split_terms(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Backslash-escape every query-parser special character in `text`.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape `text`, then split it into terms.
pub fn split_escaped_terms(text: &str) -> Vec<String> {
    split_terms(&escape(text))
}

/// Lowercase `term` with the locale-independent Unicode mapping.
pub fn lowercase(term: &str) -> String {
    term.to_lowercase()
}
