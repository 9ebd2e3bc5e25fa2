//! Case folding for matching.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a field for substring matching: lowercase, and optionally strip
/// diacritics so "café" and "cafe" meet.
///
/// Whitespace is left alone. A query with two spaces only matches text with
/// two spaces; the match is a plain substring test.
pub fn fold(value: &str, strip_diacritics: bool) -> String {
    if strip_diacritics {
        strip_marks(value).to_lowercase()
    } else {
        value.to_lowercase()
    }
}

/// Fold a query: trim, then fold like a field.
pub fn fold_query(query: &str, strip_diacritics: bool) -> String {
    fold(query.trim(), strip_diacritics)
}

/// NFD-decompose and drop combining marks.
#[cfg(feature = "unicode-normalization")]
fn strip_marks(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Without unicode-normalization (slim WASM builds) there is no decomposition
/// table, so text passes through unchanged.
#[cfg(not(feature = "unicode-normalization"))]
fn strip_marks(value: &str) -> String {
    value.to_string()
}

/// Combining marks (Unicode category Mn) that NFD splits off Latin letters.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
