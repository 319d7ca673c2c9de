//! Text folding shared by titles and queries.
//!
//! A string is lowercased, decomposed to NFD, stripped of the combining
//! diacritical marks block (U+0300..=U+036F) and trimmed. The result is what
//! every comparison in the search domain runs against, so "Amélie", "AMELIE"
//! and " amelie " all fold to `"amelie"`.
//!
//! Folding is idempotent: `normalize(&normalize(s)) == normalize(s)`.

#[cfg(feature = "diacritics")]
use unicode_normalization::UnicodeNormalization;

#[cfg(feature = "diacritics")]
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Folds `input` into its comparison form.
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    let folded = strip_diacritics(&lowered);
    // Trim last: stripping can expose leading or trailing whitespace.
    folded.trim().to_string()
}

/// Absent text folds to the empty string.
pub fn normalize_optional(input: Option<&str>) -> String {
    input.map(normalize).unwrap_or_default()
}

#[cfg(feature = "diacritics")]
fn strip_diacritics(input: &str) -> String {
    input
        .nfd()
        .filter(|ch| !COMBINING_MARKS.contains(ch))
        .collect()
}

// Lowercase-only folding when the host has no normalization support.
#[cfg(not(feature = "diacritics"))]
fn strip_diacritics(input: &str) -> String {
    input.to_string()
}
