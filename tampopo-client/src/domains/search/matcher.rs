//! Prefix matching of titles against a query.

use super::normalize::normalize;

/// Characters that separate words inside a title.
pub fn is_word_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | ':' | '(' | ')')
}

/// Words of an already normalized title, empty pieces dropped.
pub fn words(normalized_title: &str) -> impl Iterator<Item = &str> {
    normalized_title
        .split(is_word_separator)
        .filter(|word| !word.is_empty())
}

/// Whether `title` matches `normalized_query`.
///
/// The title is folded first; the query must already be folded. An empty
/// query matches nothing.
pub fn matches(title: &str, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return false;
    }
    matches_normalized(&normalize(title), normalized_query)
}

/// Same as [`matches`] for a title that is already folded.
///
/// True when the whole title starts with the query (so multi-word queries
/// such as `"chungking ex"` work) or when any single word does.
pub fn matches_normalized(
    normalized_title: &str,
    normalized_query: &str,
) -> bool {
    if normalized_query.is_empty() {
        return false;
    }
    normalized_title.starts_with(normalized_query)
        || words(normalized_title)
            .any(|word| word.starts_with(normalized_query))
}
