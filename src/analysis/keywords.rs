//! Frequency-ranked keyword extraction.

use super::frequency::word_frequencies;

/// Default number of keywords returned.
pub const DEFAULT_MAX_KEYWORDS: usize = 15;

/// Extract the most frequent meaningful tokens from the text.
///
/// Entries are ordered by descending count; equal counts are broken
/// alphabetically so the result is deterministic for the same input. At
/// most `max_keywords` tokens are returned, counts discarded.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let mut entries: Vec<(String, usize)> = word_frequencies(text).into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
        .into_iter()
        .take(max_keywords)
        .map(|(token, _)| token)
        .collect()
}
