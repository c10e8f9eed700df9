//! Stopword-filtered word-frequency model.

use std::collections::HashMap;

use super::stopwords::is_stopword;
use super::tokenizer::tokenize;

/// Tokens shorter than this never contribute to frequency counts.
pub const MIN_TOKEN_LEN: usize = 3;

/// Count occurrences of every meaningful token in the text.
///
/// Tokens shorter than [`MIN_TOKEN_LEN`] characters and stopwords are
/// excluded entirely, not counted as zero. Pure function of the input text
/// and the fixed stopword set.
pub fn word_frequencies(text: &str) -> HashMap<String, usize> {
    tokenize(text)
        .into_iter()
        .filter(|token| is_countable(token))
        .fold(HashMap::new(), |mut map, token| {
            *map.entry(token).or_insert(0) += 1;
            map
        })
}

/// Check whether a token is long enough and not a stopword.
pub fn is_countable(token: &str) -> bool {
    token.chars().count() >= MIN_TOKEN_LEN && !is_stopword(token)
}
