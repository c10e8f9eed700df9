//! Sentence segmentation and word tokenization.
//!
//! Both functions are pure and operate on plain strings. Sentence order and
//! token order always match order of appearance in the input.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w']+").unwrap());

/// Abbreviations that do not terminate a sentence when followed by a period.
const ABBREVIATIONS: [&str; 18] = [
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "no",
    "fig", "al", "e.g", "i.e",
];

static ABBREVIATION_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ABBREVIATIONS.iter().copied().collect());

/// Split text into sentences on runs of terminal punctuation.
///
/// A run of `.`, `!` or `?` ends a sentence when it is followed by
/// whitespace or the end of input. Closing quotes and brackets directly
/// after the punctuation stay with the sentence, common abbreviations and
/// single-letter initials do not split, and trailing text without terminal
/// punctuation becomes a final sentence. Blank input yields no sentences.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];
        if !matches!(c, '.' | '!' | '?') {
            i += 1;
            continue;
        }

        let mut end = i;
        while end + 1 < chars.len() && matches!(chars[end + 1].1, '.' | '!' | '?') {
            end += 1;
        }
        while end + 1 < chars.len()
            && matches!(chars[end + 1].1, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
        {
            end += 1;
        }

        let at_end = end + 1 >= chars.len();
        let boundary = at_end || chars[end + 1].1.is_whitespace();
        let abbreviation = c == '.' && end == i && ends_with_abbreviation(&text[start..offset]);

        if boundary && !abbreviation {
            let slice_end = if at_end { text.len() } else { chars[end + 1].0 };
            let sentence = text[start..slice_end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = slice_end;
        }
        i = end + 1;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Tokenize text into normalized word tokens.
///
/// Word-like terms are lower-cased and stripped of every non-word
/// character. Tokens that become empty are discarded; duplicates are
/// retained in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '_')
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn ends_with_abbreviation(prefix: &str) -> bool {
    let word = prefix
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        return false;
    }
    // Single-letter initials, e.g. the "J" in "J. Smith".
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return true;
    }
    ABBREVIATION_SET.contains(word.to_lowercase().as_str())
}
