//! Extractive summarization over frequency-scored sentences.

use std::cmp::Ordering;

use super::frequency::word_frequencies;
use super::tokenizer::{split_into_sentences, tokenize};

/// Default number of sentences in a summary.
pub const DEFAULT_MAX_SENTENCES: usize = 5;

/// Produce an extractive summary of at most `max_sentences` sentences.
///
/// Sentences are scored by the average document frequency of their tokens,
/// the top scorers are selected (earlier sentence wins ties), and the
/// selection is re-sorted into original document order before joining.
/// Blank input yields an empty string; texts with no more sentences than
/// requested are returned whole, unscored.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let sentences = split_into_sentences(text);
    if sentences.len() <= max_sentences {
        return sentences.join(" ");
    }

    let frequencies = word_frequencies(text);
    let mut scored: Vec<(usize, f64)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| (index, score_sentence(sentence, &frequencies)))
        .collect();

    // Stable sort: equal scores keep the earlier sentence first.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut selected: Vec<usize> = scored
        .into_iter()
        .take(max_sentences)
        .map(|(index, _)| index)
        .collect();

    // Output order is document order, not score order.
    selected.sort_unstable();

    selected
        .into_iter()
        .map(|index| sentences[index].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Average frequency-map value over the sentence's full token sequence.
///
/// Tokens absent from the map contribute zero; a sentence with no tokens
/// scores zero rather than dividing by zero.
fn score_sentence(sentence: &str, frequencies: &std::collections::HashMap<String, usize>) -> f64 {
    let tokens = tokenize(sentence);
    if tokens.is_empty() {
        return 0.0;
    }
    let total: usize = tokens
        .iter()
        .filter_map(|token| frequencies.get(token))
        .sum();
    total as f64 / tokens.len() as f64
}
