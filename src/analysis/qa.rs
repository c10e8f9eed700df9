//! Keyword-overlap question answering over analyzed sentences.

use std::collections::HashSet;

use super::frequency::is_countable;
use super::tokenizer::tokenize;

/// Returned when the question yields no usable keywords.
pub const NO_KEYWORDS_MESSAGE: &str =
    "I couldn't identify any meaningful keywords in your question. Please try rephrasing.";

/// Returned when no sentence matches any question keyword.
pub const NO_ANSWER_MESSAGE: &str =
    "I couldn't find a relevant answer to your question in the document.";

/// Find the sentence that best answers the question.
///
/// Question keywords are the question's tokens minus stopwords and short
/// tokens. Each sentence scores one point per keyword contained in its
/// token set (containment is boolean, not frequency-weighted). The first
/// sentence with the highest score is returned verbatim; replacement only
/// happens on a strictly greater score, so earlier sentences win ties.
pub fn find_answer(question: &str, sentences: &[String]) -> String {
    let keywords: Vec<String> = tokenize(question)
        .into_iter()
        .filter(|token| is_countable(token))
        .collect();

    if keywords.is_empty() {
        return NO_KEYWORDS_MESSAGE.to_string();
    }

    let mut best: Option<&String> = None;
    let mut best_score = 0;

    for sentence in sentences {
        let tokens: HashSet<String> = tokenize(sentence).into_iter().collect();
        let score = keywords
            .iter()
            .filter(|keyword| tokens.contains(keyword.as_str()))
            .count();
        if score > best_score {
            best_score = score;
            best = Some(sentence);
        }
    }

    match best {
        Some(sentence) => sentence.clone(),
        None => NO_ANSWER_MESSAGE.to_string(),
    }
}
