/*!
 * Tests for keyword-overlap question answering
 */

use docintel::analysis::{find_answer, NO_ANSWER_MESSAGE, NO_KEYWORDS_MESSAGE};

fn sample_sentences() -> Vec<String> {
    vec![
        "The cat sat on the mat.".to_string(),
        "Dogs bark loudly at night.".to_string(),
        "The cat chased the dog.".to_string(),
    ]
}

/// Test that a question made of stopwords yields the informational message
#[test]
fn test_find_answer_withStopwordOnlyQuestion_shouldReturnNoKeywordsMessage() {
    let answer = find_answer("Where is the?", &sample_sentences());
    assert_eq!(answer, NO_KEYWORDS_MESSAGE);
}

/// Test that an empty question yields the informational message
#[test]
fn test_find_answer_withEmptyQuestion_shouldReturnNoKeywordsMessage() {
    let answer = find_answer("", &sample_sentences());
    assert_eq!(answer, NO_KEYWORDS_MESSAGE);
}

/// Test that keywords matching no sentence yield the no-answer message
#[test]
fn test_find_answer_withNoMatches_shouldReturnNoAnswerMessage() {
    let answer = find_answer("What about submarines?", &sample_sentences());
    assert_eq!(answer, NO_ANSWER_MESSAGE);
}

/// Test that an empty sentence list yields the no-answer message
#[test]
fn test_find_answer_withNoSentences_shouldReturnNoAnswerMessage() {
    let answer = find_answer("Where is the cat?", &[]);
    assert_eq!(answer, NO_ANSWER_MESSAGE);
}

/// Test the tie-break: equal scores keep the first sentence encountered
#[test]
fn test_find_answer_withTiedScores_shouldReturnFirstSentence() {
    // "cat" matches sentences 1 and 3 with score 1 each; the first wins.
    let answer = find_answer("Where is the cat?", &sample_sentences());
    assert_eq!(answer, "The cat sat on the mat.");
}

/// Test that the sentence matching the most keywords wins
#[test]
fn test_find_answer_withMultipleKeywords_shouldReturnBestMatch() {
    // "cat" and "dog" both appear only in the third sentence.
    let answer = find_answer("Did the cat chase the dog?", &sample_sentences());
    assert_eq!(answer, "The cat chased the dog.");
}

/// Test that a keyword repeated within a sentence still counts once
#[test]
fn test_find_answer_withRepeatedKeywordInSentence_shouldCountOnce() {
    let sentences = vec![
        "The cat cat cat purred.".to_string(),
        "The dog met the cat.".to_string(),
    ];
    // Sentence 1 contains "cat" three times but scores 1; sentence 2
    // contains both keywords and scores 2.
    let answer = find_answer("cat dog", &sentences);
    assert_eq!(answer, "The dog met the cat.");
}

/// Test that the winning sentence is returned verbatim
#[test]
fn test_find_answer_withMatch_shouldReturnOriginalText() {
    let sentences = vec!["Dogs bark LOUDLY at night!".to_string()];
    let answer = find_answer("How loudly do dogs bark?", &sentences);
    assert_eq!(answer, "Dogs bark LOUDLY at night!");
}
