/*!
 * Tests for extractive summarization
 */

use docintel::analysis::{split_into_sentences, summarize, DEFAULT_MAX_SENTENCES};

/// Test that blank text summarizes to an empty string
#[test]
fn test_summarize_withBlankText_shouldReturnEmpty() {
    assert_eq!(summarize("", DEFAULT_MAX_SENTENCES), "");
    assert_eq!(summarize("   \n\t ", DEFAULT_MAX_SENTENCES), "");
}

/// Test that short texts are returned whole, in original order
#[test]
fn test_summarize_withFewSentences_shouldReturnAllUnchanged() {
    let text = "One two three. Four five six. Seven eight nine.";
    assert_eq!(summarize(text, DEFAULT_MAX_SENTENCES), text);
}

/// Test that a text with exactly max_sentences sentences is returned whole
#[test]
fn test_summarize_withExactlyMaxSentences_shouldReturnAllUnchanged() {
    let text = "Alpha one. Beta two. Gamma three.";
    assert_eq!(summarize(text, 3), text);
}

/// Test that longer texts are reduced to max_sentences sentences
#[test]
fn test_summarize_withManySentences_shouldRespectLimit() {
    let text = "Cats sleep all day. \
                The telescope telescope telescope works. \
                Dogs bark at night. \
                Fish swim in water. \
                Astronomers love the telescope telescope telescope. \
                Birds fly south.";

    let summary = summarize(text, 2);
    assert_eq!(split_into_sentences(&summary).len(), 2);
}

/// Test that the highest-scoring sentences are selected and re-ordered
/// into document order
#[test]
fn test_summarize_withManySentences_shouldPreserveDocumentOrder() {
    // "telescope" dominates the frequency map, so the two sentences
    // containing it score highest; the second appears after the first in
    // the document and must stay after it in the summary.
    let text = "Cats sleep all day. \
                The telescope telescope telescope works. \
                Dogs bark at night. \
                Fish swim in water. \
                Astronomers love the telescope telescope telescope. \
                Birds fly south.";

    let summary = summarize(text, 2);
    assert_eq!(
        summary,
        "The telescope telescope telescope works. \
         Astronomers love the telescope telescope telescope."
    );
}

/// Test that equal scores keep the earlier sentences
#[test]
fn test_summarize_withTiedScores_shouldKeepEarlierSentences() {
    let text = "Alpha beta. Alpha beta. Alpha beta. Alpha beta.";
    let summary = summarize(text, 2);
    assert_eq!(summary, "Alpha beta. Alpha beta.");
}

/// Test that a stopword-only sentence scores zero without panicking
#[test]
fn test_summarize_withStopwordOnlySentence_shouldNotPanic() {
    let text = "To be or not to be. \
                Telescopes magnify distant galaxies. \
                Galaxies contain billions of stars. \
                Telescopes need clear skies. \
                Stars emit light. \
                Light travels far.";

    let summary = summarize(text, 2);
    assert_eq!(split_into_sentences(&summary).len(), 2);
    assert!(!summary.contains("To be or not to be"));
}
