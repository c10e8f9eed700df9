/*!
 * Tests for keyword extraction
 */

use docintel::analysis::{extract_keywords, DEFAULT_MAX_KEYWORDS};

/// Test that the keyword list never exceeds the requested maximum
#[test]
fn test_extract_keywords_withManyWords_shouldRespectLimit() {
    let text = "apple banana cherry durian elderberry fig grape";
    let keywords = extract_keywords(text, 3);
    assert_eq!(keywords.len(), 3);
}

/// Test that stopwords and short tokens never appear as keywords
#[test]
fn test_extract_keywords_withStopwordsAndShortTokens_shouldExcludeThem() {
    let text = "the ox is on a telescope and the telescope is it";
    let keywords = extract_keywords(text, DEFAULT_MAX_KEYWORDS);
    assert_eq!(keywords, vec!["telescope"]);
}

/// Test that keywords are ordered by descending frequency
#[test]
fn test_extract_keywords_withDistinctFrequencies_shouldOrderByCount() {
    let text = "apple apple apple banana banana cherry";
    let keywords = extract_keywords(text, DEFAULT_MAX_KEYWORDS);
    assert_eq!(keywords, vec!["apple", "banana", "cherry"]);
}

/// Test that equal counts are broken deterministically
#[test]
fn test_extract_keywords_withTiedCounts_shouldBreakTiesAlphabetically() {
    let text = "zebra apple mango";
    let keywords = extract_keywords(text, DEFAULT_MAX_KEYWORDS);
    assert_eq!(keywords, vec!["apple", "mango", "zebra"]);
}

/// Test that repeated extraction over identical input yields identical output
#[test]
fn test_extract_keywords_calledTwice_shouldBeIdentical() {
    let text = "galaxies rotate slowly while stars collide and galaxies merge";
    assert_eq!(
        extract_keywords(text, DEFAULT_MAX_KEYWORDS),
        extract_keywords(text, DEFAULT_MAX_KEYWORDS)
    );
}

/// Test that empty input yields no keywords
#[test]
fn test_extract_keywords_withEmptyInput_shouldReturnEmpty() {
    assert!(extract_keywords("", DEFAULT_MAX_KEYWORDS).is_empty());
}
