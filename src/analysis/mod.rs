/*!
 * Text-analysis pipeline: sentence segmentation, word-frequency modelling,
 * extractive summarization, keyword ranking, and keyword-overlap question
 * answering.
 *
 * Every function here is pure: text in, plain data out. File handling,
 * rendering, and persistence live in the application layer.
 */

pub mod frequency;
pub mod keywords;
pub mod qa;
pub mod stopwords;
pub mod summarizer;
pub mod tokenizer;

pub use frequency::word_frequencies;
pub use keywords::{extract_keywords, DEFAULT_MAX_KEYWORDS};
pub use qa::{find_answer, NO_ANSWER_MESSAGE, NO_KEYWORDS_MESSAGE};
pub use summarizer::{summarize, DEFAULT_MAX_SENTENCES};
pub use tokenizer::{split_into_sentences, tokenize};

/// Full analysis of one document.
///
/// `sentences` is the segmentation the summary was selected from; question
/// answering runs over the same list, so answers always come from the most
/// recent analysis.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    /// The raw text under analysis, verbatim.
    pub text: String,
    /// Ordered sentence list captured during analysis.
    pub sentences: Vec<String>,
    /// Extractive summary in document order.
    pub summary: String,
    /// Keywords in descending frequency order.
    pub keywords: Vec<String>,
}

impl DocumentAnalysis {
    /// Answer a question against the sentences captured by this analysis.
    pub fn answer(&self, question: &str) -> String {
        find_answer(question, &self.sentences)
    }
}

/// Run the whole pipeline over one document.
pub fn analyze_document(text: &str, max_sentences: usize, max_keywords: usize) -> DocumentAnalysis {
    DocumentAnalysis {
        text: text.to_string(),
        sentences: split_into_sentences(text),
        summary: summarize(text, max_sentences),
        keywords: extract_keywords(text, max_keywords),
    }
}
