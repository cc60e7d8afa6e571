//! Sentence segmentation.

use unicode_segmentation::UnicodeSegmentation;

use super::SentenceTokenizer;

/// Sentence splitter based on Unicode sentence boundaries (UAX #29).
///
/// The rules know no abbreviations: a period followed by a capitalised word
/// always ends a sentence, so `"Dr. Smith"` splits after `"Dr."`. A period
/// followed by a lowercase word does not. Plug a different
/// [`SentenceTokenizer`] into the analyzer for abbreviation-aware splitting.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceTokenizer;

impl UnicodeSentenceTokenizer {
    /// Create a new sentence tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl SentenceTokenizer for UnicodeSentenceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
