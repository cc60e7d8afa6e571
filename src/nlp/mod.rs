//! Tokenization and stemming collaborators.
//!
//! Paragraph detection only needs line geometry; turning text into words,
//! sentences and stems is delegated to the pluggable components defined here.
//! Each trait is a pure function of its input, so implementations can be
//! shared freely across threads.

mod sentence;
mod stem;
mod word;

pub use sentence::UnicodeSentenceTokenizer;
pub use stem::PorterStemmer;
pub use word::TreebankWordTokenizer;

use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

/// Splits text into word tokens.
pub trait WordTokenizer: Send + Sync {
    /// Tokenize text into words and punctuation.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits text into sentences.
pub trait SentenceTokenizer: Send + Sync {
    /// Tokenize text into sentences.
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Reduces a word to its stem.
pub trait Stemmer: Send + Sync {
    /// Stem a single word.
    fn stem(&self, word: &str) -> String;
}

/// Bundle of word tokenizer, sentence tokenizer and stemmer.
///
/// Input text is NFC-normalized before it reaches the tokenizers.
#[derive(Clone)]
pub struct TextAnalyzer {
    word_tokenizer: Arc<dyn WordTokenizer>,
    sentence_tokenizer: Arc<dyn SentenceTokenizer>,
    stemmer: Arc<dyn Stemmer>,
}

impl TextAnalyzer {
    /// Create an analyzer with the default English components.
    pub fn new() -> Self {
        Self {
            word_tokenizer: Arc::new(TreebankWordTokenizer::new()),
            sentence_tokenizer: Arc::new(UnicodeSentenceTokenizer::new()),
            stemmer: Arc::new(PorterStemmer::new()),
        }
    }

    /// Replace the word tokenizer.
    pub fn with_word_tokenizer(mut self, tokenizer: impl WordTokenizer + 'static) -> Self {
        self.word_tokenizer = Arc::new(tokenizer);
        self
    }

    /// Replace the sentence tokenizer.
    pub fn with_sentence_tokenizer(mut self, tokenizer: impl SentenceTokenizer + 'static) -> Self {
        self.sentence_tokenizer = Arc::new(tokenizer);
        self
    }

    /// Replace the stemmer.
    pub fn with_stemmer(mut self, stemmer: impl Stemmer + 'static) -> Self {
        self.stemmer = Arc::new(stemmer);
        self
    }

    /// Word tokens of the text.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.word_tokenizer.tokenize(&normalize(text))
    }

    /// Sentences of the text.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.sentence_tokenizer.tokenize(&normalize(text))
    }

    /// Stem of a single word.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// Stemmed word tokens of the text.
    pub fn stem_words(&self, text: &str) -> Vec<String> {
        self.words(text).iter().map(|w| self.stem(w)).collect()
    }

    /// Stemmed word tokens of the text, joined by single spaces.
    pub fn stem_text(&self, text: &str) -> String {
        self.stem_words(text).join(" ")
    }
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer").finish_non_exhaustive()
    }
}

fn normalize(text: &str) -> String {
    text.nfc().collect()
}
