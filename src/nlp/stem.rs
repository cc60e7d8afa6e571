//! Word stemming.

use rust_stemmers::Algorithm;

use super::Stemmer;

/// English Porter-family stemmer (Snowball "English", a.k.a. Porter2).
///
/// Words are lowercased before stemming, so `Assessment` and `assessment`
/// both stem to `assess`.
pub struct PorterStemmer {
    inner: rust_stemmers::Stemmer,
}

impl PorterStemmer {
    /// Create an English stemmer.
    pub fn new() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PorterStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PorterStemmer")
            .field("algorithm", &"english")
            .finish()
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}
