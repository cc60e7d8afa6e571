//! Penn Treebank style word tokenization.

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::WordTokenizer;

/// Regex-driven word tokenizer following Penn Treebank conventions.
///
/// Punctuation becomes its own token, clitics are split off (`can't` →
/// `ca`, `n't`; `it's` → `it`, `'s`) and double quotes are rewritten as
/// ` `` ` / `''`. Text is split into sentences first so that every
/// sentence-final period is separated.
#[derive(Debug, Clone)]
pub struct TreebankWordTokenizer {
    rules: Vec<(Regex, &'static str)>,
}

impl TreebankWordTokenizer {
    /// Create a tokenizer with the standard rule set.
    pub fn new() -> Self {
        let rules = [
            // starting quotes
            (r#"^\s*""#, " `` "),
            (r#"([ (\[{<])""#, "${1} `` "),
            // punctuation
            (r"([:,])([^\d])", " ${1} ${2}"),
            (r"([:,])$", " ${1} "),
            (r"\.\.\.", " ... "),
            (r"[;@#$%&]", " ${0} "),
            (r#"([^\.])(\.)([\]\)}>"']*)\s*$"#, "${1} ${2}${3} "),
            (r"[?!]", " ${0} "),
            (r"([^'])' ", "${1} ' "),
            // brackets and dashes
            (r"[\]\[\(\)\{\}<>]", " ${0} "),
            (r"--", " -- "),
            // ending quotes and clitics
            (r#"""#, " '' "),
            (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
            (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
            // fused forms
            (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
            (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
            (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
            (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
            (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
            (r"(?i)\b(wan)(na)\b", " ${1} ${2} "),
        ]
        .into_iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("hard-coded tokenizer pattern"),
                replacement,
            )
        })
        .collect();

        Self { rules }
    }

    fn tokenize_sentence(&self, sentence: &str, tokens: &mut Vec<String>) {
        let mut text = format!(" {} ", sentence);
        for (re, replacement) in &self.rules {
            text = re.replace_all(&text, *replacement).into_owned();
        }
        tokens.extend(text.split_whitespace().map(str::to_string));
    }
}

impl Default for TreebankWordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer for TreebankWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        for sentence in text.unicode_sentences() {
            self.tokenize_sentence(sentence.trim(), &mut tokens);
        }
        tokens
    }
}
