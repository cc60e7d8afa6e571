//! Comprehend result types.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::Annotation;
use crate::error::Result;

/// A detected dominant language.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Language {
    /// RFC 5646 language code, e.g. `en`
    pub language_code: String,
    /// Detection confidence in [0, 1]
    pub score: f32,
}

impl Annotation for Language {
    fn text(&self) -> &str {
        &self.language_code
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[LanguageCode: '{}' Score: {}]",
            self.language_code, self.score
        )
    }
}

/// A named entity found in the text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Entity {
    /// Entity text as it appears in the input
    pub text: String,
    /// Entity category, e.g. `PERSON` or `DATE`
    #[serde(rename = "Type")]
    pub entity_type: String,
    /// Detection confidence in [0, 1]
    pub score: f32,
    /// Character offset of the first character
    pub begin_offset: usize,
    /// Character offset one past the last character
    pub end_offset: usize,
}

impl Annotation for Entity {
    fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[text: '{}' type: '{}' score: {} begin_offset: {} end_offset: {}]",
            self.text, self.entity_type, self.score, self.begin_offset, self.end_offset
        )
    }
}

/// A key phrase found in the text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KeyPhrase {
    /// Phrase text as it appears in the input
    pub text: String,
    /// Detection confidence in [0, 1]
    pub score: f32,
    /// Character offset of the first character
    pub begin_offset: usize,
    /// Character offset one past the last character
    pub end_offset: usize,
}

impl Annotation for KeyPhrase {
    fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for KeyPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[text: '{}' score: {} begin_offset: {} end_offset: {}]",
            self.text, self.score, self.begin_offset, self.end_offset
        )
    }
}

/// Saved response of a dominant language detection call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DominantLanguageResponse {
    /// Detected languages, most likely first
    #[serde(default)]
    pub languages: Vec<Language>,
}

/// Saved response of an entity detection call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntitiesResponse {
    /// Detected entities in text order
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// Saved response of a key phrase detection call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyPhrasesResponse {
    /// Detected key phrases in text order
    #[serde(default)]
    pub key_phrases: Vec<KeyPhrase>,
}

/// Loading of saved Comprehend responses.
pub trait ComprehendResponse: DeserializeOwned {
    /// Parse a response from a JSON string.
    fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a response from a reader.
    fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a response from a file.
    fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

impl ComprehendResponse for DominantLanguageResponse {}
impl ComprehendResponse for EntitiesResponse {}
impl ComprehendResponse for KeyPhrasesResponse {}
