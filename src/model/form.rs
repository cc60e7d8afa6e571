//! Key/value form types.

use serde::{Deserialize, Serialize};

/// Key/value pairs detected on a page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Form {
    /// Detected fields, in response order
    pub fields: Vec<Field>,
}

impl Form {
    /// Add a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Check if the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Find the first field whose key text matches, ignoring ASCII case and
    /// surrounding whitespace.
    pub fn get_field(&self, key: &str) -> Option<&Field> {
        let key = key.trim();
        self.fields.iter().find(|f| {
            f.key
                .as_ref()
                .is_some_and(|k| k.text.trim().eq_ignore_ascii_case(key))
        })
    }
}

/// A form field. Either side may be missing when detection is partial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    /// The key (label) side
    pub key: Option<FieldText>,

    /// The value side
    pub value: Option<FieldText>,
}

impl Field {
    /// Create a field with both sides present.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(FieldText::new(key)),
            value: Some(FieldText::new(value)),
        }
    }

    /// Key text, or an empty string.
    pub fn key_text(&self) -> &str {
        self.key.as_ref().map(|k| k.text.as_str()).unwrap_or("")
    }

    /// Value text, or an empty string.
    pub fn value_text(&self) -> &str {
        self.value.as_ref().map(|v| v.text.as_str()).unwrap_or("")
    }
}

/// Text content of a field key or value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldText {
    /// Words joined by a space
    pub text: String,

    /// Detection confidence (0-100)
    #[serde(default)]
    pub confidence: f32,
}

impl FieldText {
    /// Create field text without confidence.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_field_case_insensitive() {
        let mut form = Form::default();
        form.add_field(Field::new("Name:", "Jane Doe"));
        form.add_field(Field {
            key: Some(FieldText::new("Phone")),
            value: None,
        });

        let field = form.get_field(" name: ").unwrap();
        assert_eq!(field.value_text(), "Jane Doe");

        let phone = form.get_field("PHONE").unwrap();
        assert_eq!(phone.value_text(), "");
        assert!(form.get_field("Address").is_none());
    }
}
