//! Plain text rendering.

use crate::tokenize::Tokens;

/// Render tokens as plain text, one item per line.
pub fn to_text(tokens: &Tokens) -> String {
    tokens.items.join("\n")
}
