//! Rendering of extracted tokens and documents.

mod json;
mod outline;
mod text;

pub use json::{to_json, JsonFormat};
pub use outline::outline;
pub use text::to_text;
