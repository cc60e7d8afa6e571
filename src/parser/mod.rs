//! Analysis response parsing module.

mod options;
mod textract;

pub use options::{PageSelection, ParseOptions};
pub use textract::TextractParser;
