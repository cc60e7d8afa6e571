//! Document model types for document-analysis output.
//!
//! The model is an owned, read-only snapshot of what the analysis service
//! reported: pages made of positioned lines, with optional tables and form
//! fields. Everything downstream (paragraph detection, tokenization,
//! rendering) reads from it and never mutates it.

mod document;
mod form;
mod geometry;
mod page;
mod table;

pub use document::Document;
pub use form::{Field, FieldText, Form};
pub use geometry::BoundingBox;
pub use page::{Line, Page, Word};
pub use table::{Table, TableCell, TableRow};
