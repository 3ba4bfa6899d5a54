//! Study Content
//!
//! Static study material for the learner dashboard:
//!
//! - **Library**: technology catalogue and bundled documents
//! - **Parser**: splits a document into title / theory / code sections

mod library;
mod parser;

pub use library::{catalog, document, open, StudyDocument, Technology};
pub use parser::{parse_sections, Section};
