//! tagpair library - section tag pairing for mustache-style templates
//!
//! Given a document and a cursor sitting right after a `{{#name}}`,
//! `{{^name}}` or `{{/name}}` tag, finds the nearest forward tag that closes
//! or continues the section and reports the span between them.

pub mod config;
pub mod document;
pub mod error;
pub mod highlight;
pub mod position;
pub mod render;
pub mod tag;

// Re-export commonly used types for convenience
pub use config::Config;
pub use document::{Document, TextDocument};
pub use highlight::{HighlightRenderer, SectionHighlighter, SelectionChange, compute_span};
pub use position::{Position, Span};
pub use tag::{Tag, extract, find_pair};
