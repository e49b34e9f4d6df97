//! Persisting extracted documents

pub mod writer;

pub use writer::{ExtractedDocument, OutputWriter};
