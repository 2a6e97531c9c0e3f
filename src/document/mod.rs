//! JSON document loading

mod model;
mod source;

pub use model::Document;
pub use source::{DocumentSource, FileSource};

#[cfg(test)]
pub use source::MockDocumentSource;
