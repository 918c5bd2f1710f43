pub mod document;
pub mod node;

pub use document::Document;
pub use node::{Content, Element, Position, Tag};

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DomError {
    #[error("no element with id: {0}")]
    NotFound(String),
    #[error("element is not a table: {0}")]
    NotATable(String),
}
