pub mod measure;
pub mod rect;

pub use measure::{document_size, measure, CELL_PADDING};
pub use rect::Rect;

use std::collections::HashMap;

/// Computed geometry for every element, keyed by element id. Static
/// elements are in document space; fixed elements are in viewport space.
pub type LayoutResult = HashMap<String, Rect>;
