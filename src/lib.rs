pub mod buffer;
pub mod dom;
pub mod event;
pub mod layout;
pub mod mirror;
pub mod render;
pub mod style;
pub mod terminal;
pub mod viewport;

pub use buffer::{Buffer, Cell};
pub use dom::{Content, Document, DomError, Element, Position, Tag};
pub use event::ViewportEvent;
pub use layout::{document_size, measure, LayoutResult, Rect};
pub use mirror::{HeaderMirror, MirrorSet, Visibility, MARKER_CLASS};
pub use style::{Color, Rgb, Style};
pub use terminal::Terminal;
pub use viewport::Viewport;
