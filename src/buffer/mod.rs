pub mod buffer;
pub mod cell;

pub use buffer::Buffer;
pub use cell::Cell;
