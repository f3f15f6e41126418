//! The layout tree arena and its structural primitives.

mod arena;
mod gc;
mod selection;
mod structure;
mod traversal;
mod types;
mod visibility;

pub use arena::LayoutTree;
pub use types::*;
