//! The DockingManager ties a layout tree to geometry, drag sessions and
//! persistence.

mod drag;
mod operations;
mod persistence;
mod types;

pub use types::*;
