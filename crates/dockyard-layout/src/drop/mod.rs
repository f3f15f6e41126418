//! The drop-target catalog: which areas a host offers, which one the
//! pointer is over, what dropping there would do, and committing the drop.

mod catalog;
mod commit;
mod types;

pub use catalog::{resolve_target, select_area, HitTestService, LayoutHitTester};
pub use types::*;

#[cfg(test)]
mod tests;
