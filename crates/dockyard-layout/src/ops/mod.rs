//! Content-level commands built on the structural primitives: split,
//! float, dock, hide/show, close, auto-hide and activation.

mod activation;
mod auto_hide;
mod content;
mod floating;
mod placement;
mod split;

pub use split::SplitPosition;
