//! Drag sessions: Idle, then Active, then Committed or Aborted.

mod session;
mod types;

pub use session::DragSession;
pub use types::*;
