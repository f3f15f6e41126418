pub mod commands;
pub mod drag;
pub mod drop;
pub mod invariants;
pub mod layout;
pub mod manager;
pub mod ops;
pub mod options;
pub mod serializer;
pub mod tree;

#[cfg(test)]
mod test_support;

pub use commands::DockCommand;
pub use drag::{DragOutcome, DragSession, DragState, OverlayDirective, ReleaseResult};
pub use drop::{
    DropArea, DropAreaKind, DropTarget, DropTargetKind, DropTargetOptions, HitTestService,
    LayoutHitTester,
};
pub use invariants::{check_invariants, InvariantViolation};
pub use layout::{LayoutEngine, LayoutSnapshot};
pub use manager::DockingManager;
pub use ops::SplitPosition;
pub use options::DockingOptions;
pub use serializer::{deserialize_layout, serialize_layout};
pub use tree::{ContentData, ContentKind, LayoutTree, NodeKind};
