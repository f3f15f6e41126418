//! Drag session types.

use dockyard_common::{HostId, NodeId, Rect};
use serde::Serialize;

use crate::drop::{DropArea, DropTarget};

/// Lifecycle of a drag session.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum DragState {
    #[default]
    Idle,
    Active,
    Committed(DragOutcome),
    Aborted,
}

impl DragState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DragState::Committed(_) | DragState::Aborted)
    }
}

/// What a released drag asks the layout to do.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DragOutcome {
    /// Merge the window into the layout at `target`.
    Dropped { window: NodeId, target: DropTarget },
    /// Leave the window floating at `bounds`.
    Floated { window: NodeId, bounds: Rect },
}

/// Instructions for the overlay layer of one host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OverlayDirective {
    HostEnter(HostId),
    HostLeave(HostId),
    AreaEnter { host: HostId, area: DropArea },
    AreaLeave { host: HostId },
    /// Highlight `target.preview`.
    TargetEnter { host: HostId, target: DropTarget },
    TargetLeave { host: HostId },
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseResult {
    /// `None` when the session was not active.
    pub outcome: Option<DragOutcome>,
    pub directives: Vec<OverlayDirective>,
}
