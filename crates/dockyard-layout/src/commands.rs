use dockyard_common::{NodeId, Orientation};
use serde::{Deserialize, Serialize};

use crate::ops::SplitPosition;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DockCommand {
    Float(NodeId),
    Dock(NodeId),
    DockAsDocument(NodeId),
    Hide(NodeId),
    Show(NodeId),
    Close(NodeId),
    ToggleAutoHide(NodeId),
    Activate(NodeId),
    Select {
        pane: NodeId,
        index: usize,
    },
    Split {
        pane: NodeId,
        content: NodeId,
        orientation: Orientation,
        position: SplitPosition,
    },
}
