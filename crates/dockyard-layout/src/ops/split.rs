//! Splitting a pane: moving one content item into a new sibling pane.

use dockyard_common::{NodeId, Orientation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tree::{LayoutTree, NodeKind};

/// Which side of the original pane the new pane lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitPosition {
    Before,
    After,
}

impl LayoutTree {
    /// Move `content` out of `pane` into a new pane of the same kind placed
    /// before or after `pane` along `orientation`. Returns the new pane.
    ///
    /// Returns `None` when `content` is not in `pane` or is its only item.
    pub fn split(
        &mut self,
        pane: NodeId,
        content: NodeId,
        orientation: Orientation,
        position: SplitPosition,
    ) -> Option<NodeId> {
        let kind = self.pane(pane)?.kind;
        if self.parent(content) != Some(pane) || self.children(pane).len() < 2 {
            debug!(%pane, %content, "split refused");
            return None;
        }
        let parent = self.parent(pane)?;

        let new_pane = self.new_pane(kind);
        self.detach(content);
        self.attach(new_pane, 0, content);

        let parent_orientation = self.panel_orientation(parent);
        let pure_pane_group = self
            .children(parent)
            .iter()
            .all(|c| matches!(self.kind(*c), Some(NodeKind::Pane(_))));
        let single_child = self.children(parent).len() == 1;

        let (host, anchor) = if parent_orientation == Some(orientation) {
            (parent, pane)
        } else if parent_orientation.is_some()
            && (single_child || (!self.options.allow_mixed_orientation && pure_pane_group))
        {
            self.set_panel_orientation(parent, orientation);
            (parent, pane)
        } else {
            let wrapper = self.interpose_panel(pane, orientation);
            (wrapper, pane)
        };

        let index = self.index_in_parent(anchor).unwrap_or(0);
        let index = match position {
            SplitPosition::Before => index,
            SplitPosition::After => index + 1,
        };
        self.attach(host, index, new_pane);
        debug!(%pane, %new_pane, %host, ?orientation, ?position, "split pane");
        Some(new_pane)
    }
}
