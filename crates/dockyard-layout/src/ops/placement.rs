//! Placing subtrees next to existing nodes.

use dockyard_common::{NodeId, Orientation, Side};
use tracing::debug;

use crate::tree::{ContentKind, LayoutTree, NodeKind};

impl LayoutTree {
    /// Insert `subtree` into `panel` at `index`. A panel with the same
    /// orientation is spliced in so its children land in order.
    pub(crate) fn insert_subtree(&mut self, panel: NodeId, index: usize, subtree: NodeId) {
        let target_orientation = self.panel_orientation(panel);
        let splice = !self.children(subtree).is_empty()
            && self.panel_orientation(subtree).is_some()
            && self.panel_orientation(subtree) == target_orientation;
        self.detach(subtree);

        if splice {
            let children = self.children(subtree).to_vec();
            let start = index.min(self.children(panel).len());
            for (offset, child) in children.into_iter().enumerate() {
                self.detach(child);
                self.attach(panel, start + offset, child);
            }
            self.destroy_subtree(subtree);
            debug!(%panel, %subtree, "spliced panel into same-orientation parent");
        } else {
            self.attach(panel, index, subtree);
        }
    }

    /// Wrap `target` in a new panel of `orientation` that takes its place.
    /// Absolute size hints of `target` move to the wrapper.
    pub(crate) fn interpose_panel(&mut self, target: NodeId, orientation: Orientation) -> NodeId {
        let wrapper = self.new_panel(orientation);
        self.hand_size_to_wrapper(target, wrapper);
        let (parent, index) = self
            .detach(target)
            .unwrap_or_else(|| panic!("cannot interpose a panel above detached node {target}"));
        self.attach(parent, index, wrapper);
        self.attach(wrapper, 0, target);
        debug!(%target, %wrapper, ?orientation, "interposed panel");
        wrapper
    }

    /// Put `subtree` on `side` of the attached panel-or-pane `target`.
    pub(crate) fn place_beside(&mut self, target: NodeId, subtree: NodeId, side: Side) {
        let orientation = side.orientation();
        let parent = self
            .parent(target)
            .unwrap_or_else(|| panic!("cannot place beside detached node {target}"));
        let parent_is_panel = self.panel(parent).is_some();
        let reorient_root = parent == self.root_panel && self.children(parent).len() <= 1;

        if parent_is_panel && (self.panel_orientation(parent) == Some(orientation) || reorient_root) {
            self.set_panel_orientation(parent, orientation);
            let index = self.index_in_parent(target).unwrap_or(0);
            let index = if side.is_leading() { index } else { index + 1 };
            self.insert_subtree(parent, index, subtree);
        } else {
            let wrapper = self.interpose_panel(target, orientation);
            let index = if side.is_leading() { 0 } else { 1 };
            self.insert_subtree(wrapper, index, subtree);
        }
        debug!(%target, %subtree, ?side, "placed subtree beside target");
    }

    /// Put `subtree` along one edge of the main window.
    pub(crate) fn place_at_root_edge(&mut self, subtree: NodeId, side: Side) {
        let root_panel = self.root_panel;
        let orientation = side.orientation();
        if self.panel_orientation(root_panel) != Some(orientation) {
            let existing = self.children(root_panel).to_vec();
            if existing.len() > 1 {
                let previous = self
                    .panel_orientation(root_panel)
                    .unwrap_or(Orientation::Horizontal);
                let inner = self.new_panel(previous);
                for (i, child) in existing.into_iter().enumerate() {
                    self.detach(child);
                    self.attach(inner, i, child);
                }
                self.attach(root_panel, 0, inner);
            }
            self.set_panel_orientation(root_panel, orientation);
        }
        let index = if side.is_leading() {
            0
        } else {
            self.children(root_panel).len()
        };
        self.insert_subtree(root_panel, index, subtree);
        debug!(%subtree, ?side, "placed subtree at root edge");
    }

    /// The first document pane of the main tree, creating one at the end of
    /// the root panel when none exists.
    pub(crate) fn ensure_document_pane(&mut self) -> NodeId {
        if let Some(pane) = self.first_document_pane() {
            return pane;
        }
        let pane = self.new_pane(ContentKind::Document);
        let root_panel = self.root_panel;
        self.attach(root_panel, usize::MAX, pane);
        debug!(%pane, "created document pane");
        pane
    }

    /// Whether `container` can hold `content` right now.
    pub(crate) fn accepts(&self, container: NodeId, content: NodeId) -> bool {
        match (self.kind(container), self.kind(content)) {
            (Some(parent), Some(child @ NodeKind::Content(_))) => parent.can_contain(child),
            _ => false,
        }
    }
}
