//! Applying a drop: merging a floating window into the layout.

use dockyard_common::NodeId;
use tracing::debug;

use super::{DropTarget, DropTargetKind};
use crate::tree::{ContentKind, LayoutTree};

impl LayoutTree {
    /// Merge the floating `window` into the layout at `target`. The emptied
    /// window is removed and the previously active (or most recently
    /// activated) content of the window is activated again. Returns `false`
    /// and changes nothing when the target cannot take the window.
    pub fn dock_floating_window(&mut self, window: NodeId, target: &DropTarget) -> bool {
        let Some(window_kind) = self.floating(window).map(|w| w.kind) else {
            return false;
        };
        let Some(&window_root) = self.children(window).first() else {
            return false;
        };
        if !self.is_attached(window)
            || !self.is_attached(target.node)
            || self.is_ancestor_or_self(window, target.node)
        {
            return false;
        }
        if window_kind == ContentKind::Document && !self.document_target_allowed(target) {
            debug!(%window, kind = ?target.kind, "drop refused for document window");
            return false;
        }

        let contents = self.contents_under(window);
        let remembered = self.remembered_activation(&contents);

        match target.kind {
            DropTargetKind::PaneInterior => {
                let pane = target.node;
                if self.pane(pane).is_none() || !contents.iter().all(|c| self.accepts(pane, *c)) {
                    return false;
                }
                let len = self.children(pane).len();
                let base = target.index.unwrap_or(len).min(len);
                for (offset, content) in contents.iter().enumerate() {
                    self.detach(*content);
                    self.attach(pane, base + offset, *content);
                }
            }
            DropTargetKind::PaneEdge(side) => {
                if self.parent(target.node).is_none() {
                    return false;
                }
                self.place_beside(target.node, window_root, side);
            }
            DropTargetKind::PanelGroupInterior => {
                if self.panel(target.node).is_none() {
                    return false;
                }
                self.insert_subtree(target.node, usize::MAX, window_root);
            }
            DropTargetKind::RootEdge(side) => {
                self.place_at_root_edge(window_root, side);
            }
        }

        self.remove_attached(window);
        // A second document pane in the main tree ends the reservation of
        // an empty document area elsewhere, so sweep everything.
        self.collect_garbage();
        debug!(%window, kind = ?target.kind, node = %target.node, "docked floating window");

        if let Some(content) = remembered {
            if self.active_content == Some(content) {
                if let Some(pane) = self.parent(content).filter(|p| self.pane(*p).is_some()) {
                    self.set_selected_internal(pane, Some(content));
                }
            } else {
                self.activate(content);
            }
        }
        true
    }

    fn document_target_allowed(&self, target: &DropTarget) -> bool {
        let is_document_pane = |n: NodeId| {
            self.pane(n)
                .is_some_and(|p| p.kind == ContentKind::Document)
        };
        match target.kind {
            DropTargetKind::PaneInterior | DropTargetKind::PaneEdge(_) => {
                is_document_pane(target.node)
            }
            DropTargetKind::PanelGroupInterior => self
                .descendants(target.node)
                .into_iter()
                .any(is_document_pane),
            DropTargetKind::RootEdge(_) => false,
        }
    }

    /// The active item among `contents`, else the most recently activated.
    fn remembered_activation(&self, contents: &[NodeId]) -> Option<NodeId> {
        if let Some(active) = self.active_content.filter(|a| contents.contains(a)) {
            return Some(active);
        }
        contents
            .iter()
            .copied()
            .filter_map(|c| {
                self.content(c)
                    .and_then(|d| d.last_activation)
                    .map(|t| (t, c))
            })
            .max_by_key(|(t, _)| *t)
            .map(|(_, c)| c)
    }
}
