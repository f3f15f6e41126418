//! Derived visibility.
//!
//! Content carries its own flag. Every composite is visible exactly when
//! the rule for its kind holds over its children, and changes are pushed up
//! the parent chain eagerly.

use dockyard_common::{LayoutEvent, NodeId};

use super::types::NodeKind;
use super::LayoutTree;

impl LayoutTree {
    /// Visibility of `id` as its children currently dictate.
    pub(crate) fn evaluate_visibility(&self, id: NodeId) -> bool {
        let node = self.node_ref(id);
        match &node.kind {
            NodeKind::Root => true,
            NodeKind::Content(_) => node.visible,
            NodeKind::Pane(_) => {
                node.children.iter().any(|c| self.is_visible(*c))
                    || self.is_reserved_document_area(id)
            }
            NodeKind::AnchorGroup(_) | NodeKind::Panel(_) => {
                node.children.iter().any(|c| self.is_visible(*c))
            }
            NodeKind::FloatingWindow(_) => node
                .children
                .first()
                .is_some_and(|c| self.is_visible(*c)),
            NodeKind::AnchorSide(_) => node
                .children
                .iter()
                .any(|g| !self.children(*g).is_empty()),
        }
    }

    /// Recompute `from` and each ancestor once, bottom-up.
    pub(crate) fn propagate_visibility(&mut self, from: NodeId) {
        let mut current = Some(from);
        while let Some(id) = current {
            if !matches!(self.node_ref(id).kind, NodeKind::Content(_)) {
                let visible = self.evaluate_visibility(id);
                let node = self.node_mut(id);
                if node.visible != visible {
                    node.visible = visible;
                    self.emit(LayoutEvent::VisibilityChanged { node: id, visible });
                }
            }
            current = self.parent(id);
        }
    }

    /// Recompute every composite under the root, post-order.
    pub(crate) fn refresh_all_visibility(&mut self) {
        let mut order = self.descendants(self.root);
        order.reverse();
        for id in order {
            if matches!(self.node_ref(id).kind, NodeKind::Content(_)) {
                continue;
            }
            let visible = self.evaluate_visibility(id);
            let node = self.node_mut(id);
            if node.visible != visible {
                node.visible = visible;
                self.emit(LayoutEvent::VisibilityChanged { node: id, visible });
            }
        }
    }

    /// Flip the flag of a content item and propagate. Returns whether it changed.
    pub(crate) fn set_content_visible(&mut self, content: NodeId, visible: bool) -> bool {
        let node = self.node_mut(content);
        if node.visible == visible {
            return false;
        }
        node.visible = visible;
        self.emit(LayoutEvent::VisibilityChanged {
            node: content,
            visible,
        });
        if let Some(parent) = self.parent(content) {
            self.propagate_visibility(parent);
        }
        true
    }
}
