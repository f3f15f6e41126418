//! Read-only walks over the arena.

use dockyard_common::{HostId, NodeId};

use super::types::{ContentKind, NodeKind};
use super::LayoutTree;

impl LayoutTree {
    /// Whether `id` is reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.contains(id) && self.is_ancestor_or_self(self.root, id)
    }

    /// Whether `ancestor` is `node` or lies on its parent chain.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Parent chain of `id`, nearest first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.parent(id);
        while let Some(p) = current {
            chain.push(p);
            current = self.parent(p);
        }
        chain
    }

    /// `id` and everything below it, pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.contains(id) {
            return out;
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Content items under `id`, pre-order.
    pub fn contents_under(&self, id: NodeId) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|n| self.content(*n).is_some())
            .collect()
    }

    /// Number of edges between `id` and the top of its tree.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len()
    }

    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|c| *c == id)
    }

    /// The floating window `id` lives in, if any.
    pub fn floating_window_of(&self, id: NodeId) -> Option<NodeId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|n| matches!(self.kind(*n), Some(NodeKind::FloatingWindow(_))))
    }

    /// The window hosting `id`. Detached nodes report the main window.
    pub fn host_of(&self, id: NodeId) -> HostId {
        match self.floating_window_of(id) {
            Some(window) => HostId::Floating(window),
            None => HostId::Main,
        }
    }

    /// Whether `id` lives under the root panel of the main window.
    pub fn is_in_main_tree(&self, id: NodeId) -> bool {
        self.contains(id) && self.is_ancestor_or_self(self.root_panel, id)
    }

    /// Find an attached content item by its application id.
    pub fn find_content(&self, content_id: &str) -> Option<NodeId> {
        self.contents_under(self.root)
            .into_iter()
            .find(|n| self.content(*n).is_some_and(|c| c.content_id == content_id))
    }

    /// Document panes of the main tree, pre-order.
    pub fn document_panes_in_main(&self) -> Vec<NodeId> {
        self.descendants(self.root_panel)
            .into_iter()
            .filter(|n| {
                self.pane(*n)
                    .is_some_and(|p| p.kind == ContentKind::Document)
            })
            .collect()
    }

    /// Hidden content items parked under the root, in hiding order.
    pub fn hidden_contents(&self) -> Vec<NodeId> {
        self.children(self.root)
            .iter()
            .copied()
            .filter(|n| self.content(*n).is_some())
            .collect()
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.content(id).is_some() && self.parent(id) == Some(self.root)
    }

    pub fn first_document_pane(&self) -> Option<NodeId> {
        self.document_panes_in_main().into_iter().next()
    }
}
