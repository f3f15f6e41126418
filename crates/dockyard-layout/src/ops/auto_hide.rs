//! Pinning anchorable panes to a window edge and restoring them.

use dockyard_common::{NodeId, Orientation, Side};
use tracing::debug;

use crate::tree::{
    AnchorGroupData, ContentKind, GridLength, LayoutTree, NodeKind, PreviousContainer,
};

impl LayoutTree {
    /// Toggle auto-hide for a pane, an anchor group, or the container of a
    /// content item. Returns whether anything moved.
    pub fn toggle_auto_hide(&mut self, node: NodeId) -> bool {
        match self.kind(node) {
            Some(NodeKind::Pane(_)) => self.auto_hide_pane(node),
            Some(NodeKind::AnchorGroup(_)) => self.restore_group(node),
            Some(NodeKind::Content(_)) => match self.parent(node) {
                Some(parent) => self.toggle_auto_hide(parent),
                None => false,
            },
            _ => false,
        }
    }

    /// The window edge closest to `pane`, judged by which side of the
    /// document area its top-level branch sits on.
    pub fn auto_hide_side(&self, pane: NodeId) -> Side {
        let root_panel = self.root_panel;
        let orientation = self
            .panel_orientation(root_panel)
            .unwrap_or(Orientation::Horizontal);
        let (leading, trailing) = match orientation {
            Orientation::Horizontal => (Side::Left, Side::Right),
            Orientation::Vertical => (Side::Top, Side::Bottom),
        };

        let branch_of = |node: NodeId| {
            std::iter::once(node)
                .chain(self.ancestors(node))
                .find(|n| self.parent(*n) == Some(root_panel))
                .and_then(|n| self.index_in_parent(n))
        };
        let Some(branch) = branch_of(pane) else {
            return trailing;
        };
        let document_branch = self.first_document_pane().and_then(branch_of);
        let leading_half = match document_branch {
            Some(doc) => branch < doc,
            None => branch * 2 < self.children(root_panel).len(),
        };
        if leading_half {
            leading
        } else {
            trailing
        }
    }

    fn auto_hide_pane(&mut self, pane: NodeId) -> bool {
        let is_anchorable = self
            .pane(pane)
            .is_some_and(|p| p.kind == ContentKind::Anchorable);
        if !is_anchorable || !self.is_in_main_tree(pane) || self.children(pane).is_empty() {
            return false;
        }
        let contents = self.children(pane).to_vec();
        if contents
            .iter()
            .any(|c| self.content(*c).is_some_and(|d| !d.can_auto_hide))
        {
            debug!(%pane, "auto-hide refused: CanAutoHide is false");
            return false;
        }

        let side = self.auto_hide_side(pane);
        let index = self.index_in_parent(pane).unwrap_or(0);
        let group = self.insert_node(NodeKind::AnchorGroup(AnchorGroupData {
            previous_container: Some(PreviousContainer {
                container: pane,
                index,
            }),
        }));
        for (i, content) in contents.into_iter().enumerate() {
            self.remember_origin(content);
            self.detach(content);
            self.attach(group, i, content);
        }
        let anchor_side = self.anchor_side(side);
        self.attach(anchor_side, usize::MAX, group);
        debug!(%pane, %group, ?side, "auto-hid pane");

        // The emptied pane stays while the group remembers it.
        self.collect_garbage_from(pane);
        true
    }

    fn restore_group(&mut self, group: NodeId) -> bool {
        let side = match self.parent(group).and_then(|s| self.kind(s)) {
            Some(NodeKind::AnchorSide(side)) => *side,
            _ => return false,
        };
        let contents = self.children(group).to_vec();
        if contents.is_empty() {
            return false;
        }
        let remembered = self
            .anchor_group(group)
            .and_then(|g| g.previous_container)
            .map(|p| p.container)
            .filter(|p| {
                self.is_attached(*p)
                    && self
                        .pane(*p)
                        .is_some_and(|d| d.kind == ContentKind::Anchorable)
            });

        let target = match remembered {
            Some(pane) => {
                for content in &contents {
                    self.detach(*content);
                    self.attach(pane, usize::MAX, *content);
                }
                pane
            }
            None => {
                let pane = self.new_pane(ContentKind::Anchorable);
                let extent = GridLength::Pixel(self.options.default_auto_hide_size);
                if let Some(size) = self.dock_size_mut(pane) {
                    match side.orientation() {
                        Orientation::Horizontal => size.width = extent,
                        Orientation::Vertical => size.height = extent,
                    }
                }
                for (i, content) in contents.iter().enumerate() {
                    self.detach(*content);
                    self.attach(pane, i, *content);
                }
                self.place_at_root_edge(pane, side);
                pane
            }
        };

        for content in &contents {
            if let Some(data) = self.content_mut(*content) {
                if data.previous_container.is_some_and(|p| p.container == target) {
                    data.previous_container = None;
                }
            }
        }
        debug!(%group, pane = %target, ?side, "restored auto-hidden group");
        self.collect_garbage_from(group);
        true
    }
}
