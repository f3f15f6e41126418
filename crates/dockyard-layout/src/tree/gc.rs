//! Garbage collection in the layout sense: dropping empty panes, groups and
//! windows, and collapsing panels left with a single child.

use dockyard_common::{NodeId, Orientation};
use tracing::debug;

use super::types::{ContentKind, GridLength, NodeKind};
use super::LayoutTree;

impl LayoutTree {
    /// Collect bottom-up from `start` to the root. Detached starts are ignored.
    pub fn collect_garbage_from(&mut self, start: NodeId) {
        if !self.is_attached(start) {
            return;
        }
        self.collect_chain(start);
        self.settle_document_area();
    }

    fn collect_chain(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            if !self.contains(id) {
                break;
            }
            let parent = self.parent(id);
            self.collect_node(id);
            current = parent;
        }
    }

    /// Sweep the whole tree, deepest nodes first.
    pub fn collect_garbage(&mut self) {
        let mut order = self.descendants(self.root);
        order.reverse();
        let mut changed = 0usize;
        for id in order {
            if self.contains(id) && self.collect_node(id) {
                changed += 1;
            }
        }
        self.settle_document_area();
        debug!(changed, "full garbage collection sweep");
    }

    /// An empty document pane stops being reserved once another document
    /// pane joins the main tree, and the survivor's visibility follows.
    fn settle_document_area(&mut self) {
        if !self.options.keep_document_area {
            return;
        }
        loop {
            let stale = self
                .document_panes_in_main()
                .into_iter()
                .find(|p| self.children(*p).is_empty() && !self.is_kept_empty_pane(*p));
            let Some(stale) = stale else {
                break;
            };
            self.collect_chain(stale);
            if self.contains(stale) {
                break;
            }
        }
        for pane in self.document_panes_in_main() {
            self.propagate_visibility(pane);
        }
    }

    /// Whether `pane` is the reserved document area that survives emptying.
    pub(crate) fn is_reserved_document_area(&self, pane: NodeId) -> bool {
        self.options.keep_document_area
            && self
                .pane(pane)
                .is_some_and(|p| p.kind == ContentKind::Document)
            && self.is_in_main_tree(pane)
            && self.document_panes_in_main() == [pane]
    }

    /// Whether an anchor group remembers the anchorable `pane` as the place
    /// to restore into.
    pub(crate) fn is_awaiting_group(&self, pane: NodeId) -> bool {
        if !self
            .pane(pane)
            .is_some_and(|p| p.kind == ContentKind::Anchorable)
        {
            return false;
        }
        self.anchor_sides.iter().any(|side| {
            self.children(*side).iter().any(|group| {
                self.anchor_group(*group)
                    .and_then(|g| g.previous_container.as_ref())
                    .is_some_and(|p| p.container == pane)
            })
        })
    }

    /// Empty panes that garbage collection leaves in place.
    pub(crate) fn is_kept_empty_pane(&self, pane: NodeId) -> bool {
        self.is_reserved_document_area(pane) || self.is_awaiting_group(pane)
    }

    /// Apply the first rule that matches `id`. Returns whether the tree changed.
    fn collect_node(&mut self, id: NodeId) -> bool {
        let node = self.node_ref(id);
        let child_count = node.children.len();
        match &node.kind {
            NodeKind::Pane(_) if child_count == 0 => {
                if self.is_kept_empty_pane(id) {
                    return false;
                }
                debug!(pane = %id, "collecting empty pane");
                self.remove_attached(id);
                true
            }
            NodeKind::AnchorGroup(group) if child_count == 0 => {
                let remembered = group.previous_container.as_ref().map(|p| p.container);
                debug!(group = %id, "collecting empty anchor group");
                self.remove_attached(id);
                if let Some(pane) = remembered.filter(|p| self.is_attached(*p)) {
                    self.collect_chain(pane);
                }
                true
            }
            NodeKind::FloatingWindow(_) if child_count == 0 => {
                debug!(window = %id, "collecting empty floating window");
                self.remove_attached(id);
                true
            }
            NodeKind::Panel(_) if id == self.root_panel => {
                self.absorb_nested_root_panel()
            }
            NodeKind::Panel(_) if child_count == 0 => {
                debug!(panel = %id, "collecting empty panel");
                self.remove_attached(id);
                true
            }
            NodeKind::Panel(_) if child_count == 1 => {
                self.collapse_panel(id);
                true
            }
            _ => false,
        }
    }

    /// Replace a single-child panel by that child, moving absolute size
    /// hints down.
    fn collapse_panel(&mut self, panel: NodeId) {
        let Some(parent) = self.parent(panel) else {
            return;
        };
        let child = self.children(panel)[0];
        let wrapper_size = self.dock_size(panel).copied();

        self.detach(child);
        let (_, index) = self
            .detach(panel)
            .unwrap_or_else(|| panic!("panel {panel} lost its parent during collapse"));
        if let (Some(wrapper), Some(size)) = (wrapper_size, self.dock_size_mut(child)) {
            if wrapper.width.is_absolute() {
                size.width = wrapper.width;
            }
            if wrapper.height.is_absolute() {
                size.height = wrapper.height;
            }
        }
        self.attach(parent, index, child);
        self.destroy_subtree(panel);
        debug!(%panel, %child, %parent, "collapsed single-child panel");
    }

    /// The root panel is never collapsed. When it wraps exactly one panel
    /// it takes over that panel's orientation and children instead.
    fn absorb_nested_root_panel(&mut self) -> bool {
        let root_panel = self.root_panel;
        let children = self.children(root_panel);
        if children.len() != 1 {
            return false;
        }
        let inner = children[0];
        let Some(orientation) = self.panel(inner).map(|p| p.orientation) else {
            return false;
        };
        self.detach(inner);
        self.set_panel_orientation(root_panel, orientation);
        let grandchildren = self.children(inner).to_vec();
        for (i, child) in grandchildren.into_iter().enumerate() {
            self.detach(child);
            self.attach(root_panel, i, child);
        }
        self.destroy_subtree(inner);
        debug!(%root_panel, %inner, ?orientation, "root panel absorbed nested panel");
        true
    }

    /// Give `target`'s absolute hints to a fresh wrapper and reset the
    /// target to a weighted share. Used whenever a panel is interposed.
    pub(crate) fn hand_size_to_wrapper(&mut self, target: NodeId, wrapper: NodeId) {
        let Some(size) = self.dock_size(target).copied() else {
            return;
        };
        if let Some(wrapper_size) = self.dock_size_mut(wrapper) {
            if size.width.is_absolute() {
                wrapper_size.width = size.width;
            }
            if size.height.is_absolute() {
                wrapper_size.height = size.height;
            }
        }
        if let Some(target_size) = self.dock_size_mut(target) {
            if size.width.is_absolute() {
                target_size.width = GridLength::Star(1.0);
            }
            if size.height.is_absolute() {
                target_size.height = GridLength::Star(1.0);
            }
        }
    }

    /// Orientation of the panel `id`, if it is one.
    pub fn panel_orientation(&self, id: NodeId) -> Option<Orientation> {
        self.panel(id).map(|p| p.orientation)
    }
}
