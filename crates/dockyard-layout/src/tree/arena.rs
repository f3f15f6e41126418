//! The `LayoutTree` arena: construction, id allocation and accessors.

use std::collections::HashMap;

use dockyard_common::{EventQueue, LayoutEvent, NodeId, Orientation, Side};

use super::types::*;
use crate::options::DockingOptions;

/// The docking arrangement: one root holding the main panel, four anchor
/// sides and any number of floating windows.
///
/// Nodes live in an arena keyed by [`NodeId`]. Every structural change goes
/// through the tree so notifications are queued, visibility is propagated
/// and garbage is collected.
#[derive(Debug)]
pub struct LayoutTree {
    pub(crate) nodes: HashMap<NodeId, LayoutNode>,
    pub(crate) root: NodeId,
    pub(crate) root_panel: NodeId,
    pub(crate) anchor_sides: [NodeId; 4],
    pub(crate) active_content: Option<NodeId>,
    pub(crate) next_id: u64,
    pub(crate) options: DockingOptions,
    pub(crate) events: EventQueue,
    /// Set while an activation runs; a nested activation is a no-op.
    pub(crate) activation_in_progress: bool,
}

impl LayoutTree {
    /// Create an empty layout with default options.
    pub fn new() -> Self {
        Self::with_options(DockingOptions::default())
    }

    pub fn with_options(options: DockingOptions) -> Self {
        Self::with_id_floor(options, 1)
    }

    /// Create an empty layout whose structural nodes take ids starting at
    /// `floor`. Used when persisted ids below `floor` must stay available.
    pub(crate) fn with_id_floor(options: DockingOptions, floor: u64) -> Self {
        let mut tree = Self {
            nodes: HashMap::new(),
            root: NodeId(0),
            root_panel: NodeId(0),
            anchor_sides: [NodeId(0); 4],
            active_content: None,
            next_id: floor.max(1),
            options,
            events: EventQueue::new(),
            activation_in_progress: false,
        };

        tree.root = tree.insert_node(NodeKind::Root);
        tree.root_panel = tree.insert_node(NodeKind::Panel(PanelData {
            orientation: Orientation::Horizontal,
            size: DockSize::default(),
        }));
        tree.attach(tree.root, 0, tree.root_panel);
        for side in Side::ALL {
            let id = tree.insert_node(NodeKind::AnchorSide(side));
            tree.anchor_sides[side.index()] = id;
            tree.attach(tree.root, side.index() + 1, id);
        }
        tree.events.clear();
        tree
    }

    // -- Allocation --

    fn alloc_id(&mut self) -> NodeId {
        loop {
            let id = NodeId(self.next_id);
            self.next_id = self
                .next_id
                .checked_add(1)
                .unwrap_or_else(|| panic!("node id space exhausted"));
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }

    /// Add a detached node of `kind` to the arena.
    pub(crate) fn insert_node(&mut self, kind: NodeKind) -> NodeId {
        let id = self.alloc_id();
        self.insert_node_with_id(id, kind)
    }

    /// Add a detached node under a caller-chosen id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is zero or already in use.
    pub(crate) fn insert_node_with_id(&mut self, id: NodeId, kind: NodeKind) -> NodeId {
        assert!(id.0 != 0, "node id 0 is reserved");
        assert!(!self.nodes.contains_key(&id), "node id {id} is already in use");
        let visible = matches!(kind, NodeKind::Root | NodeKind::Content(_));
        self.nodes.insert(
            id,
            LayoutNode {
                id,
                parent: None,
                children: Vec::new(),
                visible,
                kind,
            },
        );
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        id
    }

    // -- Detached node construction --

    /// Create a detached panel. It must be inserted before the surrounding
    /// mutation ends, or dropped with [`discard`](Self::discard).
    pub fn new_panel(&mut self, orientation: Orientation) -> NodeId {
        self.insert_node(NodeKind::Panel(PanelData {
            orientation,
            size: DockSize::default(),
        }))
    }

    /// Create a detached, empty pane.
    pub fn new_pane(&mut self, kind: ContentKind) -> NodeId {
        self.insert_node(NodeKind::Pane(PaneData {
            kind,
            size: DockSize::default(),
        }))
    }

    pub fn new_document(&mut self, title: impl Into<String>) -> NodeId {
        self.new_content(ContentData::document(title))
    }

    pub fn new_anchorable(&mut self, title: impl Into<String>) -> NodeId {
        self.new_content(ContentData::anchorable(title))
    }

    pub fn new_content(&mut self, data: ContentData) -> NodeId {
        self.insert_node(NodeKind::Content(data))
    }

    /// Drop a detached subtree that was never inserted.
    ///
    /// # Panics
    ///
    /// Panics if `id` is the root or still has a parent.
    pub fn discard(&mut self, id: NodeId) {
        assert!(id != self.root, "cannot discard the root");
        assert!(
            self.node(id).is_some_and(|n| n.parent.is_none()),
            "only detached nodes can be discarded, {id} is attached or missing"
        );
        self.destroy_subtree(id);
    }

    // -- Accessors --

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The top-level panel of the main window. Never collected.
    pub fn root_panel(&self) -> NodeId {
        self.root_panel
    }

    pub fn anchor_side(&self, side: Side) -> NodeId {
        self.anchor_sides[side.index()]
    }

    /// Floating windows in z-order, bottom first.
    pub fn floating_windows(&self) -> Vec<NodeId> {
        self.children(self.root)
            .iter()
            .copied()
            .filter(|id| matches!(self.kind(*id), Some(NodeKind::FloatingWindow(_))))
            .collect()
    }

    pub fn node(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(&id).map(|n| &n.kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Children of `id` in order; empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.visible)
    }

    pub fn content(&self, id: NodeId) -> Option<&ContentData> {
        match self.kind(id) {
            Some(NodeKind::Content(c)) => Some(c),
            _ => None,
        }
    }

    /// Mutable access to descriptive content fields (title, flags, sizes).
    /// Selection, activation and visibility go through the tree operations.
    pub fn content_mut(&mut self, id: NodeId) -> Option<&mut ContentData> {
        match self.nodes.get_mut(&id).map(|n| &mut n.kind) {
            Some(NodeKind::Content(c)) => Some(c),
            _ => None,
        }
    }

    pub fn pane(&self, id: NodeId) -> Option<&PaneData> {
        match self.kind(id) {
            Some(NodeKind::Pane(p)) => Some(p),
            _ => None,
        }
    }

    pub fn panel(&self, id: NodeId) -> Option<&PanelData> {
        match self.kind(id) {
            Some(NodeKind::Panel(p)) => Some(p),
            _ => None,
        }
    }

    pub fn floating(&self, id: NodeId) -> Option<&FloatingData> {
        match self.kind(id) {
            Some(NodeKind::FloatingWindow(f)) => Some(f),
            _ => None,
        }
    }

    pub fn floating_mut(&mut self, id: NodeId) -> Option<&mut FloatingData> {
        match self.nodes.get_mut(&id).map(|n| &mut n.kind) {
            Some(NodeKind::FloatingWindow(f)) => Some(f),
            _ => None,
        }
    }

    pub fn anchor_group(&self, id: NodeId) -> Option<&AnchorGroupData> {
        match self.kind(id) {
            Some(NodeKind::AnchorGroup(g)) => Some(g),
            _ => None,
        }
    }

    pub fn dock_size(&self, id: NodeId) -> Option<&DockSize> {
        self.kind(id).and_then(NodeKind::dock_size)
    }

    pub fn dock_size_mut(&mut self, id: NodeId) -> Option<&mut DockSize> {
        self.nodes
            .get_mut(&id)
            .and_then(|n| n.kind.dock_size_mut())
    }

    pub fn set_panel_orientation(&mut self, panel: NodeId, orientation: Orientation) {
        if let Some(NodeKind::Panel(p)) = self.nodes.get_mut(&panel).map(|n| &mut n.kind) {
            p.orientation = orientation;
        }
    }

    pub fn active_content(&self) -> Option<NodeId> {
        self.active_content
    }

    pub fn options(&self) -> &DockingOptions {
        &self.options
    }

    /// Replace the options. Toggling `keep_document_area` releases or
    /// reserves an empty document area right away.
    pub fn set_options(&mut self, options: DockingOptions) {
        self.options = options;
        self.refresh_all_visibility();
        self.collect_garbage();
    }

    /// Take every queued notification in emission order.
    pub fn drain_events(&mut self) -> Vec<LayoutEvent> {
        self.events.drain()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn emit(&mut self, event: LayoutEvent) {
        self.events.push(event);
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut LayoutNode {
        self.nodes
            .get_mut(&id)
            .unwrap_or_else(|| panic!("node {id} is not in the layout tree"))
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> &LayoutNode {
        self.nodes
            .get(&id)
            .unwrap_or_else(|| panic!("node {id} is not in the layout tree"))
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}
