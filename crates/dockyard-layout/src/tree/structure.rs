//! Structural primitives and the public insert/remove/replace/move API.
//!
//! `attach` and `detach` are the only places that rewrite parent/child
//! links. They queue notifications and propagate visibility but never
//! collect garbage, so multi-step mutations can pass through transient
//! states. The public operations collect garbage once they are done.

use dockyard_common::{LayoutEvent, NodeId};
use tracing::debug;

use super::types::NodeKind;
use super::LayoutTree;

impl LayoutTree {
    /// Link a detached `child` under `parent` at `index` (clamped).
    ///
    /// # Panics
    ///
    /// Panics on invariant violations: unknown nodes, inserting the root,
    /// a child that already has a parent, a cycle, a kind the parent cannot
    /// contain, or a second root for a floating window.
    pub(crate) fn attach(&mut self, parent: NodeId, index: usize, child: NodeId) {
        assert!(child != self.root, "the root cannot be inserted anywhere");
        assert!(
            self.node_ref(child).parent.is_none(),
            "node {child} already has a parent"
        );
        assert!(
            !self.is_ancestor_or_self(child, parent),
            "inserting {child} under {parent} would create a cycle"
        );
        let parent_node = self.node_ref(parent);
        let child_kind = &self.node_ref(child).kind;
        assert!(
            parent_node.kind.can_contain(child_kind),
            "{} {parent} cannot contain {} {child}",
            parent_node.kind.name(),
            child_kind.name()
        );
        if matches!(parent_node.kind, NodeKind::FloatingWindow(_)) {
            assert!(
                parent_node.children.is_empty(),
                "floating window {parent} already has a root"
            );
        }

        let node = self.node_mut(parent);
        let index = index.min(node.children.len());
        node.children.insert(index, child);
        self.node_mut(child).parent = Some(parent);

        self.emit(LayoutEvent::ChildrenChanged(parent));
        self.emit(LayoutEvent::ParentChanged {
            node: child,
            parent: Some(parent),
        });

        if matches!(self.node_ref(parent).kind, NodeKind::Pane(_)) {
            self.adopt_selection(parent, child);
        }
        self.propagate_visibility(parent);
    }

    /// Unlink `child` from its parent. Returns the former parent and index.
    pub(crate) fn detach(&mut self, child: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.node_ref(child).parent?;
        let siblings = &mut self.node_mut(parent).children;
        let index = siblings
            .iter()
            .position(|c| *c == child)
            .unwrap_or_else(|| panic!("node {child} is missing from its parent {parent}"));
        siblings.remove(index);
        self.node_mut(child).parent = None;

        self.emit(LayoutEvent::ChildrenChanged(parent));
        self.emit(LayoutEvent::ParentChanged {
            node: child,
            parent: None,
        });

        if matches!(self.node_ref(parent).kind, NodeKind::Pane(_)) {
            self.release_selection(parent, child, index);
        }
        self.propagate_visibility(parent);
        Some((parent, index))
    }

    /// Remove a detached subtree from the arena.
    pub(crate) fn destroy_subtree(&mut self, id: NodeId) {
        debug_assert!(self.node_ref(id).parent.is_none());
        for node in self.descendants(id) {
            if self.active_content == Some(node) {
                self.active_content = None;
                self.emit(LayoutEvent::ActiveContentChanged {
                    previous: Some(node),
                    current: None,
                });
            }
            if let Some(removed) = self.nodes.remove(&node) {
                if matches!(removed.kind, NodeKind::FloatingWindow(_)) {
                    self.emit(LayoutEvent::FloatingWindowRemoved(node));
                }
            }
        }
    }

    /// Detach and destroy an attached node.
    pub(crate) fn remove_attached(&mut self, id: NodeId) {
        self.detach(id);
        self.destroy_subtree(id);
    }

    // =========================================================================
    // PUBLIC STRUCTURAL OPERATIONS
    // =========================================================================

    /// Insert `child` under `parent` at `index`, detaching it from any prior
    /// parent first. The index is clamped to the child count after the
    /// detach. The former parent is garbage collected afterwards.
    pub fn insert_child_at(&mut self, parent: NodeId, index: usize, child: NodeId) {
        assert!(
            !self.is_ancestor_or_self(child, parent),
            "inserting {child} under {parent} would create a cycle"
        );
        let previous = self.detach(child);
        self.attach(parent, index, child);
        debug!(%parent, %child, index, "inserted child");

        if let Some((old_parent, _)) = previous {
            if old_parent != parent && self.contains(old_parent) {
                self.collect_garbage_from(old_parent);
            }
        }
    }

    /// Remove `child` from `parent` and discard its subtree, then collect
    /// garbage from `parent` upward.
    ///
    /// # Panics
    ///
    /// Panics if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        assert!(
            self.parent(child) == Some(parent),
            "node {child} is not a child of {parent}"
        );
        self.remove_attached(child);
        debug!(%parent, %child, "removed child");
        self.collect_garbage_from(parent);
    }

    /// Put `new` where `old` is, discarding `old` and its subtree. `new` is
    /// detached from its prior parent if it has one.
    ///
    /// # Panics
    ///
    /// Panics if `old` is not a child of `parent`, or if `new` is an
    /// ancestor of `parent`.
    pub fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) {
        assert!(
            self.parent(old) == Some(parent),
            "node {old} is not a child of {parent}"
        );
        assert!(old != new, "cannot replace {old} with itself");
        assert!(
            !self.is_ancestor_or_self(new, parent),
            "replacing with {new} under {parent} would create a cycle"
        );

        let previous = self.detach(new);
        let (_, index) = self
            .detach(old)
            .unwrap_or_else(|| panic!("node {old} lost its parent during replace"));
        self.attach(parent, index, new);
        self.destroy_subtree(old);
        debug!(%parent, %old, %new, index, "replaced child");

        if let Some((old_parent, _)) = previous {
            if self.contains(old_parent) {
                self.collect_garbage_from(old_parent);
            }
        }
        self.collect_garbage_from(new);
    }

    /// Reorder a child of `parent` without reparenting it. `new_index` is
    /// clamped to the last position.
    ///
    /// # Panics
    ///
    /// Panics if `old_index` is out of bounds.
    pub fn move_child(&mut self, parent: NodeId, old_index: usize, new_index: usize) {
        let len = self.children(parent).len();
        assert!(
            old_index < len,
            "index {old_index} out of bounds for {parent} with {len} children"
        );
        let new_index = new_index.min(len - 1);
        if old_index == new_index {
            return;
        }
        let children = &mut self.node_mut(parent).children;
        let child = children.remove(old_index);
        children.insert(new_index, child);
        self.emit(LayoutEvent::ChildrenChanged(parent));
    }
}
