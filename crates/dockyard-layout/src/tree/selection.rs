//! Per-pane selection bookkeeping.
//!
//! At most one child of a pane is selected. Attaching into a pane with no
//! selection selects the newcomer; removing the selected item hands the
//! selection to its neighbour.

use dockyard_common::{LayoutEvent, NodeId};

use super::types::NodeKind;
use super::LayoutTree;

impl LayoutTree {
    pub fn selected_content(&self, pane: NodeId) -> Option<NodeId> {
        self.children(pane)
            .iter()
            .copied()
            .find(|c| self.content(*c).is_some_and(|d| d.is_selected))
    }

    pub fn selected_index(&self, pane: NodeId) -> Option<usize> {
        self.children(pane)
            .iter()
            .position(|c| self.content(*c).is_some_and(|d| d.is_selected))
    }

    /// Make `selected` the only selected child of `pane`. Returns whether
    /// anything changed. Does not touch activation.
    pub(crate) fn set_selected_internal(&mut self, pane: NodeId, selected: Option<NodeId>) -> bool {
        let mut changed = false;
        for child in self.children(pane).to_vec() {
            let want = Some(child) == selected;
            if let Some(NodeKind::Content(c)) = self.nodes.get_mut(&child).map(|n| &mut n.kind) {
                if c.is_selected != want {
                    c.is_selected = want;
                    changed = true;
                }
            }
        }
        if changed {
            self.emit(LayoutEvent::SelectionChanged { pane, selected });
        }
        changed
    }

    /// Repair the selection of `pane` so exactly one child is selected when
    /// it has children, preferring a visible one.
    pub(crate) fn ensure_selection(&mut self, pane: NodeId) {
        let children = self.children(pane).to_vec();
        let selected: Vec<NodeId> = children
            .iter()
            .copied()
            .filter(|c| self.content(*c).is_some_and(|d| d.is_selected))
            .collect();
        match selected.as_slice() {
            [_] => {}
            [first, ..] => {
                let keep = *first;
                self.set_selected_internal(pane, Some(keep));
            }
            [] => {
                let pick = children
                    .iter()
                    .copied()
                    .find(|c| self.is_visible(*c))
                    .or_else(|| children.first().copied());
                if pick.is_some() {
                    self.set_selected_internal(pane, pick);
                }
            }
        }
    }

    /// Called after `child` joined `pane`.
    pub(crate) fn adopt_selection(&mut self, pane: NodeId, child: NodeId) {
        let others_selected = self
            .children(pane)
            .iter()
            .any(|c| *c != child && self.content(*c).is_some_and(|d| d.is_selected));
        if others_selected {
            if let Some(c) = self.content_mut(child) {
                c.is_selected = false;
            }
        } else {
            self.set_selected_internal(pane, Some(child));
        }
    }

    /// Called after `child` left `pane` from position `index`.
    pub(crate) fn release_selection(&mut self, pane: NodeId, child: NodeId, index: usize) {
        let was_selected = match self.content_mut(child) {
            Some(c) => std::mem::replace(&mut c.is_selected, false),
            None => false,
        };
        if !was_selected {
            return;
        }
        let remaining = self.children(pane);
        let next = if remaining.is_empty() {
            None
        } else {
            Some(remaining[index.min(remaining.len() - 1)])
        };
        if next.is_some() {
            self.set_selected_internal(pane, next);
        } else {
            self.emit(LayoutEvent::SelectionChanged {
                pane,
                selected: None,
            });
        }
    }
}
