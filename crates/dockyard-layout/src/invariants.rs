//! Structural checks over a whole layout.
//!
//! Every public mutation leaves the tree in a state where
//! [`check_invariants`] returns nothing. The `dockyard check` command and
//! the property tests rely on that.

use dockyard_common::NodeId;
use serde::Serialize;

use crate::tree::{LayoutTree, NodeKind};

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum InvariantViolation {
    #[error("{child} is listed under {parent} but points at {actual:?}")]
    ParentMismatch {
        parent: NodeId,
        child: NodeId,
        actual: Option<NodeId>,
    },

    #[error("{node} is not reachable from the root")]
    Orphan { node: NodeId },

    #[error("{parent} ({parent_kind}) cannot hold {child} ({child_kind})")]
    Misplaced {
        parent: NodeId,
        parent_kind: &'static str,
        child: NodeId,
        child_kind: &'static str,
    },

    #[error("{node} ({kind}) is empty and should have been collected")]
    Empty { node: NodeId, kind: &'static str },

    #[error("panel {panel} has a single child and should have been collapsed")]
    SingletonPanel { panel: NodeId },

    #[error("{node} is marked visible={actual} but its children say {expected}")]
    Visibility {
        node: NodeId,
        expected: bool,
        actual: bool,
    },

    #[error("active content {active:?} disagrees with IsActive flags on {flagged:?}")]
    ActiveMismatch {
        active: Option<NodeId>,
        flagged: Vec<NodeId>,
    },

    #[error("content {node} is visible={visible} but hidden={hidden}")]
    HiddenMismatch {
        node: NodeId,
        visible: bool,
        hidden: bool,
    },

    #[error("pane {pane} has {selected} selected items")]
    Selection { pane: NodeId, selected: usize },
}

/// Check every structural invariant. Orphans are listed first, then the
/// findings of a pre-order walk from the root.
pub fn check_invariants(tree: &LayoutTree) -> Vec<InvariantViolation> {
    let mut out = Vec::new();
    let reachable = tree.descendants(tree.root());

    for node in tree.nodes.values() {
        if !reachable.contains(&node.id) {
            out.push(InvariantViolation::Orphan { node: node.id });
        }
    }

    for &id in &reachable {
        let node = tree.node_ref(id);
        for &child in &node.children {
            let actual = tree.parent(child);
            if actual != Some(id) {
                out.push(InvariantViolation::ParentMismatch {
                    parent: id,
                    child,
                    actual,
                });
            }
            if let Some(child_kind) = tree.kind(child) {
                if !node.kind.can_contain(child_kind) {
                    out.push(InvariantViolation::Misplaced {
                        parent: id,
                        parent_kind: node.kind.name(),
                        child,
                        child_kind: child_kind.name(),
                    });
                }
            }
        }

        check_collectable(tree, id, &mut out);

        if matches!(node.kind, NodeKind::Content(_)) {
            let hidden = tree.is_hidden(id);
            if node.visible == hidden {
                out.push(InvariantViolation::HiddenMismatch {
                    node: id,
                    visible: node.visible,
                    hidden,
                });
            }
        } else {
            let expected = tree.evaluate_visibility(id);
            if expected != node.visible {
                out.push(InvariantViolation::Visibility {
                    node: id,
                    expected,
                    actual: node.visible,
                });
            }
        }

        if matches!(node.kind, NodeKind::Pane(_)) && !node.children.is_empty() {
            let selected = node
                .children
                .iter()
                .filter(|c| tree.content(**c).is_some_and(|d| d.is_selected))
                .count();
            if selected != 1 {
                out.push(InvariantViolation::Selection { pane: id, selected });
            }
        }
    }

    check_active(tree, &reachable, &mut out);
    out
}

/// Nodes garbage collection would have removed or collapsed.
fn check_collectable(tree: &LayoutTree, id: NodeId, out: &mut Vec<InvariantViolation>) {
    let node = tree.node_ref(id);
    let count = node.children.len();
    match &node.kind {
        NodeKind::Pane(_) | NodeKind::AnchorGroup(_) | NodeKind::FloatingWindow(_)
            if count == 0 && !tree.is_kept_empty_pane(id) =>
        {
            out.push(InvariantViolation::Empty {
                node: id,
                kind: node.kind.name(),
            });
        }
        NodeKind::Panel(_) if id == tree.root_panel() => {
            let nested = count == 1 && tree.panel(node.children[0]).is_some();
            if nested {
                out.push(InvariantViolation::SingletonPanel { panel: id });
            }
        }
        NodeKind::Panel(_) if count == 0 => {
            out.push(InvariantViolation::Empty {
                node: id,
                kind: node.kind.name(),
            });
        }
        NodeKind::Panel(_) if count == 1 => {
            out.push(InvariantViolation::SingletonPanel { panel: id });
        }
        _ => {}
    }
}

fn check_active(tree: &LayoutTree, reachable: &[NodeId], out: &mut Vec<InvariantViolation>) {
    let flagged: Vec<NodeId> = reachable
        .iter()
        .copied()
        .filter(|id| tree.content(*id).is_some_and(|c| c.is_active))
        .collect();
    let active = tree.active_content();
    let consistent = match active {
        Some(id) => flagged == [id] && reachable.contains(&id),
        None => flagged.is_empty(),
    };
    if !consistent {
        out.push(InvariantViolation::ActiveMismatch { active, flagged });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DockingOptions;
    use crate::test_support::workbench;
    use crate::tree::ContentKind;

    #[test]
    fn fresh_layouts_are_clean() {
        assert!(check_invariants(&LayoutTree::new()).is_empty());
        let wb = workbench();
        assert!(check_invariants(&wb.tree).is_empty());
    }

    #[test]
    fn clean_after_operations() {
        let mut wb = workbench();
        wb.tree.activate(wb.main_rs);
        wb.tree.float(wb.explorer);
        wb.tree.toggle_auto_hide(wb.tools);
        wb.tree.hide(wb.outline);
        wb.tree.close(wb.lib_rs);
        assert_eq!(check_invariants(&wb.tree), vec![]);
    }

    #[test]
    fn detached_nodes_are_orphans() {
        let mut tree = LayoutTree::new();
        let pane = tree.new_pane(ContentKind::Document);
        let violations = check_invariants(&tree);
        assert_eq!(violations, vec![InvariantViolation::Orphan { node: pane }]);
    }

    #[test]
    fn reserved_document_area_is_not_empty_garbage() {
        let options = DockingOptions {
            keep_document_area: true,
            ..DockingOptions::default()
        };
        let mut wb = crate::test_support::workbench_with(LayoutTree::with_options(options));
        wb.tree.close(wb.main_rs);
        wb.tree.close(wb.lib_rs);
        assert!(wb.tree.contains(wb.documents));
        assert!(check_invariants(&wb.tree).is_empty());
    }

    #[test]
    fn pane_awaiting_its_group_is_not_empty_garbage() {
        let mut wb = workbench();
        wb.tree.toggle_auto_hide(wb.tools);
        assert!(wb.tree.contains(wb.tools));
        assert!(wb.tree.children(wb.tools).is_empty());
        assert!(check_invariants(&wb.tree).is_empty());
    }

    #[test]
    fn docked_content_flagged_invisible_is_reported() {
        let mut wb = workbench();
        wb.tree.node_mut(wb.outline).visible = false;
        wb.tree.refresh_all_visibility();
        assert_eq!(
            check_invariants(&wb.tree),
            vec![InvariantViolation::HiddenMismatch {
                node: wb.outline,
                visible: false,
                hidden: false,
            }]
        );
    }

    #[test]
    fn stray_active_flag_is_reported() {
        let mut wb = workbench();
        wb.tree.content_mut(wb.lib_rs).unwrap().is_active = true;
        assert_eq!(
            check_invariants(&wb.tree),
            vec![InvariantViolation::ActiveMismatch {
                active: None,
                flagged: vec![wb.lib_rs],
            }]
        );
    }

    #[test]
    fn violations_display_the_node() {
        let v = InvariantViolation::SingletonPanel { panel: NodeId(7) };
        assert_eq!(
            v.to_string(),
            "panel #7 has a single child and should have been collapsed"
        );
    }
}
