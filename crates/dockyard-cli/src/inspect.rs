//! Human-readable renderings of a layout for `dockyard inspect`.

use std::fmt::Write;

use dockyard_common::{NodeId, Rect};
use dockyard_layout::{DockingManager, LayoutSnapshot, LayoutTree, NodeKind};

/// An indented outline of the whole tree, two spaces per level. Empty
/// anchor sides are left out and hidden content sits directly under
/// `Layout`.
pub fn outline(tree: &LayoutTree) -> String {
    let mut out = String::new();
    write_node(tree, tree.root(), 0, &mut out);
    out
}

fn write_node(tree: &LayoutTree, id: NodeId, depth: usize, out: &mut String) {
    let Some(kind) = tree.kind(id) else {
        return;
    };
    if matches!(kind, NodeKind::AnchorSide(_)) && tree.children(id).is_empty() {
        return;
    }
    let _ = writeln!(out, "{:indent$}{}", "", describe(tree, id, kind), indent = depth * 2);
    for child in tree.children(id) {
        write_node(tree, *child, depth + 1, out);
    }
}

fn describe(tree: &LayoutTree, id: NodeId, kind: &NodeKind) -> String {
    let mut line = match kind {
        NodeKind::Root => "Layout".to_string(),
        NodeKind::Panel(panel) => format!("Panel {}", panel.orientation),
        NodeKind::Pane(_) | NodeKind::AnchorGroup(_) => format!("{} {id}", kind.name()),
        NodeKind::Content(content) => {
            let mut line = format!("{} \"{}\" [{}]", kind.name(), content.title, content.content_id);
            if content.is_selected {
                line.push_str(" selected");
            }
            if content.is_active {
                line.push_str(" active");
            }
            line
        }
        NodeKind::FloatingWindow(window) => {
            format!("FloatingWindow {:?} {}", window.kind, rect(window.bounds))
        }
        NodeKind::AnchorSide(side) => format!("AnchorSide {side}"),
    };
    if !matches!(kind, NodeKind::Root | NodeKind::AnchorSide(_)) && !tree.is_visible(id) {
        line.push_str(" hidden");
    }
    line
}

/// Rectangles of every visible panel and pane, per host.
pub fn geometry(manager: &DockingManager) -> String {
    let tree = manager.tree();
    let mut out = String::new();
    let _ = writeln!(out, "main {}", rect(manager.main_bounds()));
    write_snapshot(tree, &manager.compute_layout(), &mut out);
    for window in tree.floating_windows() {
        let Some(snapshot) = manager.compute_window_layout(window) else {
            continue;
        };
        if snapshot.is_empty() {
            continue;
        }
        let _ = writeln!(out, "window {window}");
        write_snapshot(tree, &snapshot, &mut out);
    }
    out
}

fn write_snapshot(tree: &LayoutTree, snapshot: &LayoutSnapshot, out: &mut String) {
    for entry in &snapshot.entries {
        let name = tree.kind(entry.node).map_or("?", NodeKind::name);
        let _ = writeln!(
            out,
            "{:indent$}{name} {} {}",
            "",
            entry.node,
            rect(entry.rect),
            indent = entry.depth * 2
        );
    }
}

fn rect(r: Rect) -> String {
    format!("{},{} {}x{}", r.x, r.y, r.width, r.height)
}
