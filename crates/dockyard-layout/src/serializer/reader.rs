//! Element tree to layout.

use std::collections::HashSet;

use dockyard_common::{LayoutFormatError, NodeId, Side};
use tracing::{debug, warn};

use super::element::Element;
use super::registry::{builder_for, carries_id, is_known_tag, parse_node_id, Built};
use crate::options::DockingOptions;
use crate::tree::{LayoutTree, NodeKind};

/// Rebuild a layout from its `Layout` element.
pub fn build_layout(root: &Element, options: DockingOptions) -> Result<LayoutTree, LayoutFormatError> {
    if root.tag != "Layout" {
        return Err(if is_known_tag(&root.tag) {
            LayoutFormatError::MissingRoot
        } else {
            LayoutFormatError::UnknownTag {
                tag: root.tag.clone(),
            }
        });
    }

    let mut ids = IdScan::default();
    ids.scan(root)?;
    let mut tree = LayoutTree::with_id_floor(options, ids.max.saturating_add(1));

    let mut seen_panel = false;
    for child in &root.children {
        match child.tag.as_str() {
            "Panel" if !seen_panel => {
                seen_panel = true;
                read_root_panel(&mut tree, child)?;
            }
            "AnchorSide" => {
                let side = child.parsed_required("Side", Side::parse)?;
                let parent = tree.anchor_side(side);
                for group in &child.children {
                    read_node(&mut tree, parent, child, group)?;
                }
            }
            "FloatingWindows" => {
                let root_id = tree.root();
                for window in &child.children {
                    if window.tag != "FloatingWindow" {
                        return Err(unexpected(child, window));
                    }
                    read_node(&mut tree, root_id, root, window)?;
                }
            }
            "Hidden" => {
                let root_id = tree.root();
                for item in &child.children {
                    if !matches!(item.tag.as_str(), "Document" | "Anchorable") {
                        return Err(unexpected(child, item));
                    }
                    let id = read_node(&mut tree, root_id, child, item)?;
                    tree.node_mut(id).visible = false;
                }
            }
            _ => return Err(unexpected(root, child)),
        }
    }

    finish(&mut tree);
    Ok(tree)
}

/// The persisted root panel describes the existing root panel of the tree.
fn read_root_panel(tree: &mut LayoutTree, element: &Element) -> Result<(), LayoutFormatError> {
    let built = build(&Element::new("Layout"), element)?;
    let root_panel = tree.root_panel();
    if let NodeKind::Panel(data) = built.kind {
        tree.node_mut(root_panel).kind = NodeKind::Panel(data);
    }
    for child in &element.children {
        read_node(tree, root_panel, element, child)?;
    }
    Ok(())
}

fn read_node(
    tree: &mut LayoutTree,
    parent: NodeId,
    parent_element: &Element,
    element: &Element,
) -> Result<NodeId, LayoutFormatError> {
    let built = build(parent_element, element)?;
    let allowed = tree
        .kind(parent)
        .is_some_and(|kind| kind.can_contain(&built.kind));
    if !allowed {
        return Err(unexpected(parent_element, element));
    }
    if tree.floating(parent).is_some() && !tree.children(parent).is_empty() {
        return Err(unexpected(parent_element, element));
    }

    let id = match built.id {
        Some(id) => tree.insert_node_with_id(id, built.kind),
        None => tree.insert_node(built.kind),
    };
    if !built.visible {
        tree.node_mut(id).visible = false;
    }
    tree.attach(parent, usize::MAX, id);

    let mut children = Vec::with_capacity(element.children.len());
    for child in &element.children {
        children.push(read_node(tree, id, element, child)?);
    }

    if tree.pane(id).is_some() {
        restore_selection(tree, id, element, &children)?;
    }
    Ok(id)
}

/// Attaching re-runs the selection bookkeeping; put back what was saved.
fn restore_selection(
    tree: &mut LayoutTree,
    pane: NodeId,
    element: &Element,
    children: &[NodeId],
) -> Result<(), LayoutFormatError> {
    let flagged = element
        .children
        .iter()
        .position(|c| c.get("IsSelected").is_some_and(|v| v.eq_ignore_ascii_case("true")));
    let indexed = element.parsed("SelectedIndex", |s| s.trim().parse::<usize>().ok())?;
    match flagged.or(indexed).and_then(|i| children.get(i)) {
        Some(&selected) => {
            tree.set_selected_internal(pane, Some(selected));
        }
        None => tree.ensure_selection(pane),
    }
    Ok(())
}

/// Content saved invisible inside a container joins the hidden collection.
fn park_invisible_contents(tree: &mut LayoutTree) {
    let parked: Vec<NodeId> = tree
        .descendants(tree.root())
        .into_iter()
        .filter(|id| {
            tree.content(*id).is_some() && !tree.is_hidden(*id) && !tree.is_visible(*id)
        })
        .collect();
    let root = tree.root();
    for id in parked {
        tree.remember_origin(id);
        tree.detach(id);
        tree.attach(root, usize::MAX, id);
        debug!(content = %id, "parked invisible content as hidden");
    }
}

/// Post-pass once every node is in place.
fn finish(tree: &mut LayoutTree) {
    park_invisible_contents(tree);
    tree.refresh_all_visibility();
    tree.collect_garbage();

    let contents: Vec<NodeId> = tree
        .descendants(tree.root())
        .into_iter()
        .filter(|id| tree.content(*id).is_some())
        .collect();

    for id in &contents {
        let Some(previous) = tree.content(*id).and_then(|c| c.previous_container) else {
            continue;
        };
        if !resolves(tree, previous.container) {
            warn!(content = %id, container = %previous.container, "dropping stale previous container");
            if let Some(data) = tree.content_mut(*id) {
                data.previous_container = None;
            }
        }
    }
    let groups: Vec<NodeId> = tree
        .descendants(tree.root())
        .into_iter()
        .filter(|id| tree.anchor_group(*id).is_some())
        .collect();
    for id in groups {
        let Some(previous) = tree.anchor_group(id).and_then(|g| g.previous_container) else {
            continue;
        };
        if !resolves(tree, previous.container) {
            warn!(group = %id, container = %previous.container, "dropping stale previous container");
            if let NodeKind::AnchorGroup(group) = &mut tree.node_mut(id).kind {
                group.previous_container = None;
            }
        }
    }

    for id in contents {
        let flagged = tree.content(id).is_some_and(|c| c.is_active);
        if !flagged {
            continue;
        }
        if tree.active_content.is_none() && !tree.is_hidden(id) {
            tree.active_content = Some(id);
        } else if let Some(data) = tree.content_mut(id) {
            data.is_active = false;
        }
    }

    tree.events.clear();
    debug!(
        nodes = tree.node_count(),
        active = ?tree.active_content(),
        "layout rebuilt"
    );
}

fn resolves(tree: &LayoutTree, container: NodeId) -> bool {
    tree.is_attached(container) && tree.kind(container).is_some_and(NodeKind::holds_content)
}

fn build(parent: &Element, element: &Element) -> Result<Built, LayoutFormatError> {
    match builder_for(&element.tag) {
        Some(builder) => builder(element),
        None => Err(unexpected(parent, element)),
    }
}

fn unexpected(parent: &Element, child: &Element) -> LayoutFormatError {
    if !is_known_tag(&child.tag) {
        return LayoutFormatError::UnknownTag {
            tag: child.tag.clone(),
        };
    }
    LayoutFormatError::UnexpectedChild {
        parent: parent.tag.clone(),
        child: child.tag.clone(),
    }
}

// =============================================================================
// ID PRE-SCAN
// =============================================================================

/// Persisted ids, checked for duplicates before any node is created so fresh
/// ids can be allocated above all of them.
#[derive(Default)]
struct IdScan {
    seen: HashSet<u64>,
    max: u64,
}

impl IdScan {
    fn scan(&mut self, element: &Element) -> Result<(), LayoutFormatError> {
        if carries_id(&element.tag) {
            if let Some(id) = element.parsed("Id", parse_node_id)? {
                if !self.seen.insert(id.get()) {
                    return Err(LayoutFormatError::DuplicateId {
                        tag: element.tag.clone(),
                        id: id.get(),
                    });
                }
                self.max = self.max.max(id.get());
            }
        }
        if let Some(id) = element.parsed("PreviousContainerId", parse_node_id)? {
            self.max = self.max.max(id.get());
        }
        for child in &element.children {
            self.scan(child)?;
        }
        Ok(())
    }
}
