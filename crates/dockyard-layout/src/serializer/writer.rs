//! Layout to element tree.

use chrono::SecondsFormat;
use dockyard_common::{NodeId, Side};

use super::element::{format_bool, Element};
use super::registry::content_kind_name;
use crate::tree::{
    ContentData, ContentKind, DockSize, LayoutTree, NodeKind, PreviousContainer,
    DEFAULT_MIN_AUTO_HIDE_SIZE, DEFAULT_MIN_DOCK_SIZE,
};

/// Build the `Layout` element for `tree`.
pub fn layout_element(tree: &LayoutTree) -> Element {
    let mut layout = Element::new("Layout");
    layout.push(node_element(tree, tree.root_panel()));

    for side in Side::ALL {
        let mut element = Element::new("AnchorSide");
        element.set("Side", side.as_str());
        for group in tree.children(tree.anchor_side(side)) {
            element.push(node_element(tree, *group));
        }
        layout.push(element);
    }

    let mut windows = Element::new("FloatingWindows");
    for window in tree.floating_windows() {
        windows.push(node_element(tree, window));
    }
    layout.push(windows);

    let hidden = tree.hidden_contents();
    if !hidden.is_empty() {
        let mut element = Element::new("Hidden");
        for content in hidden {
            element.push(node_element(tree, content));
        }
        layout.push(element);
    }
    layout
}

/// Pre-order walk below `id`.
fn node_element(tree: &LayoutTree, id: NodeId) -> Element {
    let node = tree.node_ref(id);
    let mut element = Element::new(node.kind.name());

    match &node.kind {
        NodeKind::Panel(panel) => {
            element.set("Orientation", panel.orientation.as_str());
            write_size(&mut element, &panel.size);
        }
        NodeKind::Pane(pane) => {
            element.set("Id", id.get());
            if let Some(index) = tree.selected_index(id) {
                element.set("SelectedIndex", index);
            }
            write_size(&mut element, &pane.size);
        }
        NodeKind::Content(content) => {
            write_content(tree, &mut element, content, node.visible);
        }
        NodeKind::FloatingWindow(window) => {
            element.set("Kind", content_kind_name(window.kind));
            element.set("Left", window.bounds.x);
            element.set("Top", window.bounds.y);
            element.set("Width", window.bounds.width);
            element.set("Height", window.bounds.height);
            if window.is_maximized {
                element.set("IsMaximized", format_bool(true));
            }
        }
        NodeKind::AnchorGroup(group) => {
            element.set("Id", id.get());
            write_previous(tree, &mut element, group.previous_container);
        }
        NodeKind::Root | NodeKind::AnchorSide(_) => {}
    }

    for child in &node.children {
        element.push(node_element(tree, *child));
    }
    element
}

fn write_size(element: &mut Element, size: &DockSize) {
    let defaults = DockSize::default();
    if size.width != defaults.width {
        element.set("DockWidth", size.width);
    }
    if size.height != defaults.height {
        element.set("DockHeight", size.height);
    }
    if size.min_width != DEFAULT_MIN_DOCK_SIZE {
        element.set("DockMinWidth", size.min_width);
    }
    if size.min_height != DEFAULT_MIN_DOCK_SIZE {
        element.set("DockMinHeight", size.min_height);
    }
}

/// Flags are written only where they differ from the defaults of the kind.
fn write_content(tree: &LayoutTree, element: &mut Element, data: &ContentData, visible: bool) {
    let defaults = ContentData::new(data.kind, "");

    element.set("ContentId", &data.content_id);
    element.set("Title", &data.title);
    if let Some(tip) = &data.tool_tip {
        element.set("ToolTip", tip);
    }
    if !visible {
        element.set("IsVisible", format_bool(false));
    }
    if data.is_selected {
        element.set("IsSelected", format_bool(true));
    }
    if data.is_active {
        element.set("IsActive", format_bool(true));
    }
    for (name, value, default) in [
        ("CanClose", data.can_close, defaults.can_close),
        ("CanFloat", data.can_float, defaults.can_float),
        ("CanHide", data.can_hide, defaults.can_hide),
        ("CanAutoHide", data.can_auto_hide, defaults.can_auto_hide),
    ] {
        if value != default {
            element.set(name, format_bool(value));
        }
    }
    if let Some(at) = data.last_activation {
        element.set(
            "LastActivation",
            at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        );
    }
    if let Some(bounds) = data.floating_bounds {
        element.set("FloatingLeft", bounds.x);
        element.set("FloatingTop", bounds.y);
        element.set("FloatingWidth", bounds.width);
        element.set("FloatingHeight", bounds.height);
    }
    if data.floating_maximized {
        element.set("IsMaximized", format_bool(true));
    }
    write_previous(tree, element, data.previous_container);

    if data.kind == ContentKind::Anchorable {
        let auto_hide = &data.auto_hide;
        if let Some(width) = auto_hide.width {
            element.set("AutoHideWidth", width);
        }
        if let Some(height) = auto_hide.height {
            element.set("AutoHideHeight", height);
        }
        if auto_hide.min_width != DEFAULT_MIN_AUTO_HIDE_SIZE {
            element.set("AutoHideMinWidth", auto_hide.min_width);
        }
        if auto_hide.min_height != DEFAULT_MIN_AUTO_HIDE_SIZE {
            element.set("AutoHideMinHeight", auto_hide.min_height);
        }
    }
}

/// References to containers that are no longer in the layout are dropped.
fn write_previous(tree: &LayoutTree, element: &mut Element, previous: Option<PreviousContainer>) {
    let Some(previous) = previous.filter(|p| tree.is_attached(p.container)) else {
        return;
    };
    element.set("PreviousContainerId", previous.container.get());
    element.set("PreviousContainerIndex", previous.index);
}
