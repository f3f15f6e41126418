use dockyard_common::{HostId, NodeId, Orientation, Point, Rect, Side};

use super::*;
use crate::layout::LayoutEngine;
use crate::options::DockingOptions;
use crate::test_support::{pane_with, workbench, workbench_with, Workbench};
use crate::tree::{ContentKind, LayoutTree};

fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 600.0)
}

/// Float a fresh item of `kind` out of the matching workbench pane.
fn drag_window(wb: &mut Workbench, kind: ContentKind) -> (NodeId, NodeId) {
    let (pane, content) = match kind {
        ContentKind::Document => (wb.documents, wb.tree.new_document("scratch.rs")),
        ContentKind::Anchorable => (wb.tools, wb.tree.new_anchorable("Terminal")),
    };
    wb.tree.insert_child_at(pane, usize::MAX, content);
    let window = wb.tree.float(content).unwrap();
    wb.tree.floating_mut(window).unwrap().bounds = Rect::new(2000.0, 0.0, 300.0, 200.0);
    (window, content)
}

fn pick(hit: &LayoutHitTester, host: HostId, point: Point) -> Option<DropArea> {
    let areas = hit.drop_areas(host);
    select_area(&areas, point).cloned()
}

fn area(kind: DropAreaKind, rect: Rect, depth: usize) -> DropArea {
    DropArea {
        kind,
        node: NodeId(7),
        rect,
        bounds: rect,
        depth,
    }
}

// =========================================================================
// SELECTION AND RESOLUTION
// =========================================================================

#[test]
fn deepest_area_wins() {
    let areas = vec![
        area(DropAreaKind::PaneEdge(Side::Left), Rect::new(0.0, 0.0, 10.0, 10.0), 5),
        area(DropAreaKind::PaneInterior, Rect::new(0.0, 0.0, 100.0, 100.0), 2),
    ];
    let selected = select_area(&areas, Point::new(5.0, 5.0)).unwrap();
    assert_eq!(selected.kind, DropAreaKind::PaneEdge(Side::Left));
    assert!(select_area(&areas, Point::new(500.0, 5.0)).is_none());
}

#[test]
fn ties_go_to_later_registration() {
    let areas = vec![
        area(DropAreaKind::PaneInterior, Rect::new(0.0, 0.0, 10.0, 10.0), 3),
        area(DropAreaKind::PanelGroupInterior, Rect::new(0.0, 0.0, 10.0, 10.0), 3),
    ];
    let selected = select_area(&areas, Point::new(1.0, 1.0)).unwrap();
    assert_eq!(selected.kind, DropAreaKind::PanelGroupInterior);
}

#[test]
fn previews_use_configured_fractions() {
    let options = DropTargetOptions::default();
    let bounds = Rect::new(0.0, 0.0, 300.0, 600.0);

    let edge = resolve_target(&area(DropAreaKind::PaneEdge(Side::Right), bounds, 1), &options);
    assert_eq!(edge.kind, DropTargetKind::PaneEdge(Side::Right));
    assert_eq!(edge.preview, Rect::new(150.0, 0.0, 150.0, 600.0));

    let root = resolve_target(&area(DropAreaKind::RootEdge(Side::Top), bounds, 1), &options);
    assert_eq!(root.preview, Rect::new(0.0, 0.0, 300.0, 200.0));

    let tab = resolve_target(
        &area(DropAreaKind::PaneTab { index: Some(2) }, bounds, 1),
        &options,
    );
    assert_eq!(tab.kind, DropTargetKind::PaneInterior);
    assert_eq!(tab.index, Some(2));
    assert_eq!(tab.preview, bounds);
}

// =========================================================================
// LAYOUT HIT TESTER
// =========================================================================

#[test]
fn anchorable_drag_sees_every_area_kind() {
    let mut wb = workbench();
    let (window, _) = drag_window(&mut wb, ContentKind::Anchorable);
    let hit = LayoutHitTester::build(
        &wb.tree,
        &LayoutEngine::default(),
        &DropTargetOptions::default(),
        viewport(),
        window,
    );
    assert_eq!(hit.hosts(), vec![HostId::Main]);

    let interior = pick(&hit, HostId::Main, Point::new(751.0, 300.0)).unwrap();
    assert_eq!(interior.kind, DropAreaKind::PaneInterior);
    assert_eq!(interior.node, wb.documents);

    let edge = pick(&hit, HostId::Main, Point::new(510.0, 300.0)).unwrap();
    assert_eq!(edge.kind, DropAreaKind::PaneEdge(Side::Left));

    let tab = pick(&hit, HostId::Main, Point::new(640.0, 10.0)).unwrap();
    assert_eq!(tab.kind, DropAreaKind::PaneTab { index: Some(1) });

    let strip = pick(&hit, HostId::Main, Point::new(900.0, 10.0)).unwrap();
    assert_eq!(strip.kind, DropAreaKind::PaneTab { index: None });

    let root = pick(&hit, HostId::Main, Point::new(10.0, 300.0)).unwrap();
    assert_eq!(root.kind, DropAreaKind::RootEdge(Side::Left));
    assert_eq!(root.node, wb.tree.root_panel());
}

#[test]
fn document_drag_only_sees_document_targets() {
    let mut wb = workbench();
    let (window, _) = drag_window(&mut wb, ContentKind::Document);
    let hit = LayoutHitTester::build(
        &wb.tree,
        &LayoutEngine::default(),
        &DropTargetOptions::default(),
        viewport(),
        window,
    );
    let areas = hit.drop_areas(HostId::Main);
    assert!(areas.iter().all(|a| a.node != wb.tools));
    assert!(areas
        .iter()
        .all(|a| !matches!(a.kind, DropAreaKind::RootEdge(_))));

    let over_tools = pick(&hit, HostId::Main, Point::new(10.0, 300.0)).unwrap();
    assert_eq!(over_tools.kind, DropAreaKind::PanelGroupInterior);
}

#[test]
fn empty_document_area_takes_document_drops() {
    let options = DockingOptions {
        keep_document_area: true,
        ..DockingOptions::default()
    };
    let mut wb = workbench_with(LayoutTree::with_options(options));
    wb.tree.close(wb.main_rs);
    let window = wb.tree.float(wb.lib_rs).unwrap();
    assert!(wb.tree.children(wb.documents).is_empty());
    assert!(wb.tree.is_visible(wb.documents));

    let hit = LayoutHitTester::build(
        &wb.tree,
        &LayoutEngine::default(),
        &DropTargetOptions::default(),
        viewport(),
        window,
    );
    let areas = hit.drop_areas(HostId::Main);
    assert!(areas
        .iter()
        .any(|a| a.node == wb.documents && a.kind == DropAreaKind::PaneInterior));
    let over_documents = pick(&hit, HostId::Main, Point::new(750.0, 300.0)).unwrap();
    assert_eq!(over_documents.node, wb.documents);

    assert!(wb.tree.dock_floating_window(
        window,
        &target(DropTargetKind::PaneInterior, wb.documents, None)
    ));
    assert_eq!(wb.tree.children(wb.documents), &[wb.lib_rs]);
    assert!(wb.tree.floating_windows().is_empty());
}

#[test]
fn edge_drop_beside_empty_document_area_releases_it() {
    let options = DockingOptions {
        keep_document_area: true,
        ..DockingOptions::default()
    };
    let mut wb = workbench_with(LayoutTree::with_options(options));
    wb.tree.close(wb.main_rs);
    let window = wb.tree.float(wb.lib_rs).unwrap();
    assert!(wb.tree.dock_floating_window(
        window,
        &target(DropTargetKind::PaneEdge(Side::Right), wb.documents, None)
    ));
    assert!(!wb.tree.contains(wb.documents));
    let pane = wb.tree.parent(wb.lib_rs).unwrap();
    assert_eq!(wb.tree.document_panes_in_main(), vec![pane]);
    assert_eq!(crate::check_invariants(&wb.tree), vec![]);
}

#[test]
fn other_floating_windows_are_hosts_topmost_first() {
    let mut wb = workbench();
    let (lower, _) = drag_window(&mut wb, ContentKind::Anchorable);
    let (upper, _) = drag_window(&mut wb, ContentKind::Anchorable);
    let (dragged, _) = drag_window(&mut wb, ContentKind::Anchorable);
    let hit = LayoutHitTester::build(
        &wb.tree,
        &LayoutEngine::default(),
        &DropTargetOptions::default(),
        viewport(),
        dragged,
    );
    assert_eq!(
        hit.hosts(),
        vec![HostId::Floating(upper), HostId::Floating(lower), HostId::Main]
    );
    assert_eq!(
        hit.host_at(Point::new(2100.0, 50.0)),
        Some(HostId::Floating(upper))
    );
    assert_eq!(hit.host_at(Point::new(100.0, 50.0)), Some(HostId::Main));
    assert_eq!(hit.host_at(Point::new(5000.0, 50.0)), None);
}

// =========================================================================
// COMMIT
// =========================================================================

fn target(kind: DropTargetKind, node: NodeId, index: Option<usize>) -> DropTarget {
    DropTarget {
        kind,
        node,
        index,
        preview: Rect::default(),
    }
}

#[test]
fn edge_drop_across_orientation_interposes_panel() {
    let mut tree = LayoutTree::new();
    let root_panel = tree.root_panel();
    tree.set_panel_orientation(root_panel, Orientation::Vertical);
    let (q, items) = pane_with(&mut tree, root_panel, ContentKind::Document, &["q", "d"]);
    let (r, _) = pane_with(&mut tree, root_panel, ContentKind::Document, &["r"]);

    let window = tree.float(items[1]).unwrap();
    let floated_pane = tree.children(window)[0];
    assert!(tree.dock_floating_window(
        window,
        &target(DropTargetKind::PaneEdge(Side::Left), q, None)
    ));

    let wrapper = tree.children(root_panel)[0];
    assert_eq!(tree.panel_orientation(wrapper), Some(Orientation::Horizontal));
    assert_eq!(tree.children(wrapper), &[floated_pane, q]);
    assert_eq!(tree.children(root_panel), &[wrapper, r]);
    assert!(!tree.contains(window));
}

#[test]
fn edge_drop_with_matching_orientation_inserts_sibling() {
    let mut wb = workbench();
    let (window, content) = drag_window(&mut wb, ContentKind::Anchorable);
    let pane = wb.tree.children(window)[0];
    assert!(wb.tree.dock_floating_window(
        window,
        &target(DropTargetKind::PaneEdge(Side::Right), wb.tools, None)
    ));
    let root_panel = wb.tree.root_panel();
    assert_eq!(wb.tree.children(root_panel), &[wb.tools, pane, wb.documents]);
    assert_eq!(wb.tree.parent(content), Some(pane));
}

#[test]
fn interior_drop_inserts_contents_at_index() {
    let mut wb = workbench();
    let (window, content) = drag_window(&mut wb, ContentKind::Document);
    assert!(wb.tree.dock_floating_window(
        window,
        &target(DropTargetKind::PaneInterior, wb.documents, Some(1))
    ));
    assert_eq!(
        wb.tree.children(wb.documents),
        &[wb.main_rs, content, wb.lib_rs]
    );
    assert!(wb.tree.floating_windows().is_empty());
}

#[test]
fn document_window_cannot_drop_on_tool_pane() {
    let mut wb = workbench();
    let (window, _) = drag_window(&mut wb, ContentKind::Document);
    assert!(!wb.tree.dock_floating_window(
        window,
        &target(DropTargetKind::PaneInterior, wb.tools, None)
    ));
    assert!(!wb.tree.dock_floating_window(
        window,
        &target(DropTargetKind::RootEdge(Side::Left), wb.tree.root_panel(), None)
    ));
    assert!(wb.tree.contains(window));
}

#[test]
fn root_edge_drop_wraps_existing_children() {
    let mut wb = workbench();
    let root_panel = wb.tree.root_panel();
    let (window, _) = drag_window(&mut wb, ContentKind::Anchorable);
    let pane = wb.tree.children(window)[0];
    assert!(wb.tree.dock_floating_window(
        window,
        &target(DropTargetKind::RootEdge(Side::Bottom), root_panel, None)
    ));
    assert_eq!(wb.tree.panel_orientation(root_panel), Some(Orientation::Vertical));
    let children = wb.tree.children(root_panel).to_vec();
    assert_eq!(children.len(), 2);
    assert_eq!(children[1], pane);
    assert_eq!(wb.tree.children(children[0]), &[wb.tools, wb.documents]);
}

#[test]
fn panel_group_drop_appends_subtree() {
    let mut wb = workbench();
    let root_panel = wb.tree.root_panel();
    let (window, _) = drag_window(&mut wb, ContentKind::Anchorable);
    let pane = wb.tree.children(window)[0];
    assert!(wb.tree.dock_floating_window(
        window,
        &target(DropTargetKind::PanelGroupInterior, root_panel, None)
    ));
    assert_eq!(wb.tree.children(root_panel).last(), Some(&pane));
}

#[test]
fn drop_reactivates_active_content() {
    let mut wb = workbench();
    let (window, content) = drag_window(&mut wb, ContentKind::Document);
    wb.tree.activate(content);
    assert!(wb.tree.dock_floating_window(
        window,
        &target(DropTargetKind::PaneInterior, wb.documents, None)
    ));
    assert_eq!(wb.tree.active_content(), Some(content));
    assert_eq!(wb.tree.selected_content(wb.documents), Some(content));
}
