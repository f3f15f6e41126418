//! Drop-area registration, area selection and target resolution.

use dockyard_common::{HostId, NodeId, Point, Rect, Side};

use super::{DropArea, DropAreaKind, DropTarget, DropTargetKind, DropTargetOptions};
use crate::layout::{GeometryKind, LayoutEngine};
use crate::tree::{ContentKind, LayoutTree};

/// Per-depth priority levels. Areas of one node are spaced so a deeper
/// node always outranks a shallower one.
const LEVEL_PANEL: usize = 0;
const LEVEL_INTERIOR: usize = 1;
const LEVEL_EDGE: usize = 2;
const LEVELS: usize = 3;

/// Root edge strips outrank every tree-derived area except tab headers.
const ROOT_EDGE_DEPTH: usize = usize::MAX - 1;

/// Tab headers never overlap each other and always win.
const TAB_DEPTH: usize = usize::MAX;

/// The host environment's hit-testing surface.
pub trait HitTestService {
    /// Hosts that can show drop overlays, topmost first.
    fn hosts(&self) -> Vec<HostId>;

    /// Screen bounds of `host`.
    fn host_bounds(&self, host: HostId) -> Option<Rect>;

    /// Drop areas registered on `host`, in registration order.
    fn drop_areas(&self, host: HostId) -> Vec<DropArea>;

    /// The topmost host whose bounds contain `point`.
    fn host_at(&self, point: Point) -> Option<HostId> {
        self.hosts().into_iter().find(|host| {
            self.host_bounds(*host)
                .is_some_and(|bounds| bounds.contains(point))
        })
    }
}

/// The area containing `point` with the greatest depth. Ties go to the
/// area registered last.
pub fn select_area(areas: &[DropArea], point: Point) -> Option<&DropArea> {
    areas
        .iter()
        .filter(|area| area.rect.contains(point))
        .fold(None, |best: Option<&DropArea>, area| match best {
            Some(b) if b.depth > area.depth => Some(b),
            _ => Some(area),
        })
}

/// Turn a selected area into a target with its preview rectangle.
pub fn resolve_target(area: &DropArea, options: &DropTargetOptions) -> DropTarget {
    let (kind, index, preview) = match area.kind {
        DropAreaKind::PaneInterior => (DropTargetKind::PaneInterior, None, area.bounds),
        DropAreaKind::PaneTab { index } => (DropTargetKind::PaneInterior, index, area.bounds),
        DropAreaKind::PaneEdge(side) => (
            DropTargetKind::PaneEdge(side),
            None,
            area.bounds.side_slice(side, options.pane_edge_fraction),
        ),
        DropAreaKind::PanelGroupInterior => {
            (DropTargetKind::PanelGroupInterior, None, area.bounds)
        }
        DropAreaKind::RootEdge(side) => (
            DropTargetKind::RootEdge(side),
            None,
            area.bounds.side_slice(side, options.root_edge_fraction),
        ),
    };
    DropTarget {
        kind,
        node: area.node,
        index,
        preview,
    }
}

// =============================================================================
// BUILT-IN HIT TESTER
// =============================================================================

struct HostAreas {
    host: HostId,
    bounds: Rect,
    areas: Vec<DropArea>,
}

/// A [`HitTestService`] that derives drop areas from the tree geometry.
///
/// Built once per drag: the dragged window is excluded, and document
/// windows only see document panes and the panels that contain them.
pub struct LayoutHitTester {
    hosts: Vec<HostAreas>,
}

impl LayoutHitTester {
    pub fn build(
        tree: &LayoutTree,
        engine: &LayoutEngine,
        options: &DropTargetOptions,
        main_bounds: Rect,
        dragged: NodeId,
    ) -> Self {
        let documents_only = tree
            .floating(dragged)
            .is_some_and(|w| w.kind == ContentKind::Document);

        let mut hosts = Vec::new();
        for window in tree.floating_windows().into_iter().rev() {
            if window == dragged || !tree.is_visible(window) {
                continue;
            }
            let Some(bounds) = tree.floating(window).map(|w| w.bounds) else {
                continue;
            };
            let areas = register_areas(tree, engine, options, window, bounds, documents_only);
            hosts.push(HostAreas {
                host: HostId::Floating(window),
                bounds,
                areas,
            });
        }

        let mut areas = register_areas(
            tree,
            engine,
            options,
            tree.root_panel(),
            main_bounds,
            documents_only,
        );
        if !documents_only {
            register_root_edges(tree, options, main_bounds, &mut areas);
        }
        hosts.push(HostAreas {
            host: HostId::Main,
            bounds: main_bounds,
            areas,
        });

        tracing::debug!(
            hosts = hosts.len(),
            %dragged,
            documents_only,
            "built drop-area catalog"
        );
        Self { hosts }
    }

    fn find(&self, host: HostId) -> Option<&HostAreas> {
        self.hosts.iter().find(|h| h.host == host)
    }
}

impl HitTestService for LayoutHitTester {
    fn hosts(&self) -> Vec<HostId> {
        self.hosts.iter().map(|h| h.host).collect()
    }

    fn host_bounds(&self, host: HostId) -> Option<Rect> {
        self.find(host).map(|h| h.bounds)
    }

    fn drop_areas(&self, host: HostId) -> Vec<DropArea> {
        self.find(host).map(|h| h.areas.clone()).unwrap_or_default()
    }
}

fn register_areas(
    tree: &LayoutTree,
    engine: &LayoutEngine,
    options: &DropTargetOptions,
    host_root: NodeId,
    bounds: Rect,
    documents_only: bool,
) -> Vec<DropArea> {
    let snapshot = engine.compute(tree, host_root, bounds);
    let mut areas = Vec::new();
    for entry in &snapshot.entries {
        let base = entry.depth * LEVELS;
        match &entry.kind {
            GeometryKind::Panel { .. } => {
                if documents_only && !holds_document_pane(tree, entry.node) {
                    continue;
                }
                areas.push(DropArea {
                    kind: DropAreaKind::PanelGroupInterior,
                    node: entry.node,
                    rect: entry.rect,
                    bounds: entry.rect,
                    depth: base + LEVEL_PANEL,
                });
            }
            GeometryKind::Pane {
                pane_kind,
                header,
                tabs,
            } => {
                if documents_only && *pane_kind != ContentKind::Document {
                    continue;
                }
                let rect = entry.rect;
                let area = |kind, hit: Rect, depth| DropArea {
                    kind,
                    node: entry.node,
                    rect: hit,
                    bounds: rect,
                    depth,
                };

                areas.push(area(DropAreaKind::PaneInterior, rect, base + LEVEL_INTERIOR));
                for side in Side::ALL {
                    areas.push(area(
                        DropAreaKind::PaneEdge(side),
                        edge_band(rect, side, options.edge_band),
                        base + LEVEL_EDGE,
                    ));
                }
                for tab in tabs {
                    areas.push(area(
                        DropAreaKind::PaneTab {
                            index: Some(tab.index),
                        },
                        tab.rect,
                        TAB_DEPTH,
                    ));
                }
                if let Some(strip) = header {
                    let used = tabs.last().map_or(strip.x, |t| t.rect.right());
                    let rest = Rect::new(used, strip.y, strip.right() - used, strip.height);
                    if !rest.is_empty() {
                        areas.push(area(DropAreaKind::PaneTab { index: None }, rest, TAB_DEPTH));
                    }
                }
            }
        }
    }
    areas
}

fn register_root_edges(
    tree: &LayoutTree,
    options: &DropTargetOptions,
    main_bounds: Rect,
    areas: &mut Vec<DropArea>,
) {
    let band = options.root_edge_band;
    for side in Side::ALL {
        let rect = match side {
            Side::Left => Rect::new(main_bounds.x, main_bounds.y, band, main_bounds.height),
            Side::Right => Rect::new(
                main_bounds.right() - band,
                main_bounds.y,
                band,
                main_bounds.height,
            ),
            Side::Top => Rect::new(main_bounds.x, main_bounds.y, main_bounds.width, band),
            Side::Bottom => Rect::new(
                main_bounds.x,
                main_bounds.bottom() - band,
                main_bounds.width,
                band,
            ),
        };
        areas.push(DropArea {
            kind: DropAreaKind::RootEdge(side),
            node: tree.root_panel(),
            rect,
            bounds: main_bounds,
            depth: ROOT_EDGE_DEPTH,
        });
    }
}

/// Edge band of a pane. Left and right bands span the full height; top and
/// bottom bands span only the middle so no two bands overlap.
fn edge_band(rect: Rect, side: Side, fraction: f64) -> Rect {
    let w = rect.width * fraction;
    let h = rect.height * fraction;
    match side {
        Side::Left => Rect::new(rect.x, rect.y, w, rect.height),
        Side::Right => Rect::new(rect.right() - w, rect.y, w, rect.height),
        Side::Top => Rect::new(rect.x + w, rect.y, rect.width - 2.0 * w, h),
        Side::Bottom => Rect::new(rect.x + w, rect.bottom() - h, rect.width - 2.0 * w, h),
    }
}

fn holds_document_pane(tree: &LayoutTree, panel: NodeId) -> bool {
    tree.descendants(panel)
        .into_iter()
        .any(|n| tree.pane(n).is_some_and(|p| p.kind == ContentKind::Document))
}
