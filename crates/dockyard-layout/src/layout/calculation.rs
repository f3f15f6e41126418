//! Layout calculation: recursive tree-to-rect computation.

use dockyard_common::{NodeId, Orientation, Rect};

use super::{GeometryEntry, GeometryKind, LayoutEngine, LayoutSnapshot, TabHeader};
use crate::tree::{ContentKind, GridLength, LayoutTree, NodeKind};

impl LayoutEngine {
    /// Lay out `node` (a panel, pane or floating window) inside `bounds`.
    /// Invisible nodes are skipped together with their subtrees.
    pub fn compute(&self, tree: &LayoutTree, node: NodeId, bounds: Rect) -> LayoutSnapshot {
        let mut snapshot = LayoutSnapshot::default();
        self.layout_node(tree, node, bounds, &mut snapshot.entries);
        snapshot
    }

    /// Minimum `(width, height)` of `id` computed from its visible
    /// descendants.
    pub fn min_size(&self, tree: &LayoutTree, id: NodeId) -> (f64, f64) {
        match tree.kind(id) {
            Some(NodeKind::Pane(p)) => (p.size.min_width, p.size.min_height),
            Some(NodeKind::Panel(p)) => {
                let visible: Vec<NodeId> = tree
                    .children(id)
                    .iter()
                    .copied()
                    .filter(|c| tree.is_visible(*c))
                    .collect();
                if visible.is_empty() {
                    return (0.0, 0.0);
                }
                let splitters = self.splitter_width * (visible.len() - 1) as f64;
                let mut along = splitters;
                let mut across: f64 = 0.0;
                for child in visible {
                    let (w, h) = self.min_size(tree, child);
                    let (a, c) = match p.orientation {
                        Orientation::Horizontal => (w, h),
                        Orientation::Vertical => (h, w),
                    };
                    along += a;
                    across = across.max(c);
                }
                let (w, h) = match p.orientation {
                    Orientation::Horizontal => (along, across),
                    Orientation::Vertical => (across, along),
                };
                (w.max(p.size.min_width), h.max(p.size.min_height))
            }
            Some(NodeKind::FloatingWindow(_)) => tree
                .children(id)
                .first()
                .map(|c| self.min_size(tree, *c))
                .unwrap_or((0.0, 0.0)),
            _ => (0.0, 0.0),
        }
    }

    fn layout_node(
        &self,
        tree: &LayoutTree,
        id: NodeId,
        bounds: Rect,
        out: &mut Vec<GeometryEntry>,
    ) {
        if !tree.is_visible(id) {
            return;
        }
        match tree.kind(id) {
            Some(NodeKind::Panel(panel)) => {
                out.push(GeometryEntry {
                    node: id,
                    rect: bounds,
                    depth: tree.depth(id),
                    kind: GeometryKind::Panel {
                        orientation: panel.orientation,
                    },
                });
                let orientation = panel.orientation;
                let visible: Vec<NodeId> = tree
                    .children(id)
                    .iter()
                    .copied()
                    .filter(|c| tree.is_visible(*c))
                    .collect();
                let extents = self.distribute(tree, &visible, orientation, bounds);
                let mut offset = 0.0;
                for (child, extent) in visible.into_iter().zip(extents) {
                    let rect = match orientation {
                        Orientation::Horizontal => {
                            Rect::new(bounds.x + offset, bounds.y, extent, bounds.height)
                        }
                        Orientation::Vertical => {
                            Rect::new(bounds.x, bounds.y + offset, bounds.width, extent)
                        }
                    };
                    self.layout_node(tree, child, rect, out);
                    offset += extent + self.splitter_width;
                }
            }
            Some(NodeKind::Pane(pane)) => {
                let (header, tabs) = self.tab_strip(tree, id, pane.kind, bounds);
                out.push(GeometryEntry {
                    node: id,
                    rect: bounds,
                    depth: tree.depth(id),
                    kind: GeometryKind::Pane {
                        pane_kind: pane.kind,
                        header,
                        tabs,
                    },
                });
            }
            Some(NodeKind::FloatingWindow(_)) => {
                if let Some(child) = tree.children(id).first() {
                    self.layout_node(tree, *child, bounds, out);
                }
            }
            _ => {}
        }
    }

    /// Extents of `children` along `orientation`. Absolute children get
    /// their size, auto children their minimum, and star children share
    /// what is left by weight. Everything shrinks proportionally when the
    /// total overflows.
    fn distribute(
        &self,
        tree: &LayoutTree,
        children: &[NodeId],
        orientation: Orientation,
        bounds: Rect,
    ) -> Vec<f64> {
        if children.is_empty() {
            return Vec::new();
        }
        let splitters = self.splitter_width * (children.len() - 1) as f64;
        let available = (bounds.extent(orientation) - splitters).max(0.0);

        let mins: Vec<f64> = children
            .iter()
            .map(|c| {
                let (w, h) = self.min_size(tree, *c);
                match orientation {
                    Orientation::Horizontal => w,
                    Orientation::Vertical => h,
                }
            })
            .collect();
        let hints: Vec<GridLength> = children
            .iter()
            .map(|c| {
                tree.dock_size(*c)
                    .map(|s| s.along(orientation))
                    .unwrap_or_default()
            })
            .collect();

        let fixed: f64 = hints
            .iter()
            .zip(&mins)
            .map(|(hint, min)| match hint {
                GridLength::Pixel(px) => px.max(*min),
                GridLength::Auto => *min,
                GridLength::Star(_) => 0.0,
            })
            .sum();
        let total_weight: f64 = hints
            .iter()
            .map(|h| match h {
                GridLength::Star(w) => *w,
                _ => 0.0,
            })
            .sum();
        let remaining = (available - fixed).max(0.0);

        let mut sizes: Vec<f64> = hints
            .iter()
            .zip(&mins)
            .map(|(hint, min)| match hint {
                GridLength::Pixel(px) => px.max(*min),
                GridLength::Auto => *min,
                GridLength::Star(w) if total_weight > 0.0 => {
                    (remaining * w / total_weight).max(*min)
                }
                GridLength::Star(_) => *min,
            })
            .collect();

        let used: f64 = sizes.iter().sum();
        if used > available && used > 0.0 {
            let scale = available / used;
            for size in &mut sizes {
                *size *= scale;
            }
        }
        sizes
    }

    /// Tab strip of a pane. Document panes always show it on top; tool
    /// panes show it at the bottom once they hold two visible items.
    fn tab_strip(
        &self,
        tree: &LayoutTree,
        pane: NodeId,
        kind: ContentKind,
        bounds: Rect,
    ) -> (Option<Rect>, Vec<TabHeader>) {
        let visible: Vec<(usize, NodeId)> = tree
            .children(pane)
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, c)| tree.is_visible(*c))
            .collect();
        let height = self.tab_header_height.min(bounds.height);
        let header = match kind {
            ContentKind::Document => Rect::new(bounds.x, bounds.y, bounds.width, height),
            ContentKind::Anchorable if visible.len() >= 2 => {
                Rect::new(bounds.x, bounds.bottom() - height, bounds.width, height)
            }
            ContentKind::Anchorable => return (None, Vec::new()),
        };
        if visible.is_empty() {
            return (Some(header), Vec::new());
        }
        let tab_width = self.tab_width.min(header.width / visible.len() as f64);
        let tabs = visible
            .into_iter()
            .enumerate()
            .map(|(slot, (index, content))| TabHeader {
                index,
                content,
                rect: Rect::new(
                    header.x + slot as f64 * tab_width,
                    header.y,
                    tab_width,
                    header.height,
                ),
            })
            .collect();
        (Some(header), tabs)
    }
}
