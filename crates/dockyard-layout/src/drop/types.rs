//! Drop area and drop target types.

use dockyard_common::{NodeId, Rect, Side};
use serde::{Deserialize, Serialize};

/// The semantic kind of a registered drop area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropAreaKind {
    /// The whole of a panel.
    PanelGroupInterior,
    /// The whole of a pane: dock as a tab at the end.
    PaneInterior,
    /// One edge band of a pane.
    PaneEdge(Side),
    /// A tab header, or the rest of the header strip when `index` is `None`.
    PaneTab { index: Option<usize> },
    /// A strip along the main window border.
    RootEdge(Side),
}

/// A hit region registered by a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropArea {
    pub kind: DropAreaKind,
    /// The panel or pane this area belongs to. For root edges, the root panel.
    pub node: NodeId,
    /// Region that must contain the pointer.
    pub rect: Rect,
    /// Bounds of `node`, used for previews.
    pub bounds: Rect,
    /// Registration-time priority; greater wins.
    pub depth: usize,
}

/// What a drop would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropTargetKind {
    PaneInterior,
    PaneEdge(Side),
    PanelGroupInterior,
    RootEdge(Side),
}

/// A resolved drop target with its preview rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropTarget {
    pub kind: DropTargetKind,
    pub node: NodeId,
    /// Insertion index for pane interior targets; `None` appends.
    pub index: Option<usize>,
    pub preview: Rect,
}

/// Geometry knobs of the drop-target catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTargetOptions {
    /// Width of a pane edge band as a fraction of the pane extent.
    pub edge_band: f64,
    /// Share of the pane a pane-edge preview covers.
    pub pane_edge_fraction: f64,
    /// Share of the main window a root-edge preview covers.
    pub root_edge_fraction: f64,
    /// Thickness in pixels of the root edge strips.
    pub root_edge_band: f64,
}

impl Default for DropTargetOptions {
    fn default() -> Self {
        Self {
            edge_band: 0.25,
            pane_edge_fraction: 0.5,
            root_edge_fraction: 1.0 / 3.0,
            root_edge_band: 24.0,
        }
    }
}
