//! Geometry engine types.

use dockyard_common::{NodeId, Orientation, Rect};
use serde::Serialize;

use crate::tree::ContentKind;

/// Turns size hints into screen rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between siblings of a panel.
    pub splitter_width: f64,
    /// Height of the tab strip of a pane.
    pub tab_header_height: f64,
    /// Preferred width of a single tab header.
    pub tab_width: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            splitter_width: 4.0,
            tab_header_height: 24.0,
            tab_width: 120.0,
        }
    }
}

/// One tab header of a pane. `index` is the child index of the content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabHeader {
    pub index: usize,
    pub content: NodeId,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GeometryKind {
    Panel {
        orientation: Orientation,
    },
    Pane {
        pane_kind: ContentKind,
        /// The whole tab strip, when the pane shows one.
        header: Option<Rect>,
        tabs: Vec<TabHeader>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryEntry {
    pub node: NodeId,
    pub rect: Rect,
    /// Tree depth of `node`.
    pub depth: usize,
    pub kind: GeometryKind,
}

/// Rectangles of every visible panel and pane of one host, pre-order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub entries: Vec<GeometryEntry>,
}

impl LayoutSnapshot {
    pub fn entry(&self, node: NodeId) -> Option<&GeometryEntry> {
        self.entries.iter().find(|e| e.node == node)
    }

    pub fn rect_of(&self, node: NodeId) -> Option<Rect> {
        self.entry(node).map(|e| e.rect)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
