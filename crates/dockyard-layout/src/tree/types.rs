//! Node kinds and their per-kind payloads.

use std::fmt;

use chrono::{DateTime, Utc};
use dockyard_common::{new_content_id, NodeId, Orientation, Rect, Side};
use serde::{Deserialize, Serialize};

/// Minimum dock size applied when nothing else is specified.
pub const DEFAULT_MIN_DOCK_SIZE: f64 = 25.0;

/// Minimum auto-hide flyout size applied when nothing else is specified.
pub const DEFAULT_MIN_AUTO_HIDE_SIZE: f64 = 100.0;

// =============================================================================
// SIZE HINTS
// =============================================================================

/// A size along one axis: content-sized, absolute, or a weighted share of
/// what remains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GridLength {
    Auto,
    Pixel(f64),
    Star(f64),
}

impl GridLength {
    pub fn is_absolute(&self) -> bool {
        matches!(self, GridLength::Pixel(_))
    }

    /// Parses `Auto`, `120`, `*` or `2.5*`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Some(GridLength::Auto);
        }
        if let Some(weight) = s.strip_suffix('*') {
            if weight.is_empty() {
                return Some(GridLength::Star(1.0));
            }
            return weight
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite() && *w >= 0.0)
                .map(GridLength::Star);
        }
        s.parse::<f64>()
            .ok()
            .filter(|px| px.is_finite() && *px >= 0.0)
            .map(GridLength::Pixel)
    }
}

impl Default for GridLength {
    fn default() -> Self {
        GridLength::Star(1.0)
    }
}

impl fmt::Display for GridLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridLength::Auto => f.write_str("Auto"),
            GridLength::Pixel(px) => write!(f, "{px}"),
            GridLength::Star(w) if *w == 1.0 => f.write_str("*"),
            GridLength::Star(w) => write!(f, "{w}*"),
        }
    }
}

/// Dock size hints shared by panels and panes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DockSize {
    pub width: GridLength,
    pub height: GridLength,
    pub min_width: f64,
    pub min_height: f64,
}

impl DockSize {
    pub fn along(&self, orientation: Orientation) -> GridLength {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

impl Default for DockSize {
    fn default() -> Self {
        Self {
            width: GridLength::default(),
            height: GridLength::default(),
            min_width: DEFAULT_MIN_DOCK_SIZE,
            min_height: DEFAULT_MIN_DOCK_SIZE,
        }
    }
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Whether a node holds documents or tool windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Document,
    Anchorable,
}

/// Where a content item lived before it was floated, auto-hidden or moved
/// into the document area. Resolved by id at use time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousContainer {
    pub container: NodeId,
    pub index: usize,
}

/// Auto-hide flyout size of an anchorable. `None` means the engine default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoHideSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for AutoHideSize {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            min_width: DEFAULT_MIN_AUTO_HIDE_SIZE,
            min_height: DEFAULT_MIN_AUTO_HIDE_SIZE,
        }
    }
}

/// Leaf payload for documents and anchorables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentData {
    pub kind: ContentKind,
    pub content_id: String,
    pub title: String,
    pub tool_tip: Option<String>,
    pub can_close: bool,
    pub can_float: bool,
    pub can_hide: bool,
    pub can_auto_hide: bool,
    pub is_selected: bool,
    pub is_active: bool,
    pub last_activation: Option<DateTime<Utc>>,
    pub floating_bounds: Option<Rect>,
    pub floating_maximized: bool,
    pub auto_hide: AutoHideSize,
    pub previous_container: Option<PreviousContainer>,
}

impl ContentData {
    pub fn new(kind: ContentKind, title: impl Into<String>) -> Self {
        let anchorable = kind == ContentKind::Anchorable;
        Self {
            kind,
            content_id: new_content_id(),
            title: title.into(),
            tool_tip: None,
            can_close: true,
            can_float: true,
            can_hide: anchorable,
            can_auto_hide: anchorable,
            is_selected: false,
            is_active: false,
            last_activation: None,
            floating_bounds: None,
            floating_maximized: false,
            auto_hide: AutoHideSize::default(),
            previous_container: None,
        }
    }

    pub fn document(title: impl Into<String>) -> Self {
        Self::new(ContentKind::Document, title)
    }

    pub fn anchorable(title: impl Into<String>) -> Self {
        Self::new(ContentKind::Anchorable, title)
    }

    pub fn with_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = content_id.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelData {
    pub orientation: Orientation,
    pub size: DockSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneData {
    pub kind: ContentKind,
    pub size: DockSize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingData {
    pub kind: ContentKind,
    pub bounds: Rect,
    pub is_maximized: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorGroupData {
    pub previous_container: Option<PreviousContainer>,
}

// =============================================================================
// NODES
// =============================================================================

/// The closed set of node kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Root,
    Panel(PanelData),
    Pane(PaneData),
    Content(ContentData),
    FloatingWindow(FloatingData),
    AnchorSide(Side),
    AnchorGroup(AnchorGroupData),
}

impl NodeKind {
    /// Short kind name, also used as the persisted tag.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Root => "Layout",
            NodeKind::Panel(_) => "Panel",
            NodeKind::Pane(p) => match p.kind {
                ContentKind::Document => "DocumentPane",
                ContentKind::Anchorable => "AnchorablePane",
            },
            NodeKind::Content(c) => match c.kind {
                ContentKind::Document => "Document",
                ContentKind::Anchorable => "Anchorable",
            },
            NodeKind::FloatingWindow(_) => "FloatingWindow",
            NodeKind::AnchorSide(_) => "AnchorSide",
            NodeKind::AnchorGroup(_) => "AnchorGroup",
        }
    }

    /// Whether a node of this kind may hold a child of kind `child`.
    pub fn can_contain(&self, child: &NodeKind) -> bool {
        match (self, child) {
            (NodeKind::Root, NodeKind::Panel(_))
            | (NodeKind::Root, NodeKind::AnchorSide(_))
            | (NodeKind::Root, NodeKind::FloatingWindow(_))
            | (NodeKind::Root, NodeKind::Content(_)) => true,
            (NodeKind::Panel(_), NodeKind::Panel(_)) | (NodeKind::Panel(_), NodeKind::Pane(_)) => {
                true
            }
            (NodeKind::Pane(pane), NodeKind::Content(content)) => {
                pane.kind == ContentKind::Document || content.kind == ContentKind::Anchorable
            }
            (NodeKind::FloatingWindow(_), NodeKind::Panel(_))
            | (NodeKind::FloatingWindow(_), NodeKind::Pane(_)) => true,
            (NodeKind::AnchorSide(_), NodeKind::AnchorGroup(_)) => true,
            (NodeKind::AnchorGroup(_), NodeKind::Content(content)) => {
                content.kind == ContentKind::Anchorable
            }
            _ => false,
        }
    }

    /// Containers whose children are content items.
    pub fn holds_content(&self) -> bool {
        matches!(self, NodeKind::Pane(_) | NodeKind::AnchorGroup(_))
    }

    pub fn dock_size(&self) -> Option<&DockSize> {
        match self {
            NodeKind::Panel(p) => Some(&p.size),
            NodeKind::Pane(p) => Some(&p.size),
            _ => None,
        }
    }

    pub fn dock_size_mut(&mut self) -> Option<&mut DockSize> {
        match self {
            NodeKind::Panel(p) => Some(&mut p.size),
            NodeKind::Pane(p) => Some(&mut p.size),
            _ => None,
        }
    }
}

/// One node of the arena. Links are only changed through [`LayoutTree`]
/// so that notifications, visibility and garbage collection stay in step.
///
/// [`LayoutTree`]: super::LayoutTree
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) visible: bool,
    pub(crate) kind: NodeKind,
}

impl LayoutNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// For content this is its own flag; for composites the propagated value.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }
}
