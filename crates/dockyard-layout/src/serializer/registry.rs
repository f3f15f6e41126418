//! The closed tag registry: every persisted node tag and the function that
//! turns its element into a node payload.

use chrono::{DateTime, Utc};
use dockyard_common::{LayoutFormatError, NodeId, Orientation, Rect};

use super::element::{parse_f64, Element};
use crate::tree::{
    AnchorGroupData, ContentData, ContentKind, DockSize, FloatingData, GridLength, NodeKind,
    PaneData, PanelData, PreviousContainer,
};

/// Tags handled by the reader itself rather than through a builder.
pub const STRUCTURAL_TAGS: [&str; 4] = ["Layout", "AnchorSide", "FloatingWindows", "Hidden"];

/// Largest id a layout file may carry. Ids above it leave no room for
/// fresh allocations.
pub const MAX_PERSISTED_ID: u64 = u64::MAX >> 1;

/// A node payload decoded from one element.
#[derive(Debug)]
pub struct Built {
    pub kind: NodeKind,
    /// Persisted id, kept on load.
    pub id: Option<NodeId>,
    pub visible: bool,
}

impl Built {
    fn of(kind: NodeKind) -> Self {
        Self {
            kind,
            id: None,
            visible: true,
        }
    }
}

type Builder = fn(&Element) -> Result<Built, LayoutFormatError>;

const REGISTRY: &[(&str, Builder)] = &[
    ("Panel", build_panel),
    ("DocumentPane", build_document_pane),
    ("AnchorablePane", build_anchorable_pane),
    ("Document", build_document),
    ("Anchorable", build_anchorable),
    ("FloatingWindow", build_floating_window),
    ("AnchorGroup", build_anchor_group),
];

pub fn builder_for(tag: &str) -> Option<Builder> {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, build)| *build)
}

/// Whether `tag` is part of the format at all.
pub fn is_known_tag(tag: &str) -> bool {
    STRUCTURAL_TAGS.contains(&tag) || builder_for(tag).is_some()
}

/// Tags that carry a persisted `Id`.
pub fn carries_id(tag: &str) -> bool {
    matches!(tag, "DocumentPane" | "AnchorablePane" | "AnchorGroup")
}

// =============================================================================
// BUILDERS
// =============================================================================

fn build_panel(el: &Element) -> Result<Built, LayoutFormatError> {
    Ok(Built::of(NodeKind::Panel(PanelData {
        orientation: el.parsed_required("Orientation", Orientation::parse)?,
        size: dock_size(el)?,
    })))
}

fn build_document_pane(el: &Element) -> Result<Built, LayoutFormatError> {
    build_pane(el, ContentKind::Document)
}

fn build_anchorable_pane(el: &Element) -> Result<Built, LayoutFormatError> {
    build_pane(el, ContentKind::Anchorable)
}

fn build_pane(el: &Element, kind: ContentKind) -> Result<Built, LayoutFormatError> {
    Ok(Built {
        id: node_id(el, "Id")?,
        ..Built::of(NodeKind::Pane(PaneData {
            kind,
            size: dock_size(el)?,
        }))
    })
}

fn build_document(el: &Element) -> Result<Built, LayoutFormatError> {
    build_content(el, ContentKind::Document)
}

fn build_anchorable(el: &Element) -> Result<Built, LayoutFormatError> {
    build_content(el, ContentKind::Anchorable)
}

fn build_content(el: &Element, kind: ContentKind) -> Result<Built, LayoutFormatError> {
    let defaults = ContentData::new(kind, "");
    let mut data = ContentData::new(kind, el.get("Title").unwrap_or_default())
        .with_content_id(el.required("ContentId")?);

    data.tool_tip = el.get("ToolTip").map(str::to_string);
    data.can_close = el.flag("CanClose", defaults.can_close)?;
    data.can_float = el.flag("CanFloat", defaults.can_float)?;
    data.can_hide = el.flag("CanHide", defaults.can_hide)?;
    data.can_auto_hide = el.flag("CanAutoHide", defaults.can_auto_hide)?;
    data.is_selected = el.flag("IsSelected", false)?;
    data.is_active = el.flag("IsActive", false)?;
    data.last_activation = el.parsed("LastActivation", |s| {
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    })?;
    data.floating_bounds = floating_bounds(el)?;
    data.floating_maximized = el.flag("IsMaximized", false)?;
    data.previous_container = previous_container(el)?;

    if kind == ContentKind::Anchorable {
        data.auto_hide.width = el.number("AutoHideWidth")?;
        data.auto_hide.height = el.number("AutoHideHeight")?;
        if let Some(min) = el.number("AutoHideMinWidth")? {
            data.auto_hide.min_width = min;
        }
        if let Some(min) = el.number("AutoHideMinHeight")? {
            data.auto_hide.min_height = min;
        }
    }

    Ok(Built {
        visible: el.flag("IsVisible", true)?,
        ..Built::of(NodeKind::Content(data))
    })
}

fn build_floating_window(el: &Element) -> Result<Built, LayoutFormatError> {
    Ok(Built::of(NodeKind::FloatingWindow(FloatingData {
        kind: el.parsed_required("Kind", parse_content_kind)?,
        bounds: Rect::new(
            el.parsed_required("Left", parse_f64)?,
            el.parsed_required("Top", parse_f64)?,
            el.parsed_required("Width", parse_f64)?,
            el.parsed_required("Height", parse_f64)?,
        ),
        is_maximized: el.flag("IsMaximized", false)?,
    })))
}

fn build_anchor_group(el: &Element) -> Result<Built, LayoutFormatError> {
    Ok(Built {
        id: node_id(el, "Id")?,
        ..Built::of(NodeKind::AnchorGroup(AnchorGroupData {
            previous_container: previous_container(el)?,
        }))
    })
}

// =============================================================================
// ATTRIBUTE HELPERS
// =============================================================================

pub fn parse_content_kind(s: &str) -> Option<ContentKind> {
    match s {
        "Document" => Some(ContentKind::Document),
        "Anchorable" => Some(ContentKind::Anchorable),
        _ => None,
    }
}

pub fn content_kind_name(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Document => "Document",
        ContentKind::Anchorable => "Anchorable",
    }
}

/// Ids run from 1 to [`MAX_PERSISTED_ID`]; zero is reserved for "no node".
pub fn parse_node_id(s: &str) -> Option<NodeId> {
    s.trim()
        .parse::<u64>()
        .ok()
        .filter(|v| (1..=MAX_PERSISTED_ID).contains(v))
        .map(NodeId)
}

fn node_id(el: &Element, name: &str) -> Result<Option<NodeId>, LayoutFormatError> {
    el.parsed(name, parse_node_id)
}

fn non_negative(s: &str) -> Option<f64> {
    parse_f64(s).filter(|v| *v >= 0.0)
}

fn dock_size(el: &Element) -> Result<DockSize, LayoutFormatError> {
    let mut size = DockSize::default();
    if let Some(width) = el.parsed("DockWidth", GridLength::parse)? {
        size.width = width;
    }
    if let Some(height) = el.parsed("DockHeight", GridLength::parse)? {
        size.height = height;
    }
    if let Some(min) = el.parsed("DockMinWidth", non_negative)? {
        size.min_width = min;
    }
    if let Some(min) = el.parsed("DockMinHeight", non_negative)? {
        size.min_height = min;
    }
    Ok(size)
}

/// All four `Floating*` attributes or none.
fn floating_bounds(el: &Element) -> Result<Option<Rect>, LayoutFormatError> {
    const NAMES: [&str; 4] = ["FloatingLeft", "FloatingTop", "FloatingWidth", "FloatingHeight"];
    if NAMES.iter().all(|n| el.get(n).is_none()) {
        return Ok(None);
    }
    let mut v = [0.0; 4];
    for (slot, name) in v.iter_mut().zip(NAMES) {
        *slot = el.parsed_required(name, parse_f64)?;
    }
    Ok(Some(Rect::new(v[0], v[1], v[2], v[3])))
}

fn previous_container(el: &Element) -> Result<Option<PreviousContainer>, LayoutFormatError> {
    let Some(container) = node_id(el, "PreviousContainerId")? else {
        return Ok(None);
    };
    let index = el
        .parsed("PreviousContainerIndex", |s| s.trim().parse::<usize>().ok())?
        .unwrap_or(0);
    Ok(Some(PreviousContainer { container, index }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_node_tag_has_one_builder() {
        for tag in [
            "Panel",
            "DocumentPane",
            "AnchorablePane",
            "Document",
            "Anchorable",
            "FloatingWindow",
            "AnchorGroup",
        ] {
            assert!(builder_for(tag).is_some(), "{tag}");
        }
        assert!(builder_for("Layout").is_none());
        assert!(is_known_tag("AnchorSide"));
        assert!(!is_known_tag("LayoutDocumentPaneGroup"));
    }

    #[test]
    fn content_defaults_follow_kind() {
        let mut el = Element::new("Document");
        el.set("ContentId", "doc-1");
        let built = build_document(&el).unwrap();
        let NodeKind::Content(data) = built.kind else {
            panic!("expected content");
        };
        assert!(!data.can_hide);
        assert!(data.can_close);
        assert_eq!(data.title, "");
        assert!(built.visible);
    }

    #[test]
    fn partial_floating_bounds_are_rejected() {
        let mut el = Element::new("Anchorable");
        el.set("ContentId", "tool");
        el.set("FloatingLeft", 10);
        let err = build_anchorable(&el).unwrap_err();
        assert_eq!(
            err,
            LayoutFormatError::MissingAttribute {
                tag: "Anchorable".into(),
                attribute: "FloatingTop".into(),
            }
        );
    }

    #[test]
    fn zero_id_is_invalid() {
        let mut el = Element::new("AnchorGroup");
        el.set("Id", 0);
        assert!(matches!(
            build_anchor_group(&el),
            Err(LayoutFormatError::InvalidAttribute { .. })
        ));
    }
}
