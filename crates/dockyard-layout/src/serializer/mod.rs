//! XML persistence of a layout.
//!
//! Writing walks the tree pre-order into a generic [`Element`] tree, one
//! element per node. Reading parses into the same element tree, dispatches
//! every tag through a closed registry and rebuilds the nodes in order.
//! Pane and anchor-group ids are kept so that previous-container links
//! survive a round trip; other nodes get fresh ids above every persisted
//! one. Hidden content follows the floating windows in an optional
//! `Hidden` element.
//!
//! ```xml
//! <Layout>
//!   <Panel Orientation="Horizontal">
//!     <AnchorablePane Id="7" SelectedIndex="0" DockWidth="250">
//!       <Anchorable ContentId="explorer" Title="Explorer" IsSelected="True"/>
//!     </AnchorablePane>
//!     <DocumentPane Id="9" SelectedIndex="0">
//!       <Document ContentId="main" Title="main.rs" IsSelected="True"/>
//!     </DocumentPane>
//!   </Panel>
//!   <AnchorSide Side="Left"/>
//!   <AnchorSide Side="Top"/>
//!   <AnchorSide Side="Right"/>
//!   <AnchorSide Side="Bottom"/>
//!   <FloatingWindows/>
//! </Layout>
//! ```

mod element;
mod reader;
mod registry;
mod writer;

use dockyard_common::LayoutFormatError;
use tracing::debug;

pub use element::Element;

use crate::options::DockingOptions;
use crate::tree::LayoutTree;

/// Serialize `tree` to an XML document. Transient state (geometry, drag
/// sessions, queued events) is not part of the document.
pub fn serialize_layout(tree: &LayoutTree) -> Result<String, LayoutFormatError> {
    let xml = writer::layout_element(tree).to_xml()?;
    debug!(bytes = xml.len(), "serialized layout");
    Ok(xml)
}

/// Rebuild a layout from an XML document. Any unknown tag, missing required
/// attribute or misplaced element fails the whole load.
pub fn deserialize_layout(
    xml: &str,
    options: DockingOptions,
) -> Result<LayoutTree, LayoutFormatError> {
    let root = Element::parse(xml)?;
    reader::build_layout(&root, options)
}

/// The element tree [`serialize_layout`] would write.
pub fn layout_to_element(tree: &LayoutTree) -> Element {
    writer::layout_element(tree)
}
