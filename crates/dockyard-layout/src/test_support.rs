//! Builders shared by the unit tests.

use dockyard_common::NodeId;

use crate::tree::{ContentData, ContentKind, LayoutTree};

/// Build a pane of `kind` holding one content per title and attach it at the
/// end of `parent`.
pub(crate) fn pane_with(
    tree: &mut LayoutTree,
    parent: NodeId,
    kind: ContentKind,
    titles: &[&str],
) -> (NodeId, Vec<NodeId>) {
    let pane = tree.new_pane(kind);
    let mut contents = Vec::new();
    for title in titles {
        let content = tree.new_content(ContentData::new(kind, *title));
        tree.insert_child_at(pane, usize::MAX, content);
        contents.push(content);
    }
    tree.insert_child_at(parent, usize::MAX, pane);
    (pane, contents)
}

/// A tool pane on the left of a document pane.
pub(crate) struct Workbench {
    pub tree: LayoutTree,
    pub tools: NodeId,
    pub explorer: NodeId,
    pub outline: NodeId,
    pub documents: NodeId,
    pub main_rs: NodeId,
    pub lib_rs: NodeId,
}

pub(crate) fn workbench() -> Workbench {
    workbench_with(LayoutTree::new())
}

pub(crate) fn workbench_with(mut tree: LayoutTree) -> Workbench {
    let root_panel = tree.root_panel();
    let (tools, t) = pane_with(
        &mut tree,
        root_panel,
        ContentKind::Anchorable,
        &["Explorer", "Outline"],
    );
    let (documents, d) = pane_with(
        &mut tree,
        root_panel,
        ContentKind::Document,
        &["main.rs", "lib.rs"],
    );
    tree.drain_events();
    Workbench {
        tree,
        tools,
        explorer: t[0],
        outline: t[1],
        documents,
        main_rs: d[0],
        lib_rs: d[1],
    }
}
