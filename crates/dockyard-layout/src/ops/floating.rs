//! Floating content out of the layout and docking it back.

use dockyard_common::{LayoutEvent, NodeId, Rect, Side};
use tracing::debug;

use crate::tree::{ContentKind, FloatingData, LayoutTree, NodeKind, PreviousContainer};

impl LayoutTree {
    /// Record where `content` currently lives unless a back-reference is
    /// already set.
    pub(crate) fn remember_origin(&mut self, content: NodeId) {
        let Some(parent) = self
            .parent(content)
            .filter(|p| self.kind(*p).is_some_and(NodeKind::holds_content))
        else {
            return;
        };
        let index = self.index_in_parent(content).unwrap_or(0);
        if let Some(data) = self.content_mut(content) {
            if data.previous_container.is_none() {
                data.previous_container = Some(PreviousContainer {
                    container: parent,
                    index,
                });
            }
        }
    }

    /// Move `content` into a new floating window. Returns the window, or
    /// `None` when floating is not allowed, the content is hidden or it
    /// already floats alone.
    pub fn float(&mut self, content: NodeId) -> Option<NodeId> {
        if self.is_hidden(content) {
            return None;
        }
        let data = self.content(content)?;
        if !data.can_float {
            debug!(%content, "float refused: CanFloat is false");
            return None;
        }
        let kind = data.kind;
        let bounds = data.floating_bounds.unwrap_or_else(|| {
            Rect::new(
                0.0,
                0.0,
                self.options.default_floating_width,
                self.options.default_floating_height,
            )
        });
        let is_maximized = data.floating_maximized;
        let old_parent = self.parent(content)?;
        if let Some(window) = self.floating_window_of(content) {
            if self.contents_under(window) == [content] {
                return None;
            }
        }

        self.remember_origin(content);
        self.detach(content);

        let pane = self.new_pane(kind);
        self.attach(pane, 0, content);
        let window = self.insert_node(NodeKind::FloatingWindow(FloatingData {
            kind,
            bounds,
            is_maximized,
        }));
        self.attach(window, 0, pane);
        let root = self.root;
        self.attach(root, usize::MAX, window);
        self.emit(LayoutEvent::FloatingWindowAdded(window));
        debug!(%content, %window, "floated content");

        self.collect_garbage_from(old_parent);
        Some(window)
    }

    /// Move `content` back to its previous container, or to a fallback
    /// location when that container is gone. Hidden content is shown.
    /// Returns whether it moved.
    pub fn dock(&mut self, content: NodeId) -> bool {
        if self.is_hidden(content) {
            return self.show(content);
        }
        self.restore_to_previous(content)
    }

    pub(crate) fn restore_to_previous(&mut self, content: NodeId) -> bool {
        let Some(data) = self.content(content) else {
            return false;
        };
        let kind = data.kind;
        let previous = data.previous_container;
        let Some(old_parent) = self.parent(content) else {
            return false;
        };

        let resolved = previous.filter(|p| {
            p.container != old_parent
                && self.is_attached(p.container)
                && self.accepts(p.container, content)
        });

        match resolved {
            Some(PreviousContainer { container, index }) => {
                self.detach(content);
                let index = index.min(self.children(container).len());
                self.attach(container, index, content);
                debug!(%content, %container, index, "docked content into previous container");
            }
            None if self.is_in_main_tree(content) => {
                debug!(%content, "dock skipped: already docked with no previous container");
                return false;
            }
            None => {
                self.detach(content);
                match kind {
                    ContentKind::Anchorable => {
                        let pane = self.new_pane(ContentKind::Anchorable);
                        self.attach(pane, 0, content);
                        self.place_at_root_edge(pane, Side::Right);
                    }
                    ContentKind::Document => {
                        let pane = self.ensure_document_pane();
                        self.attach(pane, usize::MAX, content);
                    }
                }
                debug!(%content, "docked content into fallback location");
            }
        }

        if let Some(data) = self.content_mut(content) {
            data.previous_container = None;
        }
        if let Some(pane) = self.parent(content) {
            if self.pane(pane).is_some() {
                self.set_selected_internal(pane, Some(content));
            }
        }
        if self.contains(old_parent) {
            self.collect_garbage_from(old_parent);
        }
        true
    }

    /// Move `content` into the first document pane of the main tree.
    pub fn dock_as_document(&mut self, content: NodeId) -> bool {
        if self.content(content).is_none() || self.is_hidden(content) {
            return false;
        }
        let Some(old_parent) = self.parent(content) else {
            return false;
        };
        let in_document_pane = self
            .pane(old_parent)
            .is_some_and(|p| p.kind == ContentKind::Document);
        if in_document_pane && self.is_in_main_tree(old_parent) {
            return false;
        }

        self.remember_origin(content);
        self.detach(content);
        let pane = self.ensure_document_pane();
        self.attach(pane, usize::MAX, content);
        self.set_selected_internal(pane, Some(content));
        debug!(%content, %pane, "docked content as document");

        if self.contains(old_parent) {
            self.collect_garbage_from(old_parent);
        }
        true
    }
}
