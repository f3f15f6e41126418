//! Hide, show and close for individual content items.

use dockyard_common::NodeId;
use tracing::debug;

use crate::tree::LayoutTree;

impl LayoutTree {
    /// Move `content` out of the layout into the hidden collection under
    /// the root. Its container is remembered for [`show`](Self::show) and
    /// collected if this leaves it empty. Returns `false` when hiding is
    /// not allowed or the content is detached or already hidden.
    pub fn hide(&mut self, content: NodeId) -> bool {
        let Some(data) = self.content(content) else {
            return false;
        };
        if !data.can_hide {
            debug!(%content, "hide refused: CanHide is false");
            return false;
        }
        let Some(old_parent) = self.parent(content) else {
            return false;
        };
        if old_parent == self.root {
            return false;
        }

        if self.active_content == Some(content) {
            self.deactivate();
        }
        self.remember_origin(content);
        self.detach(content);
        self.set_content_visible(content, false);
        let root = self.root;
        self.attach(root, usize::MAX, content);
        debug!(%content, container = %old_parent, "hid content");

        self.collect_garbage_from(old_parent);
        true
    }

    /// Dock a hidden `content` back into the container it was hidden from,
    /// or a fallback location when that container is gone.
    pub fn show(&mut self, content: NodeId) -> bool {
        if !self.is_hidden(content) {
            return false;
        }
        self.set_content_visible(content, true);
        let docked = self.restore_to_previous(content);
        debug!(%content, docked, "showed content");
        docked
    }

    /// Remove `content` from the layout and collect garbage. Returns `false`
    /// when closing is not allowed.
    pub fn close(&mut self, content: NodeId) -> bool {
        let Some(data) = self.content(content) else {
            return false;
        };
        if !data.can_close {
            debug!(%content, "close refused: CanClose is false");
            return false;
        }
        match self.parent(content) {
            Some(parent) => {
                self.remove_attached(content);
                self.collect_garbage_from(parent);
            }
            None => self.destroy_subtree(content),
        }
        debug!(%content, "closed content");
        true
    }
}
