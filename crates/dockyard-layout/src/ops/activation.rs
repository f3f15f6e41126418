//! Active content and pane selection.
//!
//! Activating content selects it in its pane, and selecting a different
//! item in the pane holding the active content activates that item. The
//! `activation_in_progress` flag turns the nested call into a no-op.

use chrono::Utc;
use dockyard_common::{LayoutEvent, NodeId};
use tracing::debug;

use crate::tree::LayoutTree;

impl LayoutTree {
    /// Make `content` the active content. Activating the already active
    /// content does nothing and emits nothing.
    pub fn activate(&mut self, content: NodeId) -> bool {
        if self.activation_in_progress {
            return false;
        }
        if self.content(content).is_none()
            || !self.is_attached(content)
            || self.is_hidden(content)
        {
            return false;
        }
        if self.active_content == Some(content) {
            return false;
        }

        self.activation_in_progress = true;
        let previous = self.active_content.take();
        if let Some(prev) = previous {
            if let Some(data) = self.content_mut(prev) {
                data.is_active = false;
            }
        }
        if let Some(data) = self.content_mut(content) {
            data.is_active = true;
            data.last_activation = Some(Utc::now());
        }
        self.active_content = Some(content);
        self.emit(LayoutEvent::ActiveContentChanged {
            previous,
            current: Some(content),
        });

        if let Some(pane) = self.parent(content).filter(|p| self.pane(*p).is_some()) {
            if let Some(index) = self.index_in_parent(content) {
                self.select(pane, index);
            }
        }
        self.activation_in_progress = false;
        debug!(%content, ?previous, "activated content");
        true
    }

    /// Clear the active content.
    pub fn deactivate(&mut self) -> bool {
        let Some(previous) = self.active_content.take() else {
            return false;
        };
        if let Some(data) = self.content_mut(previous) {
            data.is_active = false;
        }
        self.emit(LayoutEvent::ActiveContentChanged {
            previous: Some(previous),
            current: None,
        });
        true
    }

    /// Select the item at `index` of `pane`. If the pane holds the active
    /// content, the newly selected item becomes active.
    pub fn select(&mut self, pane: NodeId, index: usize) -> bool {
        if self.pane(pane).is_none() {
            return false;
        }
        let Some(&content) = self.children(pane).get(index) else {
            return false;
        };
        let changed = self.set_selected_internal(pane, Some(content));
        let holds_active = self
            .active_content
            .is_some_and(|active| self.parent(active) == Some(pane));
        if changed && holds_active && self.active_content != Some(content) {
            self.activate(content);
        }
        changed
    }
}
