//! Command dispatch, geometry and notifications for DockingManager.

use dockyard_common::{LayoutEvent, NodeId};
use tracing::debug;

use crate::commands::DockCommand;
use crate::layout::LayoutSnapshot;

use super::DockingManager;

impl DockingManager {
    /// Execute a docking command. Returns `true` if the layout changed.
    pub fn execute(&mut self, cmd: DockCommand) -> bool {
        let tree = &mut self.tree;
        let changed = match cmd {
            DockCommand::Float(content) => tree.float(content).is_some(),
            DockCommand::Dock(content) => tree.dock(content),
            DockCommand::DockAsDocument(content) => tree.dock_as_document(content),
            DockCommand::Hide(content) => tree.hide(content),
            DockCommand::Show(content) => tree.show(content),
            DockCommand::Close(content) => tree.close(content),
            DockCommand::ToggleAutoHide(node) => tree.toggle_auto_hide(node),
            DockCommand::Activate(content) => tree.activate(content),
            DockCommand::Select { pane, index } => tree.select(pane, index),
            DockCommand::Split {
                pane,
                content,
                orientation,
                position,
            } => tree.split(pane, content, orientation, position).is_some(),
        };
        debug!(?cmd, changed, "executed dock command");
        changed
    }

    /// Geometry of the main window.
    pub fn compute_layout(&self) -> LayoutSnapshot {
        self.engine
            .compute(&self.tree, self.tree.root_panel(), self.main_bounds)
    }

    /// Geometry of one floating window within its own bounds.
    pub fn compute_window_layout(&self, window: NodeId) -> Option<LayoutSnapshot> {
        let bounds = self.tree.floating(window)?.bounds;
        Some(self.engine.compute(&self.tree, window, bounds))
    }

    /// Take every queued notification in emission order.
    pub fn drain_events(&mut self) -> Vec<LayoutEvent> {
        self.tree.drain_events()
    }
}
