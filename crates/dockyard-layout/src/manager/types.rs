//! Core types and constructors for DockingManager.

use dockyard_common::Rect;

use crate::drag::DragSession;
use crate::drop::{DropTargetOptions, LayoutHitTester};
use crate::layout::LayoutEngine;
use crate::options::DockingOptions;
use crate::tree::LayoutTree;

/// Owns a layout together with everything needed to lay it out, persist
/// it and drag its floating windows around.
pub struct DockingManager {
    pub(super) tree: LayoutTree,
    pub(super) engine: LayoutEngine,
    pub(super) drop_options: DropTargetOptions,
    /// Screen bounds of the main window.
    pub(super) main_bounds: Rect,
    /// Set between `begin_drag` and release or abort.
    pub(super) drag: Option<ActiveDrag>,
}

/// A drag in progress with the drop-area catalog captured at its start.
pub(super) struct ActiveDrag {
    pub(super) session: DragSession,
    pub(super) hit: LayoutHitTester,
}

impl DockingManager {
    /// Create a manager around an empty layout.
    pub fn new(options: DockingOptions) -> Self {
        Self::with_tree(LayoutTree::with_options(options))
    }

    pub fn with_tree(tree: LayoutTree) -> Self {
        Self {
            tree,
            engine: LayoutEngine::default(),
            drop_options: DropTargetOptions::default(),
            main_bounds: Rect::new(0.0, 0.0, 1280.0, 800.0),
            drag: None,
        }
    }

    pub fn with_engine(mut self, engine: LayoutEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_drop_options(mut self, drop_options: DropTargetOptions) -> Self {
        self.drop_options = drop_options;
        self
    }

    // -- Accessors --

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    /// Direct access to the tree. Structural calls made through it behave
    /// exactly like the manager's own operations.
    pub fn tree_mut(&mut self) -> &mut LayoutTree {
        &mut self.tree
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn drop_options(&self) -> &DropTargetOptions {
        &self.drop_options
    }

    pub fn main_bounds(&self) -> Rect {
        self.main_bounds
    }

    /// Update the main window bounds (called when the host window moves or
    /// resizes).
    pub fn set_main_bounds(&mut self, bounds: Rect) {
        self.main_bounds = bounds;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}

impl Default for DockingManager {
    fn default() -> Self {
        Self::new(DockingOptions::default())
    }
}
