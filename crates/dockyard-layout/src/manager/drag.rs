//! Pointer-driven dragging of floating windows.

use dockyard_common::{NodeId, Point};
use tracing::{debug, warn};

use crate::drag::{DragOutcome, DragSession, OverlayDirective, ReleaseResult};
use crate::drop::LayoutHitTester;

use super::types::ActiveDrag;
use super::DockingManager;

impl DockingManager {
    /// Start dragging the floating `window` with the pointer at `pointer`.
    /// A drag already in progress is aborted first. Returns nothing when
    /// `window` is not a floating window.
    pub fn begin_drag(&mut self, window: NodeId, pointer: Point) -> Vec<OverlayDirective> {
        let mut out = self.drag_abort();
        let Some(bounds) = self.tree.floating(window).map(|w| w.bounds) else {
            return out;
        };
        let hit = LayoutHitTester::build(
            &self.tree,
            &self.engine,
            &self.drop_options,
            self.main_bounds,
            window,
        );
        let mut session = DragSession::new(
            self.drop_options.clone(),
            self.tree.options().drag_threshold,
        );
        out.extend(session.begin(window, bounds, pointer, &hit));
        self.drag = Some(ActiveDrag { session, hit });
        out
    }

    /// Tear `content` out of its container into a new floating window and
    /// start dragging that window.
    pub fn begin_content_drag(
        &mut self,
        content: NodeId,
        pointer: Point,
    ) -> Option<(NodeId, Vec<OverlayDirective>)> {
        let window = match self.tree.floating_window_of(content) {
            Some(window) if self.tree.contents_under(window) == [content] => window,
            _ => self.tree.float(content)?,
        };
        if let Some(data) = self.tree.floating_mut(window) {
            let size = data.bounds;
            data.bounds.x = pointer.x - size.width / 2.0;
            data.bounds.y = pointer.y;
        }
        Some((window, self.begin_drag(window, pointer)))
    }

    pub fn drag_move(&mut self, pointer: Point) -> Vec<OverlayDirective> {
        match self.drag.as_mut() {
            Some(drag) => drag.session.pointer_move(pointer, &drag.hit),
            None => Vec::new(),
        }
    }

    /// Finish the drag and apply its outcome: dock the window at the target
    /// or leave it floating at its new position. A drop the tree refuses
    /// is reported as floated.
    pub fn drag_release(&mut self, pointer: Point) -> ReleaseResult {
        let Some(mut drag) = self.drag.take() else {
            return ReleaseResult::default();
        };
        let mut result = drag.session.release(pointer, &drag.hit);
        let mut refused = None;
        match &result.outcome {
            Some(DragOutcome::Dropped { window, target }) => {
                let docked = self.tree.dock_floating_window(*window, target);
                debug!(%window, kind = ?target.kind, node = %target.node, docked, "drag dropped");
                if !docked {
                    refused = Some(*window);
                }
            }
            Some(DragOutcome::Floated { window, bounds }) => {
                if let Some(data) = self.tree.floating_mut(*window) {
                    data.bounds = *bounds;
                }
                debug!(%window, ?bounds, "drag released without target");
            }
            None => {}
        }
        if let Some(window) = refused {
            let bounds = drag.session.floated_bounds(pointer);
            if let Some(data) = self.tree.floating_mut(window) {
                data.bounds = bounds;
            }
            warn!(%window, ?bounds, "drop refused, window stays floating");
            result.outcome = Some(DragOutcome::Floated { window, bounds });
        }
        result
    }

    /// Cancel the drag in progress, if any.
    pub fn drag_abort(&mut self) -> Vec<OverlayDirective> {
        match self.drag.take() {
            Some(mut drag) => drag.session.abort(),
            None => Vec::new(),
        }
    }

    /// The session of the drag in progress.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref().map(|d| &d.session)
    }
}
