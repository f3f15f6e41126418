//! The drag-session state machine.

use dockyard_common::{HostId, NodeId, Point, Rect};
use tracing::{debug, trace};

use super::{DragOutcome, DragState, OverlayDirective, ReleaseResult};
use crate::drop::{
    resolve_target, select_area, DropArea, DropTarget, DropTargetOptions, HitTestService,
};

/// Tracks one drag of a floating window from `begin` to release or abort.
///
/// Every call returns the overlay directives it produced. Calls on an idle
/// or finished session return nothing.
#[derive(Debug)]
pub struct DragSession {
    options: DropTargetOptions,
    threshold: f64,
    state: DragState,
    window: Option<NodeId>,
    start_bounds: Rect,
    start: Point,
    last: Point,
    /// The pointer has travelled at least `threshold` from `start`.
    armed: bool,
    hosts: Vec<HostId>,
    host: Option<HostId>,
    area: Option<DropArea>,
    target: Option<DropTarget>,
}

impl DragSession {
    pub fn new(options: DropTargetOptions, threshold: f64) -> Self {
        Self {
            options,
            threshold: threshold.max(0.0),
            state: DragState::Idle,
            window: None,
            start_bounds: Rect::default(),
            start: Point::new(0.0, 0.0),
            last: Point::new(0.0, 0.0),
            armed: false,
            hosts: Vec::new(),
            host: None,
            area: None,
            target: None,
        }
    }

    /// Start dragging `window`, whose bounds are `bounds`, with the pointer
    /// at `pointer`.
    pub fn begin(
        &mut self,
        window: NodeId,
        bounds: Rect,
        pointer: Point,
        hit: &dyn HitTestService,
    ) -> Vec<OverlayDirective> {
        if self.state != DragState::Idle {
            return Vec::new();
        }
        self.state = DragState::Active;
        self.window = Some(window);
        self.start_bounds = bounds;
        self.start = pointer;
        self.last = pointer;
        self.hosts = hit.hosts();
        self.armed = self.threshold == 0.0;
        debug!(%window, hosts = self.hosts.len(), "drag started");

        let mut out = Vec::new();
        if self.armed {
            self.resolve(pointer, hit, &mut out);
        }
        out
    }

    /// Track the pointer. Targets are only resolved once it has moved at
    /// least the drag threshold away from the start.
    pub fn pointer_move(
        &mut self,
        pointer: Point,
        hit: &dyn HitTestService,
    ) -> Vec<OverlayDirective> {
        if self.state != DragState::Active {
            return Vec::new();
        }
        self.last = pointer;
        if !self.armed && self.start.distance_to(pointer) >= self.threshold {
            self.armed = true;
        }
        let mut out = Vec::new();
        if self.armed {
            self.resolve(pointer, hit, &mut out);
        }
        out
    }

    /// Finish the drag at `pointer`. With a target the outcome is a drop;
    /// otherwise the window floats, moved by the pointer delta.
    pub fn release(&mut self, pointer: Point, hit: &dyn HitTestService) -> ReleaseResult {
        if self.state != DragState::Active {
            return ReleaseResult::default();
        }
        let mut directives = self.pointer_move(pointer, hit);
        let Some(window) = self.window else {
            return ReleaseResult::default();
        };

        let outcome = match self.target.clone() {
            Some(target) => DragOutcome::Dropped { window, target },
            None => DragOutcome::Floated {
                window,
                bounds: self.floated_bounds(pointer),
            },
        };
        self.teardown(&mut directives);
        self.state = DragState::Committed(outcome.clone());
        debug!(%window, ?outcome, "drag committed");
        ReleaseResult {
            outcome: Some(outcome),
            directives,
        }
    }

    /// Cancel the drag. The window keeps its position.
    pub fn abort(&mut self) -> Vec<OverlayDirective> {
        if self.state != DragState::Active {
            return Vec::new();
        }
        let mut out = Vec::new();
        self.teardown(&mut out);
        self.state = DragState::Aborted;
        debug!(window = ?self.window, "drag aborted");
        out
    }

    /// Bounds of the dragged window moved by the pointer delta since `begin`.
    pub fn floated_bounds(&self, pointer: Point) -> Rect {
        self.start_bounds
            .translate(pointer.x - self.start.x, pointer.y - self.start.y)
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn window(&self) -> Option<NodeId> {
        self.window
    }

    /// Hosts enumerated at `begin`, topmost first.
    pub fn hosts(&self) -> &[HostId] {
        &self.hosts
    }

    pub fn current_host(&self) -> Option<HostId> {
        self.host
    }

    pub fn current_area(&self) -> Option<&DropArea> {
        self.area.as_ref()
    }

    pub fn current_target(&self) -> Option<&DropTarget> {
        self.target.as_ref()
    }

    pub fn last_pointer(&self) -> Point {
        self.last
    }

    // -- Internal --

    fn resolve(
        &mut self,
        pointer: Point,
        hit: &dyn HitTestService,
        out: &mut Vec<OverlayDirective>,
    ) {
        let host = hit.host_at(pointer).filter(|h| self.hosts.contains(h));
        if host != self.host {
            self.teardown(out);
            if let Some(h) = host {
                out.push(OverlayDirective::HostEnter(h));
            }
            self.host = host;
        }
        let Some(host) = self.host else {
            return;
        };

        let areas = hit.drop_areas(host);
        let area = select_area(&areas, pointer).cloned();
        if area == self.area {
            return;
        }
        if self.area.take().is_some() {
            out.push(OverlayDirective::AreaLeave { host });
        }
        if self.target.take().is_some() {
            out.push(OverlayDirective::TargetLeave { host });
        }
        if let Some(area) = area {
            let target = resolve_target(&area, &self.options);
            trace!(%host, kind = ?target.kind, node = %target.node, "drop target changed");
            out.push(OverlayDirective::AreaEnter {
                host,
                area: area.clone(),
            });
            out.push(OverlayDirective::TargetEnter {
                host,
                target: target.clone(),
            });
            self.area = Some(area);
            self.target = Some(target);
        }
    }

    /// Leave everything entered on the current host, innermost first.
    fn teardown(&mut self, out: &mut Vec<OverlayDirective>) {
        let Some(host) = self.host.take() else {
            return;
        };
        // Area before target is deliberate: overlays drop the highlight first.
        if self.area.take().is_some() {
            out.push(OverlayDirective::AreaLeave { host });
        }
        if self.target.take().is_some() {
            out.push(OverlayDirective::TargetLeave { host });
        }
        out.push(OverlayDirective::HostLeave(host));
    }
}
