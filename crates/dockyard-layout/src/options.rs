//! Policy knobs consulted by the mutation engine.

/// Structural policy for a [`LayoutTree`](crate::tree::LayoutTree).
#[derive(Debug, Clone, PartialEq)]
pub struct DockingOptions {
    /// Split into a nested panel instead of re-orienting the shared parent.
    pub allow_mixed_orientation: bool,
    /// Keep the last document pane of the main tree alive when it empties.
    pub keep_document_area: bool,
    /// Size given to content floated without remembered bounds.
    pub default_floating_width: f64,
    pub default_floating_height: f64,
    /// Dock size of a pane restored from auto-hide without a previous container.
    pub default_auto_hide_size: f64,
    /// Pointer travel before a drag starts resolving drop targets.
    pub drag_threshold: f64,
}

impl Default for DockingOptions {
    fn default() -> Self {
        Self {
            allow_mixed_orientation: false,
            keep_document_area: false,
            default_floating_width: 300.0,
            default_floating_height: 400.0,
            default_auto_hide_size: 200.0,
            drag_threshold: 4.0,
        }
    }
}
