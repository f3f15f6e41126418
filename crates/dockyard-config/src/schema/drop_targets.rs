//! Drop-target geometry configuration.

use serde::{Deserialize, Serialize};

/// How drop areas are carved out of panes and the main window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DropTargetConfig {
    /// Edge band as a fraction of the pane extent (valid range: 0.05-0.5).
    pub edge_band: f64,
    /// Preview size of a pane edge target (valid range: 0.1-0.9).
    pub pane_edge_fraction: f64,
    /// Preview size of a root edge target (valid range: 0.1-0.9).
    pub root_edge_fraction: f64,
    /// Thickness in pixels of the root edge strips (valid range: 4-100).
    pub root_edge_band: u32,
}

impl Default for DropTargetConfig {
    fn default() -> Self {
        Self {
            edge_band: 0.25,
            pane_edge_fraction: 0.5,
            root_edge_fraction: 1.0 / 3.0,
            root_edge_band: 24,
        }
    }
}
