//! Docking policy and drag configuration types.

use serde::{Deserialize, Serialize};

/// Structural policy applied by the mutation engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DockingConfig {
    /// Split into a nested panel instead of re-orienting the shared parent.
    pub allow_mixed_orientation: bool,
    /// Keep the last document pane alive when its last document leaves.
    pub keep_document_area: bool,
}

/// Interactive drag settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Pointer travel in pixels before drop targets are resolved (valid range: 0-50).
    pub threshold: u32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self { threshold: 4 }
    }
}
