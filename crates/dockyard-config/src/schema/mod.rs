//! Configuration schema types for Dockyard.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the same defaults the layout engine
//! uses when it runs without a config file.

mod docking;
mod drop_targets;
mod layout;
mod system;

pub use docking::*;
pub use drop_targets::*;
pub use layout::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Dockyard.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DockyardConfig {
    pub layout: LayoutConfig,
    pub docking: DockingConfig,
    pub drop_targets: DropTargetConfig,
    pub drag: DragConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: DockyardConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout.splitter_width, 4);
        assert!(!config.docking.allow_mixed_orientation);
        assert_eq!(config.drag.threshold, 4);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_parse_independently() {
        let config: DockyardConfig = toml::from_str(
            r#"
[docking]
keep_document_area = true

[drop_targets]
edge_band = 0.3
"#,
        )
        .unwrap();
        assert!(config.docking.keep_document_area);
        assert!((config.drop_targets.edge_band - 0.3).abs() < f64::EPSILON);
        assert!((config.drop_targets.pane_edge_fraction - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.layout.tab_width, 120);
    }
}
