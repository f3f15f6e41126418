//! Mapping the TOML configuration onto the layout engine's knobs.

use dockyard_config::DockyardConfig;
use dockyard_layout::{DockingManager, DockingOptions, DropTargetOptions, LayoutEngine};

/// Everything the layout crate needs from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub options: DockingOptions,
    pub engine: LayoutEngine,
    pub drop_targets: DropTargetOptions,
}

impl From<&DockyardConfig> for Settings {
    fn from(config: &DockyardConfig) -> Self {
        let layout = &config.layout;
        let options = DockingOptions {
            allow_mixed_orientation: config.docking.allow_mixed_orientation,
            keep_document_area: config.docking.keep_document_area,
            default_floating_width: f64::from(layout.default_floating_width),
            default_floating_height: f64::from(layout.default_floating_height),
            default_auto_hide_size: f64::from(layout.default_auto_hide_size),
            drag_threshold: f64::from(config.drag.threshold),
        };
        let engine = LayoutEngine {
            splitter_width: f64::from(layout.splitter_width),
            tab_header_height: f64::from(layout.tab_header_height),
            tab_width: f64::from(layout.tab_width),
        };
        let drop = &config.drop_targets;
        let drop_targets = DropTargetOptions {
            edge_band: drop.edge_band,
            pane_edge_fraction: drop.pane_edge_fraction,
            root_edge_fraction: drop.root_edge_fraction,
            root_edge_band: f64::from(drop.root_edge_band),
        };
        Self {
            options,
            engine,
            drop_targets,
        }
    }
}

impl Settings {
    /// A manager with an empty layout and these settings.
    pub fn manager(&self) -> DockingManager {
        DockingManager::new(self.options.clone())
            .with_engine(self.engine.clone())
            .with_drop_options(self.drop_targets.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_engine_defaults() {
        let settings = Settings::from(&DockyardConfig::default());
        assert_eq!(settings.options, DockingOptions::default());
        assert_eq!(settings.engine, LayoutEngine::default());
        assert_eq!(settings.drop_targets, DropTargetOptions::default());
    }

    #[test]
    fn docking_policy_reaches_the_manager() {
        let mut config = DockyardConfig::default();
        config.docking.keep_document_area = true;
        config.layout.splitter_width = 8;
        config.drag.threshold = 0;
        let manager = Settings::from(&config).manager();
        assert!(manager.tree().options().keep_document_area);
        assert_eq!(manager.tree().options().drag_threshold, 0.0);
        assert_eq!(manager.engine().splitter_width, 8.0);
    }
}
