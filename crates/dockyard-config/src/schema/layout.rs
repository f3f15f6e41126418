//! Geometry configuration types.

use serde::{Deserialize, Serialize};

/// Pixel metrics used when computing pane and panel rectangles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Splitter thickness between panel children (valid range: 1-20).
    pub splitter_width: u32,
    /// Height of the tab header strip (valid range: 12-64).
    pub tab_header_height: u32,
    /// Width of a single tab header (valid range: 40-400).
    pub tab_width: u32,
    /// Width given to content floated without remembered bounds (valid range: 100-4000).
    pub default_floating_width: u32,
    /// Height given to content floated without remembered bounds (valid range: 100-4000).
    pub default_floating_height: u32,
    /// Initial auto-hide flyout size (valid range: 50-2000).
    pub default_auto_hide_size: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            splitter_width: 4,
            tab_header_height: 24,
            tab_width: 120,
            default_floating_width: 300,
            default_floating_height: 400,
            default_auto_hide_size: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.splitter_width, 4);
        assert_eq!(config.tab_header_height, 24);
        assert_eq!(config.tab_width, 120);
        assert_eq!(config.default_floating_width, 300);
        assert_eq!(config.default_floating_height, 400);
        assert_eq!(config.default_auto_hide_size, 200);
    }

    #[test]
    fn layout_config_partial_toml() {
        let toml_str = r#"
splitter_width = 6
tab_width = 160
"#;
        let config: LayoutConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.splitter_width, 6);
        assert_eq!(config.tab_width, 160);
        // Defaults preserved
        assert_eq!(config.tab_header_height, 24);
        assert_eq!(config.default_auto_hide_size, 200);
    }
}
