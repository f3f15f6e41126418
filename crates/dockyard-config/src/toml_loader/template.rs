//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Dockyard Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# splitter_width = 4            # 1-20
# tab_header_height = 24        # 12-64
# tab_width = 120               # 40-400
# default_floating_width = 300  # 100-4000
# default_floating_height = 400 # 100-4000
# default_auto_hide_size = 200  # 50-2000

[docking]
# allow_mixed_orientation = false
# keep_document_area = false

[drop_targets]
# edge_band = 0.25              # 0.05-0.5, fraction of the pane extent
# pane_edge_fraction = 0.5      # 0.1-0.9
# root_edge_fraction = 0.333    # 0.1-0.9
# root_edge_band = 24           # 4-100 pixels

[drag]
# threshold = 4                 # 0-50 pixels

[logging]
# level = "INFO"                # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
