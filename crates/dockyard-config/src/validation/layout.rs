//! Layout metrics and drag validation.

use crate::schema::DockyardConfig;

use super::helpers::validate_range;

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &DockyardConfig) {
    let layout = &config.layout;
    validate_range(errors, "layout.splitter_width", layout.splitter_width, 1, 20);
    validate_range(
        errors,
        "layout.tab_header_height",
        layout.tab_header_height,
        12,
        64,
    );
    validate_range(errors, "layout.tab_width", layout.tab_width, 40, 400);
    validate_range(
        errors,
        "layout.default_floating_width",
        layout.default_floating_width,
        100,
        4000,
    );
    validate_range(
        errors,
        "layout.default_floating_height",
        layout.default_floating_height,
        100,
        4000,
    );
    validate_range(
        errors,
        "layout.default_auto_hide_size",
        layout.default_auto_hide_size,
        50,
        2000,
    );
}

/// Validate drag constraints.
pub(crate) fn validate_drag(errors: &mut Vec<String>, config: &DockyardConfig) {
    validate_range(errors, "drag.threshold", config.drag.threshold, 0, 50);
}
