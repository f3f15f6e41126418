//! Drop-target geometry validation.

use crate::schema::DockyardConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_drop_targets(errors: &mut Vec<String>, config: &DockyardConfig) {
    let targets = &config.drop_targets;
    validate_range_f64(errors, "drop_targets.edge_band", targets.edge_band, 0.05, 0.5);
    validate_range_f64(
        errors,
        "drop_targets.pane_edge_fraction",
        targets.pane_edge_fraction,
        0.1,
        0.9,
    );
    validate_range_f64(
        errors,
        "drop_targets.root_edge_fraction",
        targets.root_edge_fraction,
        0.1,
        0.9,
    );
    validate_range(
        errors,
        "drop_targets.root_edge_band",
        targets.root_edge_band,
        4,
        100,
    );
}
