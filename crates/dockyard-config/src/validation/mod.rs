//! Full configuration validation.
//!
//! Validates numeric ranges and cross-field constraints. Each section has
//! its own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod drop_targets;
mod helpers;
mod layout;


use crate::schema::DockyardConfig;
use dockyard_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DockyardConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    layout::validate_drag(&mut errors, config);
    drop_targets::validate_drop_targets(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
