//! Saving and loading the layout document.
//!
//! File writes are atomic (write to `.tmp`, then rename), as for the
//! config file.

use std::path::Path;

use dockyard_common::{DockError, Result};
use tracing::{info, warn};

use crate::serializer::{deserialize_layout, serialize_layout};

use super::DockingManager;

impl DockingManager {
    /// Serialize the current layout to XML.
    pub fn save_layout(&self) -> Result<String> {
        Ok(serialize_layout(&self.tree)?)
    }

    /// Replace the current layout with the one described by `xml`. Any drag
    /// in progress is aborted. On error the current layout is kept.
    pub fn load_layout(&mut self, xml: &str) -> Result<()> {
        let tree = deserialize_layout(xml, self.tree.options().clone())?;
        self.drag_abort();
        self.tree = tree;
        Ok(())
    }

    /// Write the layout to `path`, creating parent directories.
    pub fn save_layout_to_path(&self, path: &Path) -> Result<()> {
        let xml = self.save_layout()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("xml.tmp");
        std::fs::write(&tmp_path, &xml)?;
        if let Err(e) = std::fs::rename(&tmp_path, path) {
            warn!("atomic rename failed ({}), falling back to direct write", e);
            std::fs::write(path, &xml)?;
        }

        info!(path = %path.display(), bytes = xml.len(), "layout saved");
        Ok(())
    }

    pub fn load_layout_from_path(&mut self, path: &Path) -> Result<()> {
        let xml = std::fs::read_to_string(path).map_err(|e| {
            DockError::Other(format!("failed to read layout {}: {e}", path.display()))
        })?;
        self.load_layout(&xml)?;
        info!(
            path = %path.display(),
            nodes = self.tree.node_count(),
            "layout loaded"
        );
        Ok(())
    }
}
