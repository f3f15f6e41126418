use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Errors raised while reading a persisted layout document.
///
/// Every variant names the offending tag so a caller can report exactly
/// which element of the document was rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutFormatError {
    #[error("malformed layout document: {0}")]
    Xml(String),

    #[error("layout document has no root element")]
    MissingRoot,

    #[error("unknown tag <{tag}>")]
    UnknownTag { tag: String },

    #[error("<{tag}> is missing required attribute '{attribute}'")]
    MissingAttribute { tag: String, attribute: String },

    #[error("<{tag}> has invalid value '{value}' for attribute '{attribute}'")]
    InvalidAttribute {
        tag: String,
        attribute: String,
        value: String,
    },

    #[error("<{child}> is not allowed inside <{parent}>")]
    UnexpectedChild { parent: String, child: String },

    #[error("<{tag}> reuses id {id}")]
    DuplicateId { tag: String, id: u64 },
}

#[derive(Debug, thiserror::Error)]
pub enum DockError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Format(#[from] LayoutFormatError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("drop_targets.edge_band".into());
        assert_eq!(
            err.to_string(),
            "config validation error: drop_targets.edge_band"
        );
    }

    #[test]
    fn format_error_names_the_tag() {
        let err = LayoutFormatError::UnknownTag {
            tag: "LayoutDocumentPaneGroup".into(),
        };
        assert_eq!(err.to_string(), "unknown tag <LayoutDocumentPaneGroup>");

        let err = LayoutFormatError::MissingAttribute {
            tag: "Panel".into(),
            attribute: "Orientation".into(),
        };
        assert_eq!(
            err.to_string(),
            "<Panel> is missing required attribute 'Orientation'"
        );

        let err = LayoutFormatError::InvalidAttribute {
            tag: "DocumentPane".into(),
            attribute: "SelectedIndex".into(),
            value: "x".into(),
        };
        assert!(err.to_string().contains("SelectedIndex"));
        assert!(err.to_string().contains("<DocumentPane>"));

        let err = LayoutFormatError::UnexpectedChild {
            parent: "Panel".into(),
            child: "Document".into(),
        };
        assert_eq!(err.to_string(), "<Document> is not allowed inside <Panel>");
    }

    #[test]
    fn dock_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let dock_err: DockError = config_err.into();
        assert!(matches!(dock_err, DockError::Config(_)));
        assert!(dock_err.to_string().contains("bad toml"));
    }

    #[test]
    fn dock_error_from_format() {
        let format_err = LayoutFormatError::MissingRoot;
        let dock_err: DockError = format_err.into();
        assert!(matches!(dock_err, DockError::Format(_)));
        assert_eq!(dock_err.to_string(), "layout document has no root element");
    }

    #[test]
    fn dock_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let dock_err: DockError = io_err.into();
        assert!(matches!(dock_err, DockError::Io(_)));
        assert!(dock_err.to_string().contains("file missing"));
    }
}
