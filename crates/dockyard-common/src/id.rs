use serde::{Deserialize, Serialize};
use std::fmt;

/// Generate a fresh content id for documents and anchorables created
/// without one.
pub fn new_content_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identifier of a node in a layout tree. Ids are never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_id_is_valid_uuid() {
        let id = new_content_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn content_id_is_unique() {
        assert_ne!(new_content_id(), new_content_id());
    }

    #[test]
    fn node_id_display() {
        assert_eq!(NodeId(42).to_string(), "#42");
        assert_eq!(NodeId(42).get(), 42);
    }

    #[test]
    fn node_id_ordering_and_hash() {
        use std::collections::HashSet;
        assert!(NodeId(1) < NodeId(2));
        let mut set = HashSet::new();
        set.insert(NodeId(7));
        set.insert(NodeId(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn node_id_serialization() {
        let json = serde_json::to_string(&NodeId(9)).unwrap();
        assert_eq!(json, "9");
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeId(9));
    }
}
