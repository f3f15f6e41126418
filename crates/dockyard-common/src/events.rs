use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::id::NodeId;

/// Notification produced by the layout engine for the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum LayoutEvent {
    ChildrenChanged(NodeId),
    ParentChanged {
        node: NodeId,
        parent: Option<NodeId>,
    },
    VisibilityChanged {
        node: NodeId,
        visible: bool,
    },
    ActiveContentChanged {
        previous: Option<NodeId>,
        current: Option<NodeId>,
    },
    SelectionChanged {
        pane: NodeId,
        selected: Option<NodeId>,
    },
    FloatingWindowAdded(NodeId),
    FloatingWindowRemoved(NodeId),
}

/// FIFO of layout events waiting to be drained by the host.
///
/// Events are queued instead of delivered through callbacks so an observer
/// can never re-enter the tree in the middle of a mutation.
#[derive(Debug, Default)]
pub struct EventQueue {
    items: VecDeque<LayoutEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: LayoutEvent) {
        tracing::trace!(?event, "layout event queued");
        self.items.push_back(event);
    }

    /// Removes and returns every queued event in emission order.
    pub fn drain(&mut self) -> Vec<LayoutEvent> {
        self.items.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutEvent> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_order() {
        let mut queue = EventQueue::new();
        queue.push(LayoutEvent::ChildrenChanged(NodeId(1)));
        queue.push(LayoutEvent::VisibilityChanged {
            node: NodeId(2),
            visible: false,
        });
        assert_eq!(queue.len(), 2);

        let events = queue.drain();
        assert_eq!(
            events,
            vec![
                LayoutEvent::ChildrenChanged(NodeId(1)),
                LayoutEvent::VisibilityChanged {
                    node: NodeId(2),
                    visible: false,
                },
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_discards_pending() {
        let mut queue = EventQueue::new();
        queue.push(LayoutEvent::FloatingWindowAdded(NodeId(5)));
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn event_serialization_is_tagged() {
        let event = LayoutEvent::ActiveContentChanged {
            previous: None,
            current: Some(NodeId(3)),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ActiveContentChanged\""));
        let back: LayoutEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
