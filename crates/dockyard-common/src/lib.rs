pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, DockError, LayoutFormatError};
pub use events::{EventQueue, LayoutEvent};
pub use id::{new_content_id, NodeId};
pub use types::{HostId, Orientation, Point, Rect, Side};

pub type Result<T> = std::result::Result<T, DockError>;
