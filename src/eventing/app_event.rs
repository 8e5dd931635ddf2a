//! ClickEvent - Page Click Events

use crate::domain::NodeId;

/// A click on some node of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// Node the click landed on; may be a text node
    pub target: NodeId,
}

impl ClickEvent {
    pub fn new(target: NodeId) -> Self {
        Self { target }
    }
}
