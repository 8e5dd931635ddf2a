//! Page - Document plus document-wide click listeners
//!
//! Clicks are dispatched one at a time, each listener running to completion in
//! registration order before the next click is processed.

use tracing::trace;

use super::ClickEvent;
use crate::domain::{Document, NodeId};

/// Receiver of every click on the page
pub trait ClickListener {
    fn on_click(&mut self, document: &mut Document, event: &ClickEvent);
}

impl<F> ClickListener for F
where
    F: FnMut(&mut Document, &ClickEvent),
{
    fn on_click(&mut self, document: &mut Document, event: &ClickEvent) {
        self(document, event)
    }
}

/// A document with its registered click listeners
#[derive(Default)]
pub struct Page {
    document: Document,
    listeners: Vec<Box<dyn ClickListener>>,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Register a listener for all clicks, wherever they land
    pub fn add_click_listener(&mut self, listener: Box<dyn ClickListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Simulate a click on `target`
    pub fn click(&mut self, target: NodeId) {
        self.dispatch_click(&ClickEvent::new(target));
    }

    pub fn dispatch_click(&mut self, event: &ClickEvent) {
        trace!(target_node = ?event.target, listeners = self.listeners.len(), "Dispatching click");
        for listener in &mut self.listeners {
            listener.on_click(&mut self.document, event);
        }
    }
}
