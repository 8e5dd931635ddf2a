//! Eventing - Click events and their dispatch

mod app_event;
mod page;

pub use app_event::ClickEvent;
pub use page::{ClickListener, Page};
