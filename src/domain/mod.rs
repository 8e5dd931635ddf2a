//! Domain Models
//!
//! The page document and application configuration.

pub mod config;
pub mod document;

pub use config::AppConfig;
pub use document::{Document, NodeId, NodeKind};
