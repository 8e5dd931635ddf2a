//! Features - Page behaviors
//!
//! Each feature owns a controller that reacts to page events.

pub mod language;
