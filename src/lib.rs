//! Injecare Language Toggle Library
//!
//! Resolves the page language from the saved preference or the user's locale,
//! reflects it onto the document and the toggle buttons, and persists every
//! change for the next visit.

pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod state;

pub use features::language::LanguagePreferenceController;
pub use i18n::Language;
