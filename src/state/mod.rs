//! State - Injectable Ambient State
//!
//! The persisted preference and the reported locale, each behind a trait so the
//! controller can run against in-memory fakes.

pub mod locale_source;
pub mod preference_store;

pub use locale_source::{FixedLocale, LocaleSource, SystemLocale};
pub use preference_store::{JsonFileStore, MemoryStore, PreferenceStore};
