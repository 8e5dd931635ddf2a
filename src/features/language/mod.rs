//! Language toggle feature

pub mod controller;

pub use controller::LanguagePreferenceController;
