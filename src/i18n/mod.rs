//! i18n - Supported Languages
//!
//! The page ships in exactly two languages. Everything else falls back to Italian.

use std::fmt;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Italian
    #[default]
    It,
    /// English
    En,
}

impl Language {
    /// Every supported language, in button order
    pub const ALL: [Language; 2] = [Language::It, Language::En];

    /// Two-letter code used in storage and DOM attributes
    pub fn code(&self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::It => "Italiano",
            Language::En => "English",
        }
    }

    /// Exact lookup of a supported code. Case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Map a locale tag onto the two-bucket fallback: `en*` is English, anything else Italian.
    ///
    /// The tag is expected to be lowercase already.
    pub fn from_locale_tag(tag: &str) -> Self {
        if tag.starts_with(Language::En.code()) {
            Language::En
        } else {
            Language::It
        }
    }

    /// The other supported language
    pub fn toggled(&self) -> Self {
        match self {
            Language::It => Language::En,
            Language::En => Language::It,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
