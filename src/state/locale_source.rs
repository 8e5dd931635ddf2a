//! LocaleSource - Reported User Locale

use locale_config::Locale;

/// Source of the user's preferred locale tag (e.g. "en-US")
pub trait LocaleSource {
    /// The reported tag, or `None` when the platform reports nothing
    fn language(&self) -> Option<String>;
}

/// Locale reported by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn language(&self) -> Option<String> {
        let locale = Locale::user_default();

        // Prefer the message language, else the first tag
        let range = locale
            .tags()
            .find(|(category, _)| *category == Some("messages"))
            .or_else(|| locale.tags().next())
            .map(|(_, range)| range.to_string())?;

        if range.is_empty() { None } else { Some(range) }
    }
}

/// Fixed locale, used for overrides and tests
#[derive(Debug, Clone, Default)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    /// A source reporting no locale at all
    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl LocaleSource for FixedLocale {
    fn language(&self) -> Option<String> {
        self.0.clone()
    }
}

impl<L: LocaleSource + ?Sized> LocaleSource for Box<L> {
    fn language(&self) -> Option<String> {
        (**self).language()
    }
}
