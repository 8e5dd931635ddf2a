//! Page Constants
//!
//! Storage key and DOM attribute names shared by the controller and the page model.

/// Key under which the language preference is persisted
pub const STORAGE_KEY: &str = "injecare_lang";

/// Attribute on the document root holding the current language
pub const DOC_LANG_ATTR: &str = "data-lang";

/// Marker attribute on elements that select a language when clicked
pub const SET_LANG_ATTR: &str = "data-set-lang";

/// Pressed state attribute on the toggle buttons
pub const ARIA_PRESSED_ATTR: &str = "aria-pressed";

/// Locale literal assumed when the platform reports none
pub const DEFAULT_LOCALE: &str = "it";

/// Tag name of the document root element
pub const ROOT_TAG: &str = "html";

/// File name of the JSON preference store
pub const PREFERENCES_FILE: &str = "preferences.json";

/// File name of the optional TOML configuration
pub const CONFIG_FILE: &str = "config.toml";

/// Project directory identifiers (qualifier, organization, application)
pub const PROJECT_QUALIFIER: &str = "com";
pub const PROJECT_ORGANIZATION: &str = "injecare";
pub const PROJECT_APPLICATION: &str = "injecare-lang";
