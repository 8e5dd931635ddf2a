//! Language Controller - Resolves, applies and persists the page language
//!
//! On install the controller registers itself as a document-wide click listener
//! and applies the initially resolved language. Afterwards every click on an
//! element (or a descendant of an element) carrying `data-set-lang` switches the
//! page to that language.

use tracing::{debug, info, warn};

use crate::constants::{
    ARIA_PRESSED_ATTR, DEFAULT_LOCALE, DOC_LANG_ATTR, SET_LANG_ATTR, STORAGE_KEY,
};
use crate::domain::Document;
use crate::eventing::{ClickEvent, ClickListener, Page};
use crate::i18n::Language;
use crate::state::{LocaleSource, PreferenceStore};

/// Controller owning the preference store and locale source
#[derive(Debug)]
pub struct LanguagePreferenceController<S, L> {
    store: S,
    locale: L,
    current: Option<Language>,
}

impl<S: PreferenceStore, L: LocaleSource> LanguagePreferenceController<S, L> {
    pub fn new(store: S, locale: L) -> Self {
        Self {
            store,
            locale,
            current: None,
        }
    }

    // ==================== Getters ====================

    /// Last applied language, `None` before the first apply
    pub fn current_language(&self) -> Option<Language> {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ==================== Resolution ====================

    /// Initial language: persisted preference, else reported locale, else Italian
    pub fn resolve_initial_language(&self) -> Language {
        let stored = match self.store.get(STORAGE_KEY) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Preference store unreadable, ignoring saved language");
                String::new()
            }
        };
        if let Some(lang) = Language::from_code(&stored.to_lowercase()) {
            debug!(lang = %lang, "Using saved language");
            return lang;
        }

        let reported = self
            .locale
            .language()
            .filter(|tag| !tag.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let lang = Language::from_locale_tag(&reported.to_lowercase());
        debug!(locale = %reported, lang = %lang, "Using locale language");
        lang
    }

    // ==================== Apply ====================

    /// Apply a raw language code. Unsupported codes are ignored.
    ///
    /// Returns whether the code was applied.
    pub fn apply_language(&mut self, document: &mut Document, code: &str) -> bool {
        match Language::from_code(code) {
            Some(lang) => {
                self.apply(document, lang);
                true
            }
            None => {
                debug!(code, "Ignoring unsupported language code");
                false
            }
        }
    }

    /// Reflect `lang` onto the document root, the store and the toggle buttons
    pub fn apply(&mut self, document: &mut Document, lang: Language) {
        let root = document.root();
        document.set_attribute(root, DOC_LANG_ATTR, lang.code());

        // Storage failures must not keep the page from switching
        if let Err(e) = self.store.set(STORAGE_KEY, lang.code()) {
            warn!(error = %e, lang = %lang, "Failed to persist language");
        }

        for button_lang in Language::ALL {
            if let Some(button) = document.query_first_by_attr(SET_LANG_ATTR, button_lang.code()) {
                let pressed = if button_lang == lang { "true" } else { "false" };
                document.set_attribute(button, ARIA_PRESSED_ATTR, pressed);
            }
        }

        if self.current != Some(lang) {
            info!(lang = %lang, "Language applied");
        }
        self.current = Some(lang);
    }

    /// Switch to the other supported language
    pub fn toggle(&mut self, document: &mut Document) {
        let next = self
            .current
            .unwrap_or_else(|| self.resolve_initial_language())
            .toggled();
        self.apply(document, next);
    }

    // ==================== Events ====================

    /// Apply the language of the nearest `data-set-lang` element around the click target
    pub fn handle_global_click(&mut self, document: &mut Document, event: &ClickEvent) {
        if !document.is_element(event.target) {
            return;
        }
        let Some(trigger) = document.closest(event.target, SET_LANG_ATTR) else {
            return;
        };
        let candidate = match document.get_attribute(trigger, SET_LANG_ATTR) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => return,
        };
        self.apply_language(document, &candidate);
    }
}

impl<S, L> LanguagePreferenceController<S, L>
where
    S: PreferenceStore + 'static,
    L: LocaleSource + 'static,
{
    /// Startup: apply the initial language and listen for clicks on the whole page
    pub fn install(mut self, page: &mut Page) {
        let initial = self.resolve_initial_language();
        self.apply(page.document_mut(), initial);
        page.add_click_listener(Box::new(self));
    }
}

impl<S: PreferenceStore, L: LocaleSource> ClickListener for LanguagePreferenceController<S, L> {
    fn on_click(&mut self, document: &mut Document, event: &ClickEvent) {
        self.handle_global_click(document, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NodeId;
    use crate::error::{Error, Result};
    use crate::state::{FixedLocale, MemoryStore};

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::StorageUnavailable {
                message: "disabled".to_string(),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::StorageUnavailable {
                message: "disabled".to_string(),
            })
        }
    }

    struct Fixture {
        doc: Document,
        it_button: NodeId,
        en_button: NodeId,
        it_label: NodeId,
        plain: NodeId,
    }

    fn fixture() -> Fixture {
        let mut doc = Document::new();
        let root = doc.root();

        let button = |doc: &mut Document, lang: &str| {
            let button = doc.create_element("button");
            doc.set_attribute(button, SET_LANG_ATTR, lang);
            let label = doc.create_element("span");
            doc.append_child(button, label).expect("append label");
            doc.append_child(root, button).expect("append button");
            (button, label)
        };
        let (it_button, it_label) = button(&mut doc, "it");
        let (en_button, _) = button(&mut doc, "en");

        let plain = doc.create_element("p");
        doc.append_child(root, plain).expect("append paragraph");

        Fixture {
            doc,
            it_button,
            en_button,
            it_label,
            plain,
        }
    }

    fn controller(
        store: &MemoryStore,
        locale: Option<&str>,
    ) -> LanguagePreferenceController<MemoryStore, FixedLocale> {
        LanguagePreferenceController::new(store.clone(), FixedLocale(locale.map(String::from)))
    }

    fn pressed(doc: &Document, node: NodeId) -> Option<&str> {
        doc.get_attribute(node, ARIA_PRESSED_ATTR)
    }

    // ==================== Resolution ====================

    #[test]
    fn test_saved_language_is_case_insensitive() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "EN");
        assert_eq!(
            controller(&store, Some("it-IT")).resolve_initial_language(),
            Language::En
        );
    }

    #[test]
    fn test_locale_fallback() {
        let store = MemoryStore::new();
        assert_eq!(controller(&store, Some("en-US")).resolve_initial_language(), Language::En);
        assert_eq!(controller(&store, Some("EN-gb")).resolve_initial_language(), Language::En);
        assert_eq!(controller(&store, Some("fr-FR")).resolve_initial_language(), Language::It);
        assert_eq!(controller(&store, None).resolve_initial_language(), Language::It);
        assert_eq!(controller(&store, Some("")).resolve_initial_language(), Language::It);
    }

    #[test]
    fn test_unsupported_saved_value_falls_through() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "de");
        assert_eq!(controller(&store, Some("en")).resolve_initial_language(), Language::En);
    }

    #[test]
    fn test_resolution_always_supported() {
        let inputs = [
            "", "it", "en", "IT", "En", "fr", "english", "en-US", "  en", "xx-yy", "ítaliano",
        ];
        for saved in inputs {
            for locale in inputs {
                let store = MemoryStore::with_entry(STORAGE_KEY, saved);
                let lang = controller(&store, Some(locale)).resolve_initial_language();
                assert!(Language::ALL.contains(&lang), "{saved:?}/{locale:?} -> {lang:?}");
            }
        }
    }

    #[test]
    fn test_unreadable_store_uses_locale() {
        let ctrl = LanguagePreferenceController::new(BrokenStore, FixedLocale::new("en-AU"));
        assert_eq!(ctrl.resolve_initial_language(), Language::En);
    }

    // ==================== Apply ====================

    #[test]
    fn test_apply_en_updates_everything() {
        let Fixture {
            mut doc,
            it_button,
            en_button,
            ..
        } = fixture();
        let store = MemoryStore::new();
        let mut ctrl = controller(&store, None);

        assert!(ctrl.apply_language(&mut doc, "en"));
        assert_eq!(doc.get_attribute(doc.root(), DOC_LANG_ATTR), Some("en"));
        assert_eq!(store.peek(STORAGE_KEY).as_deref(), Some("en"));
        assert_eq!(pressed(&doc, en_button), Some("true"));
        assert_eq!(pressed(&doc, it_button), Some("false"));
        assert_eq!(ctrl.current_language(), Some(Language::En));
    }

    #[test]
    fn test_apply_unsupported_is_noop() {
        let Fixture {
            mut doc,
            it_button,
            en_button,
            ..
        } = fixture();
        let store = MemoryStore::new();
        let mut ctrl = controller(&store, None);
        ctrl.apply_language(&mut doc, "it");

        for code in ["fr", "EN", ""] {
            assert!(!ctrl.apply_language(&mut doc, code));
        }
        assert_eq!(doc.get_attribute(doc.root(), DOC_LANG_ATTR), Some("it"));
        assert_eq!(store.peek(STORAGE_KEY).as_deref(), Some("it"));
        assert_eq!(pressed(&doc, it_button), Some("true"));
        assert_eq!(pressed(&doc, en_button), Some("false"));
    }

    #[test]
    fn test_apply_unsupported_on_fresh_page_touches_nothing() {
        let mut doc = Document::new();
        let store = MemoryStore::new();
        let mut ctrl = controller(&store, None);

        assert!(!ctrl.apply_language(&mut doc, "fr"));
        assert_eq!(doc.get_attribute(doc.root(), DOC_LANG_ATTR), None);
        assert_eq!(store.peek(STORAGE_KEY), None);
        assert_eq!(ctrl.current_language(), None);
    }

    #[test]
    fn test_apply_without_buttons() {
        let mut doc = Document::new();
        let store = MemoryStore::new();
        let mut ctrl = controller(&store, None);

        assert!(ctrl.apply_language(&mut doc, "en"));
        assert_eq!(doc.get_attribute(doc.root(), DOC_LANG_ATTR), Some("en"));
        assert_eq!(store.peek(STORAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_apply_with_one_button_missing() {
        let mut doc = Document::new();
        let root = doc.root();
        let en_button = doc.create_element("button");
        doc.set_attribute(en_button, SET_LANG_ATTR, "en");
        doc.append_child(root, en_button).expect("append");

        let store = MemoryStore::new();
        controller(&store, None).apply_language(&mut doc, "it");
        assert_eq!(pressed(&doc, en_button), Some("false"));
        assert_eq!(doc.get_attribute(root, DOC_LANG_ATTR), Some("it"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let store = MemoryStore::new();
        let mut once = fixture();
        controller(&store, None).apply_language(&mut once.doc, "it");

        let twice_store = MemoryStore::new();
        let mut twice = fixture();
        let mut ctrl = controller(&twice_store, None);
        ctrl.apply_language(&mut twice.doc, "it");
        ctrl.apply_language(&mut twice.doc, "it");

        for (a, b) in [
            (once.doc.root(), twice.doc.root()),
            (once.it_button, twice.it_button),
            (once.en_button, twice.en_button),
        ] {
            assert_eq!(
                format!("{:?}", once.doc.kind(a)),
                format!("{:?}", twice.doc.kind(b))
            );
        }
        assert_eq!(store.peek(STORAGE_KEY), twice_store.peek(STORAGE_KEY));
    }

    #[test]
    fn test_store_write_failure_still_updates_page() {
        let Fixture {
            mut doc, en_button, ..
        } = fixture();
        let mut ctrl = LanguagePreferenceController::new(BrokenStore, FixedLocale::unavailable());

        assert!(ctrl.apply_language(&mut doc, "en"));
        assert_eq!(doc.get_attribute(doc.root(), DOC_LANG_ATTR), Some("en"));
        assert_eq!(pressed(&doc, en_button), Some("true"));
    }

    #[test]
    fn test_toggle() {
        let Fixture { mut doc, .. } = fixture();
        let store = MemoryStore::new();
        let mut ctrl = controller(&store, Some("en-US"));

        ctrl.toggle(&mut doc);
        assert_eq!(ctrl.current_language(), Some(Language::It));
        ctrl.toggle(&mut doc);
        assert_eq!(ctrl.current_language(), Some(Language::En));
        assert_eq!(store.peek(STORAGE_KEY).as_deref(), Some("en"));
    }

    // ==================== Clicks ====================

    #[test]
    fn test_click_on_descendant_applies_marker_language() {
        let Fixture {
            mut doc,
            it_button,
            en_button,
            it_label,
            ..
        } = fixture();
        let store = MemoryStore::new();
        let mut ctrl = controller(&store, None);
        ctrl.apply_language(&mut doc, "en");

        ctrl.handle_global_click(&mut doc, &ClickEvent::new(it_label));
        assert_eq!(doc.get_attribute(doc.root(), DOC_LANG_ATTR), Some("it"));
        assert_eq!(store.peek(STORAGE_KEY).as_deref(), Some("it"));
        assert_eq!(pressed(&doc, it_button), Some("true"));
        assert_eq!(pressed(&doc, en_button), Some("false"));
    }

    #[test]
    fn test_click_outside_markers_changes_nothing() {
        let Fixture {
            mut doc,
            en_button,
            plain,
            ..
        } = fixture();
        let store = MemoryStore::new();
        let mut ctrl = controller(&store, None);
        ctrl.apply_language(&mut doc, "en");

        ctrl.handle_global_click(&mut doc, &ClickEvent::new(plain));
        let root = doc.root();
        ctrl.handle_global_click(&mut doc, &ClickEvent::new(root));
        assert_eq!(doc.get_attribute(doc.root(), DOC_LANG_ATTR), Some("en"));
        assert_eq!(store.peek(STORAGE_KEY).as_deref(), Some("en"));
        assert_eq!(pressed(&doc, en_button), Some("true"));
    }

    #[test]
    fn test_click_on_text_node_is_ignored() {
        let Fixture {
            mut doc, it_button, ..
        } = fixture();
        let text = doc.create_text("Italiano");
        doc.append_child(it_button, text).expect("append text");

        let store = MemoryStore::new();
        let mut ctrl = controller(&store, None);
        ctrl.handle_global_click(&mut doc, &ClickEvent::new(text));
        assert_eq!(store.peek(STORAGE_KEY), None);
        assert_eq!(ctrl.current_language(), None);
    }

    #[test]
    fn test_click_on_empty_or_unsupported_marker_is_ignored() {
        let mut doc = Document::new();
        let root = doc.root();
        let empty = doc.create_element("a");
        doc.set_attribute(empty, SET_LANG_ATTR, "");
        let french = doc.create_element("a");
        doc.set_attribute(french, SET_LANG_ATTR, "fr");
        doc.append_child(root, empty).expect("append");
        doc.append_child(root, french).expect("append");

        let store = MemoryStore::new();
        let mut ctrl = controller(&store, None);
        ctrl.handle_global_click(&mut doc, &ClickEvent::new(empty));
        ctrl.handle_global_click(&mut doc, &ClickEvent::new(french));
        assert_eq!(doc.get_attribute(root, DOC_LANG_ATTR), None);
        assert_eq!(store.peek(STORAGE_KEY), None);
    }

    #[test]
    fn test_nearest_marker_wins() {
        let mut doc = Document::new();
        let root = doc.root();
        let outer = doc.create_element("div");
        doc.set_attribute(outer, SET_LANG_ATTR, "it");
        let inner = doc.create_element("button");
        doc.set_attribute(inner, SET_LANG_ATTR, "en");
        doc.append_child(root, outer).expect("append");
        doc.append_child(outer, inner).expect("append");

        let store = MemoryStore::new();
        let mut ctrl = controller(&store, None);
        ctrl.handle_global_click(&mut doc, &ClickEvent::new(inner));
        assert_eq!(ctrl.current_language(), Some(Language::En));
    }
}
