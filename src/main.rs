//! Injecare Language Toggle - Demo Entry Point
//!
//! Builds a page with an Italian and an English toggle button, installs the
//! language controller, then replays each command-line argument as a click:
//! `it` / `en` click the matching button label, anything else clicks body text.

use std::collections::BTreeMap;

use anyhow::Result;
use injecare_lang::LanguagePreferenceController;
use injecare_lang::constants::{ARIA_PRESSED_ATTR, DOC_LANG_ATTR, SET_LANG_ATTR, STORAGE_KEY};
use injecare_lang::domain::{AppConfig, Document, NodeId};
use injecare_lang::eventing::Page;
use injecare_lang::helpers::{apply_log_level, init_tracing};
use injecare_lang::i18n::Language;
use injecare_lang::state::{FixedLocale, JsonFileStore, LocaleSource, PreferenceStore, SystemLocale};
use serde::Serialize;

/// Click targets of the demo page
struct PageTargets {
    labels: BTreeMap<&'static str, NodeId>,
    body_text: NodeId,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    document_lang: Option<&'a str>,
    stored_lang: Option<String>,
    pressed: BTreeMap<&'static str, Option<&'a str>>,
}

fn build_page() -> Result<(Page, PageTargets)> {
    let mut doc = Document::new();
    let body = doc.create_element("body");
    doc.append_child(doc.root(), body)?;

    let nav = doc.create_element("nav");
    doc.append_child(body, nav)?;

    let mut labels = BTreeMap::new();
    for lang in Language::ALL {
        let button = doc.create_element("button");
        doc.set_attribute(button, SET_LANG_ATTR, lang.code());
        let label = doc.create_element("span");
        let text = doc.create_text(lang.display_name());
        doc.append_child(label, text)?;
        doc.append_child(button, label)?;
        doc.append_child(nav, button)?;
        labels.insert(lang.code(), label);
    }

    let body_text = doc.create_element("p");
    doc.append_child(body, body_text)?;

    Ok((Page::new(doc), PageTargets { labels, body_text }))
}

fn main() -> Result<()> {
    let log_filter = init_tracing();

    let config = AppConfig::try_load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Using default configuration");
        AppConfig::default()
    });
    if let Some(level) = config.log_level.as_deref() {
        apply_log_level(&log_filter, level);
    }

    tracing::info!("Starting Injecare language toggle...");

    let store = match config.store_path {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::in_data_dir()?,
    };
    tracing::info!(path = ?store.path(), "Using preference file");

    let locale: Box<dyn LocaleSource> = match config.locale_override {
        Some(tag) => Box::new(FixedLocale::new(tag)),
        None => Box::new(SystemLocale),
    };

    let (mut page, targets) = build_page()?;
    LanguagePreferenceController::new(store.clone(), locale).install(&mut page);

    for arg in std::env::args().skip(1) {
        let target = targets
            .labels
            .get(arg.as_str())
            .copied()
            .unwrap_or(targets.body_text);
        page.click(target);
    }

    let doc = page.document();
    let pressed = Language::ALL
        .into_iter()
        .map(|lang| {
            let state = doc
                .query_first_by_attr(SET_LANG_ATTR, lang.code())
                .and_then(|button| doc.get_attribute(button, ARIA_PRESSED_ATTR));
            (lang.code(), state)
        })
        .collect();

    let snapshot = Snapshot {
        document_lang: doc.get_attribute(doc.root(), DOC_LANG_ATTR),
        stored_lang: store.get(STORAGE_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Preference file unreadable");
            None
        }),
        pressed,
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
