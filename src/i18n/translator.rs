//! Per-language lookup function handed to the page renderer.

use crate::i18n::{pick, Language, LocaleStore, TextKey, TranslationDocument, TranslationMetrics};
use serde_json::Value;
use tracing::debug;

/// Lookup function bound to one language's document.
///
/// Cheap to build and `Copy`; obtain a fresh one whenever the active
/// language changes.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    language: Language,
    document: &'a TranslationDocument,
}

impl<'a> Translator<'a> {
    pub fn new(store: &'a LocaleStore, language: Language) -> Self {
        Self {
            language,
            document: store.document(language),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve a dotted key, falling back to the key itself.
    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.lookup(key)
    }

    /// Resolve a typed page key.
    pub fn text(&self, key: TextKey) -> &'a str {
        self.lookup(key.path())
    }

    /// Same result as [`resolve`](crate::i18n::resolve), recorded in the
    /// global metrics.
    fn lookup<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        match pick(self.document, key) {
            Some(Value::String(text)) => {
                TranslationMetrics::global().record_resolved();
                text.as_str()
            }
            other => {
                debug!(
                    "Translation key '{}' fell back in '{}' ({})",
                    key,
                    self.language,
                    if other.is_some() { "not a string" } else { "missing" }
                );
                TranslationMetrics::global().record_fallback();
                key
            }
        }
    }
}
