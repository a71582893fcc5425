//! Locale store: the fixed mapping from [`Language`] to its document.
//!
//! Documents are embedded at compile time from `locales/*.json`. The store
//! holds one slot per [`Language`] variant, so every language always has a
//! document.

use crate::i18n::{I18nError, Language, TranslationDocument};
use std::sync::OnceLock;
use tracing::error;

const FRENCH_SOURCE: &str = include_str!("../../locales/fr.json");
const ENGLISH_SOURCE: &str = include_str!("../../locales/en.json");
const SPANISH_SOURCE: &str = include_str!("../../locales/es.json");

/// Global store instance (initialized lazily)
static STORE: OnceLock<LocaleStore> = OnceLock::new();

/// Translation documents for every supported language.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    documents: [TranslationDocument; 3],
}

impl LocaleStore {
    /// Get the global store built from the embedded documents.
    pub fn global() -> &'static LocaleStore {
        STORE.get_or_init(LocaleStore::embedded)
    }

    /// Build a store from the embedded documents.
    pub fn embedded() -> Self {
        Self::from_sources(Language::ALL.map(embedded_source))
    }

    /// Leniently parse one source per language, in [`Language::ALL`] order.
    ///
    /// A document that fails to parse is replaced by an empty one (and
    /// logged), so that language renders its keys instead of aborting.
    fn from_sources(sources: [&str; 3]) -> Self {
        let documents = Language::ALL.map(|language| {
            TranslationDocument::parse(sources[language.index()]).unwrap_or_else(|e| {
                error!(
                    "Embedded translations for '{}' are invalid, keys will be shown: {}",
                    language.code(),
                    e
                );
                TranslationDocument::empty()
            })
        });

        Self { documents }
    }

    /// Strictly parse the embedded documents.
    pub fn load() -> Result<Self, I18nError> {
        let mut documents: [TranslationDocument; 3] = Default::default();
        for language in Language::ALL {
            documents[language.index()] = TranslationDocument::parse(embedded_source(language))
                .map_err(|e| I18nError::Locale {
                    code: language.code(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self { documents })
    }

    /// Build a store from explicit documents.
    pub fn from_documents(
        french: TranslationDocument,
        english: TranslationDocument,
        spanish: TranslationDocument,
    ) -> Self {
        Self {
            documents: [french, english, spanish],
        }
    }

    /// Get the document of a language.
    pub fn document(&self, language: Language) -> &TranslationDocument {
        &self.documents[language.index()]
    }

    /// Iterate over `(language, document)` pairs in [`Language::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &TranslationDocument)> {
        Language::ALL
            .into_iter()
            .map(move |language| (language, self.document(language)))
    }
}

fn embedded_source(language: Language) -> &'static str {
    match language {
        Language::French => FRENCH_SOURCE,
        Language::English => ENGLISH_SOURCE,
        Language::Spanish => SPANISH_SOURCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::resolve;
    use serde_json::json;

    #[test]
    fn test_embedded_documents_parse() {
        let store = LocaleStore::load().expect("embedded locales should be valid JSON objects");
        for (_, document) in store.iter() {
            assert!(!document.is_empty());
        }
    }

    #[test]
    fn test_global_returns_singleton() {
        assert!(std::ptr::eq(LocaleStore::global(), LocaleStore::global()));
    }

    #[test]
    fn test_each_language_has_its_own_document() {
        let store = LocaleStore::global();
        let fr = resolve(store.document(Language::French), "about.title");
        let en = resolve(store.document(Language::English), "about.title");
        let es = resolve(store.document(Language::Spanish), "about.title");

        assert_eq!(fr, "À propos");
        assert_eq!(en, "About me");
        assert_eq!(es, "Sobre mí");
    }

    #[test]
    fn test_from_documents_places_by_language() {
        let doc = |text: &str| TranslationDocument::from_value(json!({ "k": text })).unwrap();
        let store = LocaleStore::from_documents(doc("fr"), doc("en"), doc("es"));

        for language in Language::ALL {
            assert_eq!(resolve(store.document(language), "k"), language.code());
        }
    }

    #[test]
    fn test_broken_source_becomes_empty_document() {
        let store = LocaleStore::from_sources([FRENCH_SOURCE, "{ not json", SPANISH_SOURCE]);

        assert!(store.document(Language::English).is_empty());
        assert_eq!(
            resolve(store.document(Language::English), "about.title"),
            "about.title"
        );
        assert_eq!(resolve(store.document(Language::French), "about.title"), "À propos");
        assert_eq!(resolve(store.document(Language::Spanish), "about.title"), "Sobre mí");
    }

    #[test]
    fn test_non_object_source_becomes_empty_document() {
        let store = LocaleStore::from_sources(["[1, 2]", ENGLISH_SOURCE, SPANISH_SOURCE]);

        assert!(store.document(Language::French).is_empty());
        assert!(!store.document(Language::English).is_empty());
    }

    #[test]
    fn test_embedded_matches_strict_load() {
        let lenient = LocaleStore::embedded();
        let strict = LocaleStore::load().unwrap();
        for language in Language::ALL {
            assert_eq!(lenient.document(language), strict.document(language));
        }
    }

    #[test]
    fn test_iter_covers_all_languages() {
        let store = LocaleStore::global();
        let languages: Vec<Language> = store.iter().map(|(l, _)| l).collect();
        assert_eq!(languages, Language::ALL.to_vec());
    }
}
