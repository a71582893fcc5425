//! Language registry: Single source of truth for language metadata.
//!
//! The registry is a lazily initialized `OnceLock` singleton holding one
//! [`LanguageConfig`] per [`Language`] variant, in [`Language::ALL`] order.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// ISO 639-1 language code (e.g., "fr", "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "Français")
    pub native_name: &'static str,

    /// Whether this is the default language (exactly one should be true)
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get the configuration of a language.
    ///
    /// Total: every [`Language`] variant has an entry at its index.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        &self.languages[language.index()]
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one default language
    /// (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// Default language configurations, in [`Language::ALL`] order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::French,
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: true,
        },
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
        },
        LanguageConfig {
            language: Language::Spanish,
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
        },
    ]
}
