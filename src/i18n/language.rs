//! Language type: the closed set of locales the page is published in.
//!
//! Every variant has exactly one translation document in the
//! [`LocaleStore`](crate::i18n::LocaleStore) and one entry in the
//! [`LanguageRegistry`](crate::i18n::LanguageRegistry).

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A supported page language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    French,
    English,
    Spanish,
}

impl Language {
    /// All supported languages, in registry order.
    pub const ALL: [Language; 3] = [Language::French, Language::English, Language::Spanish];

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "fr", "en", "es")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code names a supported language
    /// * `Err` for any other value, including the empty string
    ///
    /// # Example
    /// ```ignore
    /// let spanish = Language::from_code("es")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(config.language),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Position of this language in [`Language::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            Language::French => 0,
            Language::English => 1,
            Language::Spanish => 2,
        }
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(*self)
    }

    /// Get the English name of the language (e.g., "French").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Français").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the language used before any preference is known.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        LanguageRegistry::get().default_language().language
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
