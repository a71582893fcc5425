//! Internationalization (i18n) module for the portfolio page.
//!
//! All language metadata, translation documents and lookup logic live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: The closed `Language` enum (fr, en, es)
//! - `document`: Nested string trees parsed from `locales/*.json`
//! - `store`: Fixed mapping from each `Language` to its document
//! - `resolver`: Dotted-path lookup with key fallback
//! - `keys`: Typed keys for every string the page renders
//! - `translator`: Lookup function bound to one language
//! - `validator`: Completeness and parity checks across locales
//! - `metrics`: Lookup and fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_site::i18n::{Language, LocaleStore, TextKey, Translator};
//!
//! let t = Translator::new(LocaleStore::global(), Language::from_code("es")?);
//! let title = t.text(TextKey::AboutTitle);
//! let raw = t.t("contact.send");
//! ```

mod document;
mod error;
mod keys;
mod language;
mod metrics;
mod registry;
mod resolver;
mod store;
mod translator;
mod validator;

pub use document::TranslationDocument;
pub use error::I18nError;
pub use keys::TextKey;
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{pick, resolve};
pub use store::LocaleStore;
pub use translator::Translator;
pub use validator::{TranslationValidator, ValidationReport};
