//! Translation completeness validation.
//!
//! Checks that every key the page renders resolves to a string in every
//! locale, and reports drift between the default locale and the others.

use crate::i18n::document::kind_of;
use crate::i18n::{pick, Language, LocaleStore, TextKey, TranslationDocument};
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Page keys that would render as their raw path
    pub errors: Vec<String>,

    /// Drift and shape issues that do not affect the page
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation documents.
pub struct TranslationValidator;

// Conventional key names: ASCII letters, digits, '_' and '-'
static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every locale of a store.
    ///
    /// Errors:
    /// - a [`TextKey`] that is missing or not a string in some locale
    ///
    /// Warnings:
    /// - leaf paths present in the default locale but not in another, and
    ///   the reverse
    /// - empty strings and non-string leaves
    /// - object keys containing `.`, which a dotted path cannot address
    /// - object keys that are not plain ASCII identifiers
    pub fn validate_store(store: &LocaleStore) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (language, document) in store.iter() {
            report.merge(Self::validate_document(language, document));
        }

        let default = Language::default();
        let reference = leaf_paths(store.document(default));
        for (language, document) in store.iter() {
            if language == default {
                continue;
            }
            let paths = leaf_paths(document);

            for missing in reference.difference(&paths) {
                report.warnings.push(format!(
                    "'{}' exists in '{}' but is missing from '{}'",
                    missing,
                    default.code(),
                    language.code()
                ));
            }
            for extra in paths.difference(&reference) {
                report.warnings.push(format!(
                    "'{}' exists in '{}' but is missing from '{}'",
                    extra,
                    language.code(),
                    default.code()
                ));
            }
        }

        report
    }

    /// Validate a single document against the page keys.
    pub fn validate_document(language: Language, document: &TranslationDocument) -> ValidationReport {
        let mut report = ValidationReport::new();
        let code = language.code();

        for key in TextKey::ALL {
            match pick(document, key.path()) {
                Some(Value::String(text)) if text.trim().is_empty() => {
                    report
                        .warnings
                        .push(format!("'{}' is empty in '{}'", key.path(), code));
                }
                Some(Value::String(_)) => {}
                Some(other) => report.errors.push(format!(
                    "'{}' in '{}' is {}, expected a string",
                    key.path(),
                    code,
                    kind_of(other)
                )),
                None => report
                    .errors
                    .push(format!("'{}' is missing from '{}'", key.path(), code)),
            }
        }

        let page_paths: BTreeSet<&str> = TextKey::ALL.iter().map(|k| k.path()).collect();
        for (path, value) in document.leaves() {
            if !value.is_string() && !page_paths.contains(path.as_str()) {
                report.warnings.push(format!(
                    "'{}' in '{}' is {}, not a string",
                    path,
                    code,
                    kind_of(value)
                ));
            }
        }

        check_segments(document.root(), "", code, &mut report);

        report
    }

    /// Check whether a single object key can be addressed by a dotted path.
    ///
    /// `.` is the path separator; every other key, including the empty one,
    /// is reachable.
    fn is_addressable_segment(segment: &str) -> bool {
        !segment.contains('.')
    }

    /// Check whether an object key follows the plain identifier convention.
    fn is_conventional_segment(segment: &str) -> bool {
        let regex =
            SEGMENT_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
        regex.is_match(segment)
    }
}

fn leaf_paths(document: &TranslationDocument) -> BTreeSet<String> {
    document.leaves().into_iter().map(|(path, _)| path).collect()
}

fn check_segments(node: &Map<String, Value>, prefix: &str, code: &str, report: &mut ValidationReport) {
    for (key, value) in node {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        let parent = if prefix.is_empty() { "<root>" } else { prefix };
        if !TranslationValidator::is_addressable_segment(key) {
            report.warnings.push(format!(
                "Key '{}' under '{}' in '{}' cannot be addressed by a dotted path",
                key, parent, code
            ));
        } else if !TranslationValidator::is_conventional_segment(key) {
            report.warnings.push(format!(
                "Key '{}' under '{}' in '{}' is not a plain identifier (letters, digits, '_' or '-')",
                key, parent, code
            ));
        }

        if let Value::Object(child) = value {
            check_segments(child, &path, code, report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::resolve;
    use serde_json::json;

    /// A document holding every page key with a placeholder value.
    fn complete_value() -> Value {
        let mut root = Map::new();
        for key in TextKey::ALL {
            let (section, name) = key.path().split_once('.').unwrap();
            let section = root
                .entry(section.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            section
                .as_object_mut()
                .unwrap()
                .insert(name.to_string(), Value::String(format!("text for {}", key)));
        }
        Value::Object(root)
    }

    fn doc(value: Value) -> TranslationDocument {
        TranslationDocument::from_value(value).unwrap()
    }

    // ==================== Embedded Locale Tests ====================

    #[test]
    fn test_embedded_locales_are_clean() {
        let report = TranslationValidator::validate_store(LocaleStore::global());
        assert!(report.is_clean(), "{:#?}", report);
    }

    #[test]
    fn test_every_page_key_resolves_in_every_locale() {
        let store = LocaleStore::global();
        for (language, document) in store.iter() {
            for key in TextKey::ALL {
                assert!(
                    matches!(pick(document, key.path()), Some(Value::String(_))),
                    "{} missing in {}",
                    key,
                    language
                );
            }
        }
    }

    // ==================== Document Tests ====================

    #[test]
    fn test_complete_document_is_clean() {
        let report = TranslationValidator::validate_document(Language::English, &doc(complete_value()));
        assert!(report.is_clean(), "{:#?}", report);
    }

    #[test]
    fn test_missing_page_key_is_error() {
        let mut value = complete_value();
        value["hero"].as_object_mut().unwrap().remove("name");

        let report = TranslationValidator::validate_document(Language::Spanish, &doc(value));
        assert!(report.has_errors());
        assert!(report.errors[0].contains("'hero.name' is missing from 'es'"));
    }

    #[test]
    fn test_non_string_page_key_is_error() {
        let mut value = complete_value();
        value["hero"]["name"] = json!({ "first": "Ada" });

        let report = TranslationValidator::validate_document(Language::French, &doc(value));
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("is object, expected a string"));
    }

    #[test]
    fn test_empty_string_is_warning() {
        let mut value = complete_value();
        value["contact"]["send"] = json!("  ");

        let report = TranslationValidator::validate_document(Language::French, &doc(value));
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("'contact.send' is empty"));
    }

    #[test]
    fn test_extra_non_string_leaf_is_warning() {
        let mut value = complete_value();
        value["footer"] = json!({ "year": 2024 });

        let report = TranslationValidator::validate_document(Language::French, &doc(value));
        assert!(!report.has_errors());
        assert!(report.warnings.iter().any(|w| w.contains("'footer.year'")));
    }

    #[test]
    fn test_dotted_segment_is_warning() {
        let mut value = complete_value();
        value["hero"]["v1.2"] = json!("unreachable");

        let report = TranslationValidator::validate_document(Language::French, &doc(value));
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("Key 'v1.2' under 'hero'")));
    }

    #[test]
    fn test_unusual_but_reachable_segments_are_style_warnings() {
        let mut value = complete_value();
        value["hero"]["my name"] = json!("Ada");
        value["hero"]["été"] = json!("x");
        let document = doc(value);

        assert_eq!(resolve(&document, "hero.my name"), "Ada");
        assert_eq!(resolve(&document, "hero.été"), "x");

        let report = TranslationValidator::validate_document(Language::French, &document);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 2, "{:#?}", report.warnings);
        assert!(report
            .warnings
            .iter()
            .all(|w| w.contains("is not a plain identifier")));
        assert!(!report
            .warnings
            .iter()
            .any(|w| w.contains("cannot be addressed")));
    }

    #[test]
    fn test_addressable_segment_rules() {
        assert!(TranslationValidator::is_addressable_segment("title"));
        assert!(TranslationValidator::is_addressable_segment("my name"));
        assert!(TranslationValidator::is_addressable_segment(""));
        assert!(!TranslationValidator::is_addressable_segment("v1.2"));
    }

    // ==================== Store Parity Tests ====================

    #[test]
    fn test_store_parity_drift_is_warning() {
        let mut spanish = complete_value();
        spanish["projects"]["extra"] = json!("solo en español");
        let mut english = complete_value();
        english["hero"].as_object_mut().unwrap().remove("lead");

        let store = LocaleStore::from_documents(doc(complete_value()), doc(english), doc(spanish));
        let report = TranslationValidator::validate_store(&store);

        assert_eq!(report.errors.len(), 1);
        assert!(report
            .warnings
            .contains(&"'hero.lead' exists in 'fr' but is missing from 'en'".to_string()));
        assert!(report
            .warnings
            .contains(&"'projects.extra' exists in 'es' but is missing from 'fr'".to_string()));
    }

    #[test]
    fn test_empty_store_reports_every_key() {
        let store = LocaleStore::from_documents(
            TranslationDocument::empty(),
            TranslationDocument::empty(),
            TranslationDocument::empty(),
        );
        let report = TranslationValidator::validate_store(&store);
        assert_eq!(report.errors.len(), TextKey::ALL.len() * 3);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }
}
