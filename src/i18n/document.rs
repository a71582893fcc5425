//! Translation documents: nested string trees, one per language.

use crate::i18n::I18nError;
use serde_json::{Map, Value};

/// The display strings of one language.
///
/// Internal nodes are JSON objects, leaves should be strings. The shape is
/// not enforced beyond a root object; the validator reports anything else.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationDocument {
    root: Map<String, Value>,
}

impl TranslationDocument {
    /// Parse a document from JSON source.
    pub fn parse(src: &str) -> Result<Self, I18nError> {
        let value: Value = serde_json::from_str(src)?;
        Self::from_value(value)
    }

    /// Wrap an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, I18nError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(I18nError::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }

    /// A document with no entries; every lookup falls back to its key.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// All non-object nodes with their dotted paths, in key order.
    ///
    /// Empty objects contribute no entries.
    pub fn leaves(&self) -> Vec<(String, &Value)> {
        let mut out = Vec::new();
        collect_leaves(&self.root, &mut String::new(), &mut out);
        out
    }
}

fn collect_leaves<'a>(
    node: &'a Map<String, Value>,
    prefix: &mut String,
    out: &mut Vec<(String, &'a Value)>,
) {
    for (key, value) in node {
        let restore = prefix.len();
        if !prefix.is_empty() {
            prefix.push('.');
        }
        prefix.push_str(key);

        match value {
            Value::Object(child) => collect_leaves(child, prefix, out),
            leaf => out.push((prefix.clone(), leaf)),
        }

        prefix.truncate(restore);
    }
}

/// Human-readable JSON type name, for diagnostics.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let doc = TranslationDocument::parse(r#"{"hero": {"name": "Ada"}}"#).unwrap();
        assert!(!doc.is_empty());
        assert!(doc.root().contains_key("hero"));
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = TranslationDocument::parse(r#"["a", "b"]"#).unwrap_err();
        assert!(matches!(err, I18nError::NotAnObject { found: "array" }));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = TranslationDocument::parse("{ not json").unwrap_err();
        assert!(matches!(err, I18nError::Json(_)));
    }

    #[test]
    fn test_empty_document() {
        let doc = TranslationDocument::empty();
        assert!(doc.is_empty());
        assert!(doc.leaves().is_empty());
    }

    #[test]
    fn test_leaves_are_dotted_paths() {
        let doc = TranslationDocument::from_value(json!({
            "a": { "b": { "c": "X" }, "d": "Y" },
            "e": 3,
            "f": {}
        }))
        .unwrap();

        let paths: Vec<String> = doc.leaves().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["a.b.c", "a.d", "e"]);
    }

    #[test]
    fn test_leaves_keep_non_string_values() {
        let doc = TranslationDocument::from_value(json!({ "n": 1, "s": "ok" })).unwrap();
        let leaves = doc.leaves();
        assert_eq!(leaves.len(), 2);
        assert!(leaves.iter().any(|(p, v)| p == "n" && v.is_number()));
    }
}
