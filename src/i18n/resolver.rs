//! Dotted-path lookup into a [`TranslationDocument`].
//!
//! Both functions are pure; counting and logging of fallbacks happen in
//! [`Translator`](crate::i18n::Translator).

use crate::i18n::TranslationDocument;
use serde_json::Value;

/// Walk `doc` along the `.`-separated segments of `key`.
///
/// Returns `None` as soon as the current node is not an object or lacks the
/// next segment. An empty key is a single empty segment.
pub fn pick<'a>(doc: &'a TranslationDocument, key: &str) -> Option<&'a Value> {
    let mut segments = key.split('.');
    let first = segments.next()?;
    let mut current = doc.root().get(first)?;

    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }

    Some(current)
}

/// Resolve `key` to its display string, or return `key` unchanged.
///
/// A path that is absent, or that ends on a non-string value (such as a
/// nested object), falls back to the key so missing translations stay
/// visible on the page.
pub fn resolve<'a>(doc: &'a TranslationDocument, key: &'a str) -> &'a str {
    pick(doc, key).and_then(Value::as_str).unwrap_or(key)
}
