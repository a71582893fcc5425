use thiserror::Error;

/// Errors raised while loading translation documents.
///
/// Lookups never produce these; a missing key falls back to the key itself.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("translation document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("translation document root must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("locale '{code}' failed to load: {message}")]
    Locale { code: &'static str, message: String },
}
