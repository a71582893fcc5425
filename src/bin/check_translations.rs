//! Check that every locale provides every string the page renders.
//!
//! Exits with a non-zero status when a page key is missing or not a string
//! in any locale. Drift between locales is reported as warnings.

use anyhow::{bail, Result};
use portfolio_site::i18n::{Language, LocaleStore, TextKey, TranslationValidator};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .init();

    // Strict load: a locale that is not valid JSON is an error here.
    let store = LocaleStore::load()?;
    info!(
        "Checking {} keys across {} locales",
        TextKey::ALL.len(),
        Language::ALL.len()
    );

    for (language, document) in store.iter() {
        info!(
            "{} ({}): {} translated strings",
            language.name(),
            language,
            document.leaves().len()
        );
    }

    let report = TranslationValidator::validate_store(&store);

    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for error in &report.errors {
        println!("error: {}", error);
    }

    if report.has_errors() {
        bail!("{} translation error(s)", report.errors.len());
    }

    println!(
        "✓ All {} keys present in {}",
        TextKey::ALL.len(),
        Language::ALL
            .iter()
            .map(|l| l.code())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(())
}
