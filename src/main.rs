use anyhow::{Context, Result};
use portfolio_site::config::Config;
use portfolio_site::controller::LanguageController;
use portfolio_site::events::LanguageBus;
use portfolio_site::i18n::{
    Language, LocaleStore, TranslationMetrics, TranslationValidator, Translator,
};
use portfolio_site::page::render_page;
use portfolio_site::preference::{FilePreferenceStore, PreferenceStore};
use portfolio_site::switcher::LanguageSwitcher;
use std::path::Path;
use std::rc::Rc;
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .init();

    info!("Starting portfolio render");

    let config = Config::from_env()?;
    let locales = LocaleStore::global();

    // Missing translations still render (as their keys), so only warn here.
    let report = TranslationValidator::validate_store(locales);
    for error in &report.errors {
        warn!("Translation error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Translation warning: {}", warning);
    }

    let preferences: Rc<dyn PreferenceStore> =
        Rc::new(FilePreferenceStore::new(&config.preference_file));
    let bus = LanguageBus::new();

    let controller = LanguageController::activate(locales, Rc::clone(&preferences), &bus);
    let language = controller.page_ready();
    info!(
        "Preferred language: {} ({})",
        language.native_name(),
        language
    );

    if let Some(requested) = config.language {
        LanguageSwitcher::new(Rc::clone(&preferences), bus.clone()).switch_to(requested);
    }

    let index = render_page(&controller.translator(), &config.profile);
    write_page(&config.output_dir.join("index.html"), &index)?;
    info!(
        "✓ Wrote index.html in {}",
        controller.active_language().native_name()
    );

    if config.render_all_locales {
        for language in Language::ALL {
            let html = render_page(&Translator::new(locales, language), &config.profile);
            write_page(
                &config.output_dir.join(language.code()).join("index.html"),
                &html,
            )?;
        }
        info!("✓ Wrote {} localized pages", Language::ALL.len());
    }

    let metrics = TranslationMetrics::global().report();
    info!(
        "Rendered with {} lookups ({} fell back, {:.1}%)",
        metrics.lookups, metrics.fallbacks, metrics.fallback_rate
    );
    debug!("Metrics: {}", serde_json::to_string(&metrics)?);

    Ok(())
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
}
