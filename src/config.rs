use crate::i18n::Language;
use crate::page::Profile;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Output
    pub output_dir: PathBuf,
    pub render_all_locales: bool,

    // Language
    pub preference_file: PathBuf,
    pub language: Option<Language>,

    // Page content
    pub profile: Profile,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Profile::default();

        Ok(Self {
            // Output
            output_dir: std::env::var("SITE_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("dist")),
            render_all_locales: match std::env::var("SITE_RENDER_ALL") {
                Ok(v) => parse_bool(&v).context("SITE_RENDER_ALL must be true or false")?,
                Err(_) => true,
            },

            // Language - preference file mirrors the browser's local storage
            preference_file: std::env::var("SITE_PREFERENCE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".site_prefs.json")),
            language: match std::env::var("SITE_LANG") {
                Ok(code) if !code.trim().is_empty() => Some(
                    Language::from_code(code.trim())
                        .context("SITE_LANG must be one of: fr, en, es")?,
                ),
                _ => None,
            },

            // Page content
            profile: Profile {
                email: env_or("SITE_EMAIL", defaults.email),
                phone: env_or("SITE_PHONE", defaults.phone),
                linkedin_url: env_or("SITE_LINKEDIN_URL", defaults.linkedin_url),
                linkedin_label: env_or("SITE_LINKEDIN_LABEL", defaults.linkedin_label),
                cv_path: env_or("SITE_CV_PATH", defaults.cv_path),
                photo_path: env_or("SITE_PHOTO_PATH", defaults.photo_path),
                report_path: env_or("SITE_REPORT_PATH", defaults.report_path),
                stylesheet: env_or("SITE_STYLESHEET", defaults.stylesheet),
            },
        })
    }
}

fn env_or(name: &str, default: String) -> String {
    std::env::var(name).unwrap_or(default)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
