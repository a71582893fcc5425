//! Translation lookup metrics.
//!
//! Counts resolved lookups, lookups that fell back to the raw key, and
//! language switches applied by the controller.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
pub struct TranslationMetrics {
    /// Lookups that ended on a string leaf
    resolved: AtomicUsize,

    /// Lookups that returned the key because the path was missing or not a string
    fallbacks: AtomicUsize,

    /// Active-language changes applied
    language_switches: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(|| TranslationMetrics {
            resolved: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            language_switches: AtomicUsize::new(0),
        })
    }

    pub fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_switch(&self) {
        self.language_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolved(&self) -> usize {
        self.resolved.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn language_switches(&self) -> usize {
        self.language_switches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let resolved = self.resolved();
        let fallbacks = self.fallbacks();
        let lookups = resolved + fallbacks;
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            resolved,
            fallbacks,
            fallback_rate,
            language_switches: self.language_switches(),
        }
    }
}

/// Snapshot of the translation counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total lookups
    pub lookups: usize,

    /// Lookups that found a string
    pub resolved: usize,

    /// Lookups that fell back to the key
    pub fallbacks: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,

    /// Language switches applied
    pub language_switches: usize,
}
