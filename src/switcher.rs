//! Language-switch control used by the page's language links.

use crate::events::{LanguageBus, LanguageChanged};
use crate::i18n::Language;
use crate::preference::{write_language, PreferenceStore, PREFERENCE_KEY};
use std::rc::Rc;
use tracing::{info, warn};

/// Language-switch control: persists a choice and announces it.
///
/// This is an emitter only; controllers pick the change up from the bus.
pub struct LanguageSwitcher {
    preferences: Rc<dyn PreferenceStore>,
    bus: LanguageBus,
}

impl LanguageSwitcher {
    pub fn new(preferences: Rc<dyn PreferenceStore>, bus: LanguageBus) -> Self {
        Self { preferences, bus }
    }

    /// Remember `language` and notify listeners with it as payload.
    ///
    /// A failed write is logged; the notification is sent regardless since
    /// it carries the language itself. Returns the number of listeners
    /// notified.
    pub fn switch_to(&self, language: Language) -> usize {
        if let Err(e) = write_language(self.preferences.as_ref(), language) {
            warn!("Could not persist language '{}': {}", language, e);
        }
        info!("Switching language to {} ({})", language.native_name(), language);
        self.bus.emit(&LanguageChanged::to(language))
    }

    /// Forget the stored choice and notify listeners without a payload.
    pub fn reset(&self) -> usize {
        if let Err(e) = self.preferences.remove(PREFERENCE_KEY) {
            warn!("Could not clear language preference: {}", e);
        }
        self.bus.emit(&LanguageChanged::without_payload())
    }
}
