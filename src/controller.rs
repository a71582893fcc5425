//! Active-language controller.
//!
//! Tracks which [`Language`] is in effect for a page session:
//!
//! 1. starts at the default language and subscribes to the notification bus
//!    when activated,
//! 2. adopts the persisted preference on [`LanguageController::page_ready`],
//! 3. follows every [`LanguageChanged`] notification: a valid payload wins,
//!    otherwise the preference is re-read, otherwise the default applies,
//! 4. releases its subscription exactly once on teardown.

use crate::events::{LanguageBus, LanguageChanged, Subscription};
use crate::i18n::{Language, LocaleStore, TranslationMetrics, Translator};
use crate::preference::{read_language, PreferenceStore};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

pub struct LanguageController<'s> {
    locales: &'s LocaleStore,
    preferences: Rc<dyn PreferenceStore>,
    active: Rc<Cell<Language>>,
    subscription: Option<Subscription>,
}

impl<'s> LanguageController<'s> {
    /// Start a session at the default language, listening on `bus`.
    pub fn activate(
        locales: &'s LocaleStore,
        preferences: Rc<dyn PreferenceStore>,
        bus: &LanguageBus,
    ) -> Self {
        let active = Rc::new(Cell::new(Language::default()));

        let subscription = {
            let active = Rc::clone(&active);
            let preferences = Rc::clone(&preferences);
            bus.subscribe(move |event| {
                let next = language_for_event(event, preferences.as_ref());
                apply(&active, next);
            })
        };

        debug!("Language controller activated at '{}'", active.get());

        Self {
            locales,
            preferences,
            active,
            subscription: Some(subscription),
        }
    }

    /// Adopt the persisted preference, if it names a supported language.
    pub fn page_ready(&self) -> Language {
        if let Some(language) = read_language(self.preferences.as_ref()) {
            apply(&self.active, language);
        }
        self.active.get()
    }

    pub fn active_language(&self) -> Language {
        self.active.get()
    }

    /// Lookup function for the current language.
    ///
    /// Translators are not updated in place; take a new one after a change.
    pub fn translator(&self) -> Translator<'s> {
        Translator::new(self.locales, self.active.get())
    }

    pub fn is_active(&self) -> bool {
        self.subscription
            .as_ref()
            .map(Subscription::is_active)
            .unwrap_or(false)
    }

    /// Stop listening for notifications.
    ///
    /// Dropping the controller does the same.
    pub fn deactivate(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            debug!("Language controller deactivated");
        }
    }
}

impl Drop for LanguageController<'_> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Pick the language a notification asks for.
fn language_for_event(event: &LanguageChanged, preferences: &dyn PreferenceStore) -> Language {
    if let Some(language) = event.requested_language() {
        return language;
    }
    if let Some(raw) = event.language.as_deref() {
        debug!("Ignoring malformed language payload '{}'", raw);
    }
    read_language(preferences).unwrap_or_default()
}

fn apply(active: &Cell<Language>, next: Language) {
    let previous = active.replace(next);
    if previous != next {
        info!("Active language: {} -> {}", previous, next);
        TranslationMetrics::global().record_language_switch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::TextKey;
    use crate::preference::{write_language, MemoryPreferenceStore, PREFERENCE_KEY};

    fn setup() -> (Rc<MemoryPreferenceStore>, LanguageBus) {
        (Rc::new(MemoryPreferenceStore::new()), LanguageBus::new())
    }

    // ==================== Initialization Tests ====================

    #[test]
    fn test_starts_at_default_before_page_ready() {
        let (prefs, bus) = setup();
        write_language(prefs.as_ref(), Language::English).unwrap();

        let controller = LanguageController::activate(LocaleStore::global(), prefs, &bus);
        assert_eq!(controller.active_language(), Language::French);
        assert!(controller.is_active());
    }

    #[test]
    fn test_page_ready_adopts_preference() {
        let (prefs, bus) = setup();
        write_language(prefs.as_ref(), Language::English).unwrap();

        let controller = LanguageController::activate(LocaleStore::global(), prefs, &bus);
        assert_eq!(controller.page_ready(), Language::English);
        assert_eq!(
            controller.translator().text(TextKey::AboutTitle),
            "About me"
        );
    }

    #[test]
    fn test_page_ready_without_preference_keeps_default() {
        let (prefs, bus) = setup();
        let controller = LanguageController::activate(LocaleStore::global(), prefs, &bus);
        assert_eq!(controller.page_ready(), Language::French);
    }

    #[test]
    fn test_page_ready_ignores_invalid_preference() {
        let (prefs, bus) = setup();
        prefs.set(PREFERENCE_KEY, "pt").unwrap();

        let controller = LanguageController::activate(LocaleStore::global(), prefs, &bus);
        assert_eq!(controller.page_ready(), Language::French);
    }

    // ==================== Notification Tests ====================

    #[test]
    fn test_payload_switches_language() {
        let (prefs, bus) = setup();
        let controller = LanguageController::activate(LocaleStore::global(), prefs, &bus);
        controller.page_ready();

        let before = controller.translator();
        bus.emit(&LanguageChanged::to(Language::Spanish));

        assert_eq!(controller.active_language(), Language::Spanish);
        assert_eq!(controller.translator().text(TextKey::ContactSend), "Enviar");
        // Translators taken earlier keep their language.
        assert_eq!(before.text(TextKey::ContactSend), "Envoyer");
    }

    #[test]
    fn test_payload_wins_over_preference() {
        let (prefs, bus) = setup();
        write_language(prefs.as_ref(), Language::English).unwrap();
        let controller = LanguageController::activate(LocaleStore::global(), prefs, &bus);

        bus.emit(&LanguageChanged::to(Language::Spanish));
        assert_eq!(controller.active_language(), Language::Spanish);
    }

    #[test]
    fn test_no_payload_rereads_preference() {
        let (prefs, bus) = setup();
        let controller =
            LanguageController::activate(LocaleStore::global(), prefs.clone(), &bus);

        write_language(prefs.as_ref(), Language::English).unwrap();
        bus.emit(&LanguageChanged::without_payload());

        assert_eq!(controller.active_language(), Language::English);
    }

    #[test]
    fn test_no_payload_and_no_preference_falls_back_to_default() {
        let (prefs, bus) = setup();
        let controller =
            LanguageController::activate(LocaleStore::global(), prefs.clone(), &bus);
        bus.emit(&LanguageChanged::to(Language::English));

        prefs.remove(PREFERENCE_KEY).unwrap();
        bus.emit(&LanguageChanged::without_payload());

        assert_eq!(controller.active_language(), Language::French);
    }

    #[test]
    fn test_malformed_payload_rereads_preference() {
        let (prefs, bus) = setup();
        write_language(prefs.as_ref(), Language::Spanish).unwrap();
        let controller = LanguageController::activate(LocaleStore::global(), prefs, &bus);

        bus.emit(&LanguageChanged::raw("xx-YY"));
        assert_eq!(controller.active_language(), Language::Spanish);
    }

    // ==================== Teardown Tests ====================

    #[test]
    fn test_deactivate_stops_updates() {
        let (prefs, bus) = setup();
        let mut controller = LanguageController::activate(LocaleStore::global(), prefs, &bus);
        assert_eq!(bus.subscriber_count(), 1);

        controller.deactivate();
        controller.deactivate();
        bus.emit(&LanguageChanged::to(Language::English));

        assert!(!controller.is_active());
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(controller.active_language(), Language::French);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let (prefs, bus) = setup();
        {
            let _controller = LanguageController::activate(LocaleStore::global(), prefs, &bus);
            assert_eq!(bus.subscriber_count(), 1);
        }
        assert_eq!(bus.subscriber_count(), 0);
    }
}
