//! In-process language-change notifications.
//!
//! A [`LanguageBus`] fans a [`LanguageChanged`] event out to every current
//! subscriber. Subscribing returns a [`Subscription`] guard; the handler is
//! removed when the guard is dropped or explicitly unsubscribed, exactly
//! once. Everything runs on the caller's thread.

use crate::i18n::Language;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::debug;

/// Well-known name of the language-change notification.
pub const LANGUAGE_CHANGED_EVENT: &str = "site_lang_changed";

/// A language-change notification.
///
/// The payload is the raw code sent by the emitter. It is not validated
/// here; consumers coerce it with [`LanguageChanged::requested_language`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageChanged {
    pub language: Option<String>,
}

impl LanguageChanged {
    /// Notification carrying a supported language.
    pub fn to(language: Language) -> Self {
        Self {
            language: Some(language.code().to_string()),
        }
    }

    /// Notification carrying an arbitrary payload.
    pub fn raw(code: impl Into<String>) -> Self {
        Self {
            language: Some(code.into()),
        }
    }

    /// Notification without a payload.
    pub fn without_payload() -> Self {
        Self::default()
    }

    /// The payload, if it names a supported language.
    pub fn requested_language(&self) -> Option<Language> {
        self.language
            .as_deref()
            .and_then(|code| Language::from_code(code).ok())
    }
}

type Handler = Rc<dyn Fn(&LanguageChanged)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

impl Listeners {
    fn contains(&self, id: u64) -> bool {
        self.handlers.iter().any(|(hid, _)| *hid == id)
    }
}

/// Single-threaded broadcaster for [`LanguageChanged`].
///
/// Cloning yields another handle to the same set of subscribers.
#[derive(Clone, Default)]
pub struct LanguageBus {
    listeners: Rc<RefCell<Listeners>>,
}

impl LanguageBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` until the returned guard is released.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&LanguageChanged) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.handlers.push((id, Rc::new(handler)));
        debug!("Subscribed #{} to {}", id, LANGUAGE_CHANGED_EVENT);

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
            active: true,
        }
    }

    /// Deliver `event` to every subscriber and return how many were called.
    ///
    /// Handlers may subscribe, unsubscribe or emit while being called. A
    /// handler released during this dispatch is not called afterwards.
    pub fn emit(&self, event: &LanguageChanged) -> usize {
        let snapshot: Vec<(u64, Handler)> = self
            .listeners
            .borrow()
            .handlers
            .iter()
            .map(|(id, handler)| (*id, Rc::clone(handler)))
            .collect();

        debug!(
            "Emitting {} (payload: {:?}) to {} subscriber(s)",
            LANGUAGE_CHANGED_EVENT,
            event.language,
            snapshot.len()
        );

        let mut delivered = 0;
        for (id, handler) in snapshot {
            if !self.listeners.borrow().contains(id) {
                continue;
            }
            handler(event);
            delivered += 1;
        }
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().handlers.len()
    }
}

impl fmt::Debug for LanguageBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Guard for a registered handler.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
    active: bool,
}

impl Subscription {
    /// Remove the handler now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        // The bus may already be gone; nothing left to remove then.
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
            debug!("Unsubscribed #{} from {}", self.id, LANGUAGE_CHANGED_EVENT);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}
