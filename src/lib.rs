//! Multilingual personal portfolio page.
//!
//! - `i18n`: languages, translation documents and dotted-key lookup
//! - `events`: in-process language-change notifications
//! - `preference`: persisted language preference
//! - `controller`: active-language tracking for a page session
//! - `switcher`: the control that persists and announces a language choice
//! - `page`: HTML rendering of the portfolio sections
//! - `config`: environment configuration for the binaries

pub mod config;
pub mod controller;
pub mod events;
pub mod i18n;
pub mod page;
pub mod preference;
pub mod switcher;
