//! ChromeLike — a static browser-chrome mockup.
//!
//! A tab strip, navigation bar, search field, extension dropdown and
//! quick-access grid driven by a single [`shell::BrowserShell`] component.
//! Nothing navigates, fetches or persists.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod managers;
pub mod platform;
pub mod services;
pub mod shell;
pub mod types;
pub mod ui;

pub use shell::BrowserShell;
