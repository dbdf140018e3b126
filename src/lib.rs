//! Trochlear marketing site: a single server-rendered page with a contact
//! form and a persisted language preference.
//!
//! Submissions are relayed as JSON to a configured form endpoint, or turned
//! into a `mailto:` compose link when no endpoint is set.

pub mod config;
pub mod contact;
pub mod formspree;
pub mod i18n;
pub mod mailto;
pub mod prefs;
pub mod server;
pub mod site;
