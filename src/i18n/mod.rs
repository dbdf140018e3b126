//! Internationalization (i18n) module for the site's language selector.
//!
//! The page can be browsed with any of the languages listed in the registry;
//! the visitor's pick is remembered and restored on the next visit.
//!
//! - `registry`: single source of truth for the supported languages
//! - `language`: validated `Language` type backed by the registry

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
