//! Language type: a language code validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
///
/// Can only be constructed from codes the registry knows, so every instance
/// maps back to a full `LanguageConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// Create a Language from a language code string.
    ///
    /// Fails if the code is unknown or the language is disabled.
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The canonical language the page copy is written in.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry configuration for this language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Native name, as shown in the selector.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}
