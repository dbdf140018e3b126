//! Language registry: single source of truth for the languages the site offers.
//!
//! Uses a singleton pattern with `OnceLock` for thread-safe lazy initialization.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "French")
    pub name: &'static str,

    /// Native name, shown in the selector (e.g., "Français")
    pub native_name: &'static str,

    /// Whether this is the canonical language (exactly one should be true)
    pub is_canonical: bool,

    /// Whether this language appears in the selector
    pub enabled: bool,
}

/// Global language registry.
///
/// Initialized once on first access and immutable thereafter. The order of
/// entries is the order the selector lists them in.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All enabled languages, in selector order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// The canonical language the page copy is written in.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one canonical language,
    /// which indicates a configuration error.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिंदी",
            is_canonical: false,
            enabled: true,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_canonical: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("en");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.native_name, "English");
        assert!(config.is_canonical);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_chinese() {
        let registry = LanguageRegistry::get();
        let config = registry.get_by_code("zh");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "zh");
        assert_eq!(config.name, "Chinese");
        assert_eq!(config.native_name, "中文");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("pt").is_none());
    }

    #[test]
    fn test_list_enabled_order_matches_selector() {
        let registry = LanguageRegistry::get();
        let codes: Vec<_> = registry
            .list_enabled()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["en", "ar", "fr", "es", "de", "hi", "zh"]);
    }

    #[test]
    fn test_canonical_returns_english() {
        let registry = LanguageRegistry::get();
        let canonical = registry.canonical();

        assert_eq!(canonical.code, "en");
        assert!(canonical.is_canonical);
    }

    #[test]
    fn test_native_names_present() {
        let registry = LanguageRegistry::get();

        assert_eq!(registry.get_by_code("ar").unwrap().native_name, "العربية");
        assert_eq!(registry.get_by_code("hi").unwrap().native_name, "हिंदी");
        assert_eq!(registry.get_by_code("de").unwrap().native_name, "Deutsch");
    }
}
