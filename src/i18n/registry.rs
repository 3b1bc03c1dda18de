//! Locale registry: single source of truth for all supported site locales.
//!
//! The registry is a lazily initialized `OnceLock` singleton. It is immutable
//! after first access, so lookups are lock-free from any request task.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// URL prefix and `lang` attribute (e.g., "ru", "kk", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Russian")
    pub name: &'static str,

    /// Native name shown in the language switcher (e.g., "Русский")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "ru_RU")
    pub og_locale: &'static str,

    /// BCP 47 tag used for JSON-LD `inLanguage` (e.g., "ru-RU")
    pub language_tag: &'static str,

    /// Whether bare paths are redirected to this locale (exactly one should be true)
    pub is_default: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// Matching is exact: URL prefixes are case-sensitive, so "RU" is not "ru".
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locales in display order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Codes of all supported locales in display order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.locales.iter().map(|locale| locale.code)
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if zero or several locales are flagged as default. The startup
    /// catalog validation reports this before the server binds.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self.locales.iter().filter(|l| l.is_default).collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Number of locales flagged as default (used by validation).
    pub fn default_count(&self) -> usize {
        self.locales.iter().filter(|l| l.is_default).count()
    }

    /// Check if a locale code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            og_locale: "ru_RU",
            language_tag: "ru-RU",
            is_default: true,
        },
        LocaleConfig {
            code: "kk",
            name: "Kazakh",
            native_name: "Қазақша",
            og_locale: "kk_KZ",
            language_tag: "kk-KZ",
            is_default: false,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            language_tag: "en-US",
            is_default: false,
        },
    ]
}
