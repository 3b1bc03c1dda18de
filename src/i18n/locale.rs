//! Locale type: a site locale validated against the registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated site locale.
///
/// Only codes present in the registry can be turned into a `Locale`, so the
/// metadata and dictionary lookups keyed by it always have a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const RUSSIAN: Locale = Locale { code: "ru" };
    pub const KAZAKH: Locale = Locale { code: "kk" };
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Create a Locale from a URL prefix code.
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unsupported locale: '{}'", code),
        }
    }

    /// Like `from_code`, but unknown codes resolve to the default locale.
    pub fn from_code_or_default(code: &str) -> Locale {
        Self::from_code(code).unwrap_or_else(|_| Self::default_locale())
    }

    /// The locale bare paths are redirected to.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// All supported locales in display order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .codes()
            .map(|code| Locale { code })
            .collect()
    }

    /// All supported locales except this one.
    pub fn others(&self) -> Vec<Locale> {
        Self::all().into_iter().filter(|l| l != self).collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    pub fn language_tag(&self) -> &'static str {
        self.config().language_tag
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
