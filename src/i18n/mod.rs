//! Internationalization (i18n) for the site locales.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their metadata
//! - `locale`: Type-safe `Locale` handle, only constructible for registered codes
//! - `strings`: Per-locale page dictionaries
//! - `validator`: Startup completeness check over every localized table
//!
//! # Example
//!
//! ```rust,ignore
//! use forme_site::i18n::{Locale, LocaleStrings};
//!
//! let kk = Locale::from_code("kk")?;
//! let dict = LocaleStrings::for_locale(kk);
//! assert_eq!(dict.home, "Басты бет");
//! ```

mod locale;
mod registry;
mod strings;
mod validator;

pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::{BenefitItem, LeadFormStrings, LocaleStrings, PolicySection, ServiceCard};
pub use validator::{CatalogValidator, ValidationReport};
