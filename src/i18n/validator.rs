//! Startup validation of the localized catalogs.
//!
//! Every registered locale must have an SEO record, business text and a
//! page dictionary with no empty entries, and exactly one locale must be
//! the default. `main` refuses to start when the report has errors.

use super::registry::LocaleRegistry;
use super::strings::LocaleStrings;
use super::Locale;
use crate::seo::catalog::{BusinessText, SeoRecord};

/// Longest description search engines show without truncation
const DESCRIPTION_SOFT_LIMIT: usize = 200;

/// Validation report containing errors and warnings about the catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a locale unservable
    pub errors: Vec<String>,

    /// Suspicious but servable content
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the compiled-in locale catalogs.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Check the registry and every locale's tables.
    pub fn validate() -> ValidationReport {
        let mut report = ValidationReport::new();
        let registry = LocaleRegistry::get();

        let defaults = registry.default_count();
        if defaults != 1 {
            report.errors.push(format!(
                "Expected exactly one default locale, found {}",
                defaults
            ));
        }

        for code in registry.codes() {
            Self::check_locale(&mut report, code);
        }

        report
    }

    fn check_locale(report: &mut ValidationReport, code: &str) {
        let locale = match Locale::from_code(code) {
            Ok(locale) => locale,
            Err(e) => {
                report.errors.push(format!("{:#}", e));
                return;
            }
        };

        if SeoRecord::has_locale(code) {
            let seo = SeoRecord::for_locale(locale);
            Self::check_fields(
                report,
                code,
                "SEO record",
                &[
                    ("title", seo.title),
                    ("description", seo.description),
                    ("image_alt", seo.image_alt),
                ],
            );
            if seo.keywords.is_empty() || seo.keywords.iter().any(|k| k.trim().is_empty()) {
                report
                    .errors
                    .push(format!("[{}] SEO record has empty keywords", code));
            }
            if seo.description.chars().count() > DESCRIPTION_SOFT_LIMIT {
                report.warnings.push(format!(
                    "[{}] SEO description is longer than {} characters",
                    code, DESCRIPTION_SOFT_LIMIT
                ));
            }
        } else {
            report.errors.push(format!("[{}] Missing SEO record", code));
        }

        if BusinessText::has_locale(code) {
            let business = BusinessText::for_locale(locale);
            Self::check_fields(report, code, "business text", &business.fields());
        } else {
            report.errors.push(format!("[{}] Missing business text", code));
        }

        if LocaleStrings::has_locale(code) {
            let dict = LocaleStrings::for_locale(locale);
            Self::check_fields(report, code, "dictionary", &dict.fields());
        } else {
            report.errors.push(format!("[{}] Missing dictionary", code));
        }
    }

    /// Record an error for every blank field of a table.
    fn check_fields(
        report: &mut ValidationReport,
        code: &str,
        table: &str,
        fields: &[(&str, &str)],
    ) {
        for (name, value) in fields {
            if value.trim().is_empty() {
                report
                    .errors
                    .push(format!("[{}] {} field '{}' is empty", code, table, name));
            }
        }
    }
}
