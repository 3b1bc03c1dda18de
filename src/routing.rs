//! Locale resolution for incoming request paths.
//!
//! Every request passes through [`redirect_bare_paths`] before routing. Paths
//! that already start with a supported locale, or that look like assets or
//! API calls, pass through; everything else is redirected under the default
//! locale.

use crate::i18n::{Locale, LocaleRegistry};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

/// Prefixes served as-is without a locale.
pub const EXCLUDED_PREFIXES: [&str; 4] = ["/_next", "/api", "/images", "/taplink"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Passthrough,
    RedirectTo(String),
}

/// Decide what to do with a raw request path (no query string).
pub fn resolve(path: &str) -> Resolution {
    if has_locale_prefix(path) {
        return Resolution::Passthrough;
    }

    // A dot anywhere is taken to mean a file extension
    if EXCLUDED_PREFIXES.iter().any(|p| path.starts_with(p)) || path.contains('.') {
        return Resolution::Passthrough;
    }

    let default = Locale::default_locale();
    if path == "/" {
        return Resolution::RedirectTo(format!("/{}", default.code()));
    }
    Resolution::RedirectTo(format!("/{}{}", default.code(), path))
}

/// `/<loc>` or `/<loc>/...` for a supported locale.
pub fn has_locale_prefix(path: &str) -> bool {
    LocaleRegistry::get().codes().any(|code| {
        path.strip_prefix('/')
            .and_then(|rest| rest.strip_prefix(code))
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Middleware applying [`resolve`] with a 307 Temporary Redirect.
///
/// The query string is carried over to the redirect target.
pub async fn redirect_bare_paths(req: Request, next: Next) -> Response {
    match resolve(req.uri().path()) {
        Resolution::Passthrough => next.run(req).await,
        Resolution::RedirectTo(target) => {
            let location = match req.uri().query() {
                Some(query) => format!("{}?{}", target, query),
                None => target,
            };
            debug!("Redirecting {} -> {}", req.uri().path(), location);
            Redirect::temporary(&location).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(path: &str) -> Resolution {
        Resolution::RedirectTo(path.to_string())
    }

    // ==================== Locale Prefix Tests ====================

    #[test]
    fn test_locale_root_passes_through() {
        assert_eq!(resolve("/ru"), Resolution::Passthrough);
        assert_eq!(resolve("/kk"), Resolution::Passthrough);
        assert_eq!(resolve("/en"), Resolution::Passthrough);
    }

    #[test]
    fn test_locale_subpath_passes_through() {
        assert_eq!(resolve("/en/privacy"), Resolution::Passthrough);
        assert_eq!(resolve("/kk/blog/some-post"), Resolution::Passthrough);
        assert_eq!(resolve("/ru/"), Resolution::Passthrough);
    }

    #[test]
    fn test_locale_prefix_requires_segment_boundary() {
        // "/english" starts with "/en" but is not the en locale
        assert_eq!(resolve("/english"), redirect("/ru/english"));
        assert_eq!(resolve("/rus/page"), redirect("/ru/rus/page"));
        assert!(!has_locale_prefix("/kkk"));
    }

    #[test]
    fn test_unsupported_locale_is_bare() {
        assert_eq!(resolve("/de"), redirect("/ru/de"));
        assert_eq!(resolve("/RU"), redirect("/ru/RU"));
    }

    // ==================== Exclusion Tests ====================

    #[test]
    fn test_excluded_prefixes_pass_through() {
        assert_eq!(resolve("/api/lead"), Resolution::Passthrough);
        assert_eq!(resolve("/api"), Resolution::Passthrough);
        assert_eq!(resolve("/images/x.png"), Resolution::Passthrough);
        assert_eq!(resolve("/images/hero"), Resolution::Passthrough);
        assert_eq!(resolve("/taplink"), Resolution::Passthrough);
        assert_eq!(resolve("/_next/static/chunk"), Resolution::Passthrough);
    }

    #[test]
    fn test_excluded_prefix_is_plain_string_prefix() {
        // No segment boundary is required for exclusions
        assert_eq!(resolve("/apiary"), Resolution::Passthrough);
    }

    #[test]
    fn test_dotted_paths_pass_through() {
        assert_eq!(resolve("/favicon.png"), Resolution::Passthrough);
        assert_eq!(resolve("/manifest.json"), Resolution::Passthrough);
        assert_eq!(resolve("/sitemap.xml"), Resolution::Passthrough);
        assert_eq!(resolve("/robots.txt"), Resolution::Passthrough);
    }

    #[test]
    fn test_dot_heuristic_skips_localization_of_bare_slug() {
        // A bare page slug with a period is treated as a file and never localized
        assert_eq!(resolve("/blog/v1.2-release"), Resolution::Passthrough);
        // Under a locale prefix the prefix rule wins first
        assert_eq!(resolve("/en/blog/v1.2-release"), Resolution::Passthrough);
    }

    // ==================== Redirect Tests ====================

    #[test]
    fn test_root_redirects_to_default() {
        assert_eq!(resolve("/"), redirect("/ru"));
    }

    #[test]
    fn test_bare_paths_redirect() {
        assert_eq!(resolve("/privacy"), redirect("/ru/privacy"));
        assert_eq!(resolve("/blog/post"), redirect("/ru/blog/post"));
        assert_eq!(resolve("/delete-account/"), redirect("/ru/delete-account/"));
    }

    #[test]
    fn test_redirect_target_is_fixed_point() {
        for path in ["/", "/privacy", "/blog/x", "/de"] {
            match resolve(path) {
                Resolution::RedirectTo(target) => {
                    assert_eq!(resolve(&target), Resolution::Passthrough, "{}", target)
                }
                Resolution::Passthrough => panic!("{} should redirect", path),
            }
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        assert_eq!(resolve("/privacy"), resolve("/privacy"));
        assert_eq!(resolve("/api/lead"), resolve("/api/lead"));
    }
}
