//! HTTP surface: app state, router assembly, and the small non-page handlers.

use crate::blog::{all_blog_posts, get_blog_post};
use crate::config::Config;
use crate::i18n::Locale;
use crate::lead::handle_lead;
use crate::pages;
use crate::routing::redirect_bare_paths;
use crate::sitemap::{build_sitemap, render_sitemap_xml};
use anyhow::{Context, Result};
use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

const TELEGRAM_TIMEOUT: Duration = Duration::from_secs(10);

pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
    started: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(TELEGRAM_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            config,
            http,
            started: Instant::now(),
        })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let taplink = PathBuf::from(&state.config.public_dir)
        .join("taplink")
        .join("index.html");

    Router::new()
        .route("/:locale", get(home))
        .route("/:locale/", get(home))
        .route("/:locale/blog/:slug", get(blog_post))
        .route("/:locale/privacy", get(privacy))
        .route("/:locale/delete-account", get(delete_account))
        .route("/api/lead", post(handle_lead))
        .route("/api/health", get(health))
        .route("/sitemap.xml", get(sitemap))
        .route("/robots.txt", get(robots))
        .route_service("/taplink", ServeFile::new(taplink))
        .fallback(static_fallback)
        .layer(middleware::from_fn(redirect_bare_paths))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `0.0.0.0:PORT` and serve until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

// ==================== Pages ====================

/// `/:locale` also matches root-level files such as `/favicon.png`; any
/// segment that is not a locale goes to the public directory instead.
async fn home(
    State(state): State<Arc<AppState>>,
    Path(locale): Path<String>,
    req: Request,
) -> Response {
    match Locale::from_code(&locale) {
        Ok(locale) => Html(pages::render_home(&state.config.site_url, locale)).into_response(),
        Err(_) => serve_static(&state, req).await,
    }
}

async fn blog_post(
    State(state): State<Arc<AppState>>,
    Path((locale, slug)): Path<(String, String)>,
) -> Response {
    let base = &state.config.site_url;
    let Ok(locale) = Locale::from_code(&locale) else {
        return not_found_response(base, Locale::default_locale());
    };
    match get_blog_post(&slug) {
        Some(post) => Html(pages::render_blog_post(base, locale, post)).into_response(),
        None => not_found_response(base, locale),
    }
}

async fn privacy(State(state): State<Arc<AppState>>, Path(locale): Path<String>) -> Response {
    let base = &state.config.site_url;
    match Locale::from_code(&locale) {
        Ok(locale) => Html(pages::render_privacy(base, locale)).into_response(),
        Err(_) => not_found_response(base, Locale::default_locale()),
    }
}

async fn delete_account(State(state): State<Arc<AppState>>, Path(locale): Path<String>) -> Response {
    let base = &state.config.site_url;
    match Locale::from_code(&locale) {
        Ok(locale) => Html(pages::render_delete_account(base, locale)).into_response(),
        Err(_) => not_found_response(base, Locale::default_locale()),
    }
}

async fn static_fallback(State(state): State<Arc<AppState>>, req: Request) -> Response {
    serve_static(&state, req).await
}

/// Serve a file from `PUBLIC_DIR`, or the localized 404 page.
async fn serve_static(state: &AppState, req: Request) -> Response {
    let locale = locale_of(req.uri().path());
    match ServeDir::new(&state.config.public_dir).oneshot(req).await {
        Ok(res) if res.status() != StatusCode::NOT_FOUND => res.into_response(),
        _ => not_found_response(&state.config.site_url, locale),
    }
}

fn not_found_response(base_url: &str, locale: Locale) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(pages::render_not_found(base_url, locale)),
    )
        .into_response()
}

/// Locale named by the first path segment, or the default.
fn locale_of(path: &str) -> Locale {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
    Locale::from_code_or_default(first)
}

// ==================== Machine-readable ====================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Seconds since startup
    uptime: u64,
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "up",
        version: env!("CARGO_PKG_VERSION"),
        uptime: state.started.elapsed().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}

async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let entries = build_sitemap(&state.config.site_url, all_blog_posts(), chrono::Utc::now());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap_xml(&entries),
    )
}

async fn robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
            state.config.site_url
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_of_known_prefix() {
        assert_eq!(locale_of("/kk/blog/missing"), Locale::KAZAKH);
        assert_eq!(locale_of("/en"), Locale::ENGLISH);
    }

    #[test]
    fn test_locale_of_falls_back_to_default() {
        assert_eq!(locale_of("/images/missing.png"), Locale::RUSSIAN);
        assert_eq!(locale_of("/"), Locale::RUSSIAN);
        assert_eq!(locale_of(""), Locale::RUSSIAN);
    }
}
