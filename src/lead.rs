//! Lead capture: validate a contact submission and forward it to Telegram.

use crate::error::LeadError;
use crate::html::escape_html;
use crate::server::AppState;
use crate::telegram;
use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Almaty is UTC+5 year-round
const ALMATY_OFFSET_SECS: i32 = 5 * 3600;

/// Body of `POST /api/lead`. Absent and `null` fields both deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

impl LeadRequest {
    /// Name and phone must be non-blank.
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name().is_empty() || self.phone().is_empty() {
            return Err(LeadError::MissingFields);
        }
        Ok(())
    }

    /// Trimmed name, empty when missing.
    pub fn name(&self) -> &str {
        self.name.as_deref().map(str::trim).unwrap_or_default()
    }

    /// Trimmed phone, empty when missing.
    pub fn phone(&self) -> &str {
        self.phone.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// Build the Telegram notification text (HTML parse mode).
///
/// User-supplied fields are escaped; blank optional lines are omitted.
pub fn format_lead_message(lead: &LeadRequest, site_host: &str, at: DateTime<Utc>) -> String {
    let local = at.with_timezone(&almaty());
    let source = lead
        .source
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("📍 <b>Источник:</b> {}", escape_html(s)));

    [
        Some(format!(
            "📋 <b>Новая заявка с сайта {}</b>",
            escape_html(site_host)
        )),
        Some(format!("👤 <b>Имя:</b> {}", escape_html(lead.name()))),
        Some(format!("📞 <b>Телефон:</b> {}", escape_html(lead.phone()))),
        source,
        Some(format!("🕐 {}", local.format("%d.%m.%Y, %H:%M:%S"))),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join("\n")
}

fn almaty() -> FixedOffset {
    FixedOffset::east_opt(ALMATY_OFFSET_SECS).expect("UTC+5 is a valid offset")
}

/// Host part of the site URL, shown in the notification header.
pub fn site_host(site_url: &str) -> &str {
    let without_scheme = site_url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(site_url);
    without_scheme.split('/').next().unwrap_or(without_scheme)
}

/// Validate and forward one submission. All-or-nothing, no retry.
pub async fn submit_lead(state: &AppState, body: &[u8]) -> Result<(), LeadError> {
    let lead: LeadRequest = serde_json::from_slice(body)
        .context("Failed to parse lead request body")
        .map_err(LeadError::Internal)?;

    lead.validate()?;

    let (bot_token, chat_id) = state
        .config
        .telegram_credentials()
        .ok_or(LeadError::NotConfigured)?;

    let message = format_lead_message(&lead, site_host(&state.config.site_url), Utc::now());

    telegram::send_message(
        &state.http,
        &state.config.telegram_api_url,
        bot_token,
        chat_id,
        &message,
    )
    .await
    .map_err(LeadError::Upstream)?;

    info!(
        "Lead forwarded to Telegram (source: {})",
        lead.source.as_deref().unwrap_or("-")
    );
    Ok(())
}

/// `POST /api/lead`
pub async fn handle_lead(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, LeadError> {
    submit_lead(&state, &body).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn lead(name: &str, phone: &str, source: Option<&str>) -> LeadRequest {
        LeadRequest {
            name: Some(name.to_string()),
            phone: Some(phone.to_string()),
            source: source.map(str::to_string),
        }
    }

    fn at() -> DateTime<Utc> {
        // 09:30 UTC is 14:30 in Almaty
        Utc.with_ymd_and_hms(2025, 11, 10, 9, 30, 5).unwrap()
    }

    // ==================== Deserialization Tests ====================

    #[test]
    fn test_deserialize_full() {
        let req: LeadRequest =
            serde_json::from_str(r#"{"name":"Анна","phone":"+7 700 000 00 00","source":"Trial"}"#)
                .expect("Should deserialize");
        assert_eq!(req.name(), "Анна");
        assert_eq!(req.source.as_deref(), Some("Trial"));
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let req: LeadRequest = serde_json::from_str(r#"{"phone":"123"}"#).expect("Should deserialize");
        assert!(req.name.is_none());
        assert_eq!(req.name(), "");
        assert!(req.source.is_none());
    }

    #[test]
    fn test_deserialize_null_fields() {
        let req: LeadRequest =
            serde_json::from_str(r#"{"name":null,"phone":null,"source":null}"#)
                .expect("Should deserialize");
        assert!(req.name.is_none());
        assert!(req.phone.is_none());
        assert!(req.source.is_none());
    }

    #[test]
    fn test_deserialize_wrong_type_fails() {
        assert!(serde_json::from_str::<LeadRequest>(r#"{"name":1,"phone":"2"}"#).is_err());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_ok() {
        assert!(lead("Анна", "+7 700", None).validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        assert!(matches!(
            lead("", "+7 700 123 45 67", None).validate(),
            Err(LeadError::MissingFields)
        ));
    }

    #[test]
    fn test_validate_blank_phone() {
        assert!(matches!(
            lead("Анна", "   ", None).validate(),
            Err(LeadError::MissingFields)
        ));
    }

    #[test]
    fn test_validate_null_name() {
        let req: LeadRequest = serde_json::from_str(r#"{"name":null,"phone":"+7 700"}"#).unwrap();
        assert!(matches!(req.validate(), Err(LeadError::MissingFields)));
    }

    #[test]
    fn test_validate_null_phone() {
        let req: LeadRequest = serde_json::from_str(r#"{"name":"Анна","phone":null}"#).unwrap();
        assert!(matches!(req.validate(), Err(LeadError::MissingFields)));
    }

    // ==================== Message Formatting Tests ====================

    #[test]
    fn test_format_message_with_source() {
        let text = format_lead_message(&lead("Анна", "+7 700", Some("Пробная тренировка")), "forme.kz", at());
        assert_eq!(
            text,
            "📋 <b>Новая заявка с сайта forme.kz</b>\n\
             👤 <b>Имя:</b> Анна\n\
             📞 <b>Телефон:</b> +7 700\n\
             📍 <b>Источник:</b> Пробная тренировка\n\
             🕐 10.11.2025, 14:30:05"
        );
    }

    #[test]
    fn test_format_message_without_source() {
        let text = format_lead_message(&lead("Анна", "+7 700", Some("  ")), "forme.kz", at());
        assert!(!text.contains("Источник"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_format_message_escapes_user_fields() {
        let text = format_lead_message(
            &lead("<script>alert(1)</script>", "1 & 2", Some("<b>x</b>")),
            "forme.kz",
            at(),
        );
        assert!(text.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(text.contains("1 &amp; 2"));
        assert!(text.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!text.contains("<script>"));
    }

    #[test]
    fn test_almaty_date_rollover() {
        // 20:00 UTC is 01:00 next day in Almaty
        let late = Utc.with_ymd_and_hms(2025, 12, 31, 20, 0, 0).unwrap();
        let text = format_lead_message(&lead("A", "1", None), "forme.kz", late);
        assert!(text.ends_with("🕐 01.01.2026, 01:00:00"));
    }

    // ==================== site_host Tests ====================

    #[test]
    fn test_site_host() {
        assert_eq!(site_host("https://forme.kz"), "forme.kz");
        assert_eq!(site_host("http://localhost:8080/base"), "localhost:8080");
        assert_eq!(site_host("forme.kz"), "forme.kz");
    }
}
