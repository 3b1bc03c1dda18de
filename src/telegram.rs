use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Send an HTML-formatted message to a Telegram chat.
///
/// `text` must already be escaped for Telegram's HTML parse mode. A non-2xx
/// reply is an error carrying the status and the response body.
pub async fn send_message(
    client: &reqwest::Client,
    api_url: &str,
    bot_token: &str,
    chat_id: &str,
    text: &str,
) -> Result<()> {
    let url = format!("{}/bot{}/sendMessage", api_url, bot_token);

    let request = SendMessageRequest {
        chat_id,
        text,
        parse_mode: "HTML",
    };

    let response = client
        .post(&url)
        .json(&request)
        .send()
        .await
        .context("Failed to send request to Telegram API")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Telegram API error ({}): {}", status, body);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Request Serialization Tests ====================

    #[test]
    fn test_send_message_request_serialization() {
        let request = SendMessageRequest {
            chat_id: "-100123",
            text: "<b>hi</b>",
            parse_mode: "HTML",
        };

        let json = serde_json::to_value(&request).expect("Should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "chat_id": "-100123",
                "text": "<b>hi</b>",
                "parse_mode": "HTML"
            })
        );
    }

    // ==================== send_message Tests ====================

    #[tokio::test]
    async fn test_send_message_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bottest-token/sendMessage"))
            .and(body_json(serde_json::json!({
                "chat_id": "42",
                "text": "hello",
                "parse_mode": "HTML"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": { "message_id": 1 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let result = send_message(&client, &mock_server.uri(), "test-token", "42", "hello").await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
    }

    #[tokio::test]
    async fn test_send_message_api_error_includes_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/botbad-token/sendMessage"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#,
            ))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let err = send_message(&client, &mock_server.uri(), "bad-token", "42", "hello")
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Telegram API error"));
        assert!(message.contains("401"));
        assert!(message.contains("Unauthorized"));
    }

    #[tokio::test]
    async fn test_send_message_unreachable() {
        let client = reqwest::Client::new();
        // Port 9 (discard) on localhost is not listening in test environments
        let err = send_message(&client, "http://127.0.0.1:9", "token", "42", "hello")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to send request to Telegram API"));
    }
}
