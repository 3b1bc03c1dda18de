use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub site_url: String,
    pub public_dir: String,

    // Telegram (lead notifications)
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .map(|v| v.parse().context(format!("Invalid PORT value: '{}'", v)))
                .transpose()?
                .unwrap_or(8080),
            site_url: std::env::var("SITE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://forme.kz".to_string()),
            public_dir: std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),

            // Telegram - both required for lead forwarding, checked per request
            telegram_bot_token: non_blank_var("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: non_blank_var("TELEGRAM_CHAT_ID"),
            telegram_api_url: std::env::var("TELEGRAM_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://api.telegram.org".to_string()),
        })
    }

    /// Bot token and chat ID, if both are configured.
    pub fn telegram_credentials(&self) -> Option<(&str, &str)> {
        match (&self.telegram_bot_token, &self.telegram_chat_id) {
            (Some(token), Some(chat_id)) => Some((token.as_str(), chat_id.as_str())),
            _ => None,
        }
    }
}

/// Read an environment variable, treating blank values as unset.
fn non_blank_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 6] = [
        "PORT",
        "SITE_URL",
        "PUBLIC_DIR",
        "TELEGRAM_BOT_TOKEN",
        "TELEGRAM_CHAT_ID",
        "TELEGRAM_API_URL",
    ];

    fn clear_env() {
        for key in KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_empty() {
        clear_env();

        let config = Config::from_env().expect("Should load defaults");
        assert_eq!(config.port, 8080);
        assert_eq!(config.site_url, "https://forme.kz");
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.telegram_api_url, "https://api.telegram.org");
        assert!(config.telegram_bot_token.is_none());
        assert!(config.telegram_chat_id.is_none());
        assert!(config.telegram_credentials().is_none());
    }

    #[test]
    #[serial]
    fn test_reads_all_values() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("SITE_URL", "https://staging.forme.kz/");
        std::env::set_var("PUBLIC_DIR", "/srv/public");
        std::env::set_var("TELEGRAM_BOT_TOKEN", "123:abc");
        std::env::set_var("TELEGRAM_CHAT_ID", "-100200300");
        std::env::set_var("TELEGRAM_API_URL", "http://localhost:9999/");

        let config = Config::from_env().expect("Should load config");
        assert_eq!(config.port, 3000);
        assert_eq!(config.site_url, "https://staging.forme.kz");
        assert_eq!(config.public_dir, "/srv/public");
        assert_eq!(config.telegram_api_url, "http://localhost:9999");
        assert_eq!(
            config.telegram_credentials(),
            Some(("123:abc", "-100200300"))
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_credentials_count_as_missing() {
        clear_env();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "   ");
        std::env::set_var("TELEGRAM_CHAT_ID", "123");

        let config = Config::from_env().expect("Should load config");
        assert!(config.telegram_bot_token.is_none());
        assert!(config.telegram_credentials().is_none());

        clear_env();
    }
}
