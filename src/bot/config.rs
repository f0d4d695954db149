use std::path::PathBuf;

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub db_file_path: String,

    pub http_listen_address: String,
    /// public url telegram posts updates to, without the secret path segment
    pub webhook_url: Option<String>,

    pub telegram_api_url: String,
    pub telegram_bot_token: String,
    pub telegram_bot_username: String,

    pub enrichment_queue_size: usize,
}

impl Config {
    #[must_use]
    pub fn db(&self) -> PathBuf {
        self.db_file_path.clone().into()
    }

    /// Path segment the webhook is served under; the token itself is never part of an url.
    #[must_use]
    pub fn webhook_secret(&self) -> String {
        self.telegram_bot_token.replace(':', "")
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        db_file_path: "unused.sqlite".to_string(),
        http_listen_address: "127.0.0.1:0".to_string(),
        webhook_url: None,
        telegram_api_url: "http://127.0.0.1:9".to_string(),
        telegram_bot_token: "123:abc".to_string(),
        telegram_bot_username: "stickerman_test_bot".to_string(),
        enrichment_queue_size: 4,
    }
}
