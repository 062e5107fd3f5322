use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramClient {
    pub fn new(base_url: String, bot_token: String, chat_id: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            bot_token,
            chat_id,
        }
    }

    pub async fn send(&self, text: &str) -> Result<()> {
        // The URL embeds the bot token; error text must not include it.
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.bot_token
        );
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("Telegram API request failed")?;

        let status = resp.status();
        let body_text = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            anyhow::bail!("Telegram API non-2xx: {status} body={body_text}");
        }
        Ok(())
    }
}
