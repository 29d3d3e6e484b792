//! Transient chat session
//!
//! Scoped resource around the Discord REST API: [`ChatSession::open`]
//! authenticates and verifies the bot identity, the session sends at most
//! one message, and [`ChatSession::close`] tears it down.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use liftoff_core::AnnouncementMessage;

use crate::error::{ChatError, Result};

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Accent color of the announcement embed
pub const EMBED_COLOR: u32 = 0x30ff6a;

/// An open, authenticated chat session
pub struct ChatSession {
    client: Client,
    token: String,
    api_base: String,
}

impl ChatSession {
    /// Open a session and wait until it is usable.
    ///
    /// The identity check stands in for the gateway "ready" signal: the
    /// session is handed out only once the platform has accepted the token.
    pub async fn open(token: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("liftoff/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let session = Self {
            client,
            token: token.to_string(),
            api_base: DISCORD_API_BASE.to_string(),
        };

        #[derive(Deserialize)]
        struct Identity {
            username: String,
        }

        let response = session
            .client
            .get(format!("{}/users/@me", session.api_base))
            .header("Authorization", session.auth_header())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::ConnectionFailed(format!("{} - {}", status, body)));
        }

        let identity: Identity = response.json().await?;
        debug!(bot = %identity.username, "chat session ready");

        Ok(session)
    }

    /// Verify the target channel exists and is visible to the bot.
    pub async fn verify_channel(&self, channel_id: u64) -> Result<()> {
        let response = self
            .client
            .get(format!("{}/channels/{}", self.api_base, channel_id))
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(ChatError::ChannelNotFound(channel_id));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }

    /// Send the announcement to the given channel.
    pub async fn send(&self, channel_id: u64, message: &AnnouncementMessage) -> Result<()> {
        let payload = message_payload(message);

        let response = self
            .client
            .post(format!("{}/channels/{}/messages", self.api_base, channel_id))
            .header("Authorization", self.auth_header())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        info!(channel_id, "announcement sent");
        Ok(())
    }

    /// Tear the session down.
    pub async fn close(self) {
        debug!("chat session closed");
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.token)
    }
}

/// Build the wire payload for one announcement: the role mention as message
/// content plus a single rich embed.
pub fn message_payload(message: &AnnouncementMessage) -> serde_json::Value {
    serde_json::json!({
        "content": message.role_mention,
        "embeds": [{
            "title": message.title,
            "description": message.body,
            "color": EMBED_COLOR,
            "url": message.link_url,
            "author": {
                "name": message.author_label,
                "url": message.author_url,
                "icon_url": message.author_icon_url,
            },
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> AnnouncementMessage {
        AnnouncementMessage {
            role_mention: "<@&7>".to_string(),
            title: "New release: v3.0.0".to_string(),
            body: "Fixes".to_string(),
            link_url: "https://host/r/1".to_string(),
            author_label: "acme/rocket".to_string(),
            author_url: "https://github.com/acme/rocket".to_string(),
            author_icon_url: "https://example.com/logo.png".to_string(),
        }
    }

    #[test]
    fn test_message_payload() {
        let payload = message_payload(&message());

        assert_eq!(payload["content"], "<@&7>");
        let embed = &payload["embeds"][0];
        assert_eq!(embed["title"], "New release: v3.0.0");
        assert_eq!(embed["description"], "Fixes");
        assert_eq!(embed["color"], 0x30ff6a);
        assert_eq!(embed["url"], "https://host/r/1");
        assert_eq!(embed["author"]["name"], "acme/rocket");
        assert_eq!(embed["author"]["icon_url"], "https://example.com/logo.png");
    }

    #[test]
    fn test_single_embed() {
        let payload = message_payload(&message());
        assert_eq!(payload["embeds"].as_array().unwrap().len(), 1);
    }
}
