//! Discord announcer
//!
//! Wraps the session lifecycle so teardown runs on every exit path: open,
//! deliver once, close unconditionally.

use async_trait::async_trait;
use tracing::warn;

use liftoff_core::{AnnouncementMessage, ReleaseConfig};

use crate::error::{ChatError, Result};
use crate::session::ChatSession;
use crate::traits::Announcer;

/// Posts one announcement to a fixed channel
pub struct DiscordAnnouncer {
    token: String,
    channel_id: u64,
}

impl DiscordAnnouncer {
    /// Create an announcer for the configured channel.
    pub fn new(config: &ReleaseConfig) -> Self {
        Self {
            token: config.discord_token.clone(),
            channel_id: config.channel_id,
        }
    }

    async fn deliver(&self, session: &ChatSession, message: &AnnouncementMessage) -> Result<()> {
        match session.verify_channel(self.channel_id).await {
            // A missing channel is a no-op, not a failure
            Err(ChatError::ChannelNotFound(id)) => {
                warn!(channel_id = id, "announcement channel not found, skipping");
                return Ok(());
            }
            Err(e) => return Err(e),
            Ok(()) => {}
        }

        session.send(self.channel_id, message).await
    }
}

#[async_trait]
impl Announcer for DiscordAnnouncer {
    async fn announce(&self, message: &AnnouncementMessage) -> Result<()> {
        let session = ChatSession::open(&self.token).await?;
        let result = self.deliver(&session, message).await;
        session.close().await;
        result
    }
}
