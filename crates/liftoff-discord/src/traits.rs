//! Announcer trait seam

use async_trait::async_trait;

use liftoff_core::AnnouncementMessage;

use crate::error::Result;

/// A sink for release announcements
#[async_trait]
pub trait Announcer {
    /// Deliver one announcement.
    async fn announce(&self, message: &AnnouncementMessage) -> Result<()>;
}
