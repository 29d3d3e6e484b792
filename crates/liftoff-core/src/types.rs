//! Value types shared across the release flow
//!
//! Everything here is single-use: built, consumed by one remote call, and
//! discarded. Nothing is persisted between runs.

use std::path::PathBuf;

use crate::config::ReleaseConfig;

/// A confirmed release, ready to be published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    /// Tag and display name, e.g. `v1.6.2`
    pub tag: String,

    /// Release notes body
    pub description: String,

    /// Publish as a maintainer-only draft
    pub draft: bool,

    /// Local artifact to attach, if the operator chose one
    pub artifact: Option<PathBuf>,
}

/// What the hosting service returned for a created release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRelease {
    /// Browser URL of the release page
    pub html_url: String,

    /// Asset upload endpoint, still carrying its `{...}` placeholder
    pub upload_url: String,
}

/// One announcement, sent to the chat channel exactly once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementMessage {
    /// Role mention token, e.g. `<@&123>`
    pub role_mention: String,

    /// Embed title
    pub title: String,

    /// Embed body
    pub body: String,

    /// Link back to the release page
    pub link_url: String,

    /// `owner/repo` label for the author block
    pub author_label: String,

    /// Repository URL for the author block
    pub author_url: String,

    /// Icon for the author block
    pub author_icon_url: String,
}

impl AnnouncementMessage {
    /// Derive the announcement from the confirmed request and the created release.
    pub fn new(config: &ReleaseConfig, request: &ReleaseRequest, release: &RemoteRelease) -> Self {
        Self {
            role_mention: format!("<@&{}>", config.role_id),
            title: format!("New release: {}", request.tag),
            body: request.description.clone(),
            link_url: release.html_url.clone(),
            author_label: config.repo_slug(),
            author_url: config.repo_url(),
            author_icon_url: config.icon_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ReleaseConfig {
        ReleaseConfig::from_source(|key| match key {
            "GITHUB_TOKEN" => Some("g".to_string()),
            "DISCORD_TOKEN" => Some("d".to_string()),
            "LIFTOFF_OWNER" => Some("acme".to_string()),
            "LIFTOFF_REPO" => Some("rocket".to_string()),
            "LIFTOFF_ROLE_ID" => Some("7".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_announcement_from_release() {
        let request = ReleaseRequest {
            tag: "v3.0.0".to_string(),
            description: "Fixes".to_string(),
            draft: false,
            artifact: None,
        };
        let release = RemoteRelease {
            html_url: "https://host/r/1".to_string(),
            upload_url: "https://host/r/1/assets{?name,label}".to_string(),
        };

        let msg = AnnouncementMessage::new(&config(), &request, &release);
        assert_eq!(msg.role_mention, "<@&7>");
        assert_eq!(msg.title, "New release: v3.0.0");
        assert_eq!(msg.body, "Fixes");
        assert_eq!(msg.link_url, "https://host/r/1");
        assert_eq!(msg.author_label, "acme/rocket");
        assert_eq!(msg.author_url, "https://github.com/acme/rocket");
    }
}
