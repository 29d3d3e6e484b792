//! Runtime configuration
//!
//! All tokens and target identifiers are resolved once at startup and passed
//! into each component explicitly; nothing reads ambient process state after
//! construction.

use tracing::debug;

use crate::error::ConfigError;

const DEFAULT_OWNER: &str = "Footagesus";
const DEFAULT_REPO: &str = "WindUI";
const DEFAULT_CHANNEL_ID: u64 = 1301061309395370024;
const DEFAULT_ROLE_ID: u64 = 1309487675379810346;
const DEFAULT_ICON_URL: &str =
    "https://raw.githubusercontent.com/Footagesus/WindUI/main/docs/logo.png";

/// Configuration for one release run
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Repository owner on the hosting service
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Bearer token for the hosting-service API
    pub github_token: String,

    /// Bot token for the chat platform
    pub discord_token: String,

    /// Channel the announcement is posted to
    pub channel_id: u64,

    /// Role mentioned in the announcement
    pub role_id: u64,

    /// Icon shown in the announcement author block
    pub icon_url: String,
}

impl ReleaseConfig {
    /// Build configuration from the process environment.
    ///
    /// `GITHUB_TOKEN` and `DISCORD_TOKEN` are required; the remaining fields
    /// have built-in defaults and may be overridden via `LIFTOFF_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token = lookup("GITHUB_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken("GITHUB_TOKEN"))?;

        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken("DISCORD_TOKEN"))?;

        let owner = lookup("LIFTOFF_OWNER").unwrap_or_else(|| DEFAULT_OWNER.to_string());
        let repo = lookup("LIFTOFF_REPO").unwrap_or_else(|| DEFAULT_REPO.to_string());

        let channel_id = parse_id(lookup("LIFTOFF_CHANNEL_ID"), "LIFTOFF_CHANNEL_ID")?
            .unwrap_or(DEFAULT_CHANNEL_ID);
        let role_id =
            parse_id(lookup("LIFTOFF_ROLE_ID"), "LIFTOFF_ROLE_ID")?.unwrap_or(DEFAULT_ROLE_ID);

        let icon_url = lookup("LIFTOFF_ICON_URL").unwrap_or_else(|| DEFAULT_ICON_URL.to_string());

        debug!(owner = %owner, repo = %repo, channel_id, role_id, "configuration resolved");

        Ok(Self {
            owner,
            repo,
            github_token,
            discord_token,
            channel_id,
            role_id,
            icon_url,
        })
    }

    /// `owner/repo` label used in API paths and the announcement author block
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Browser URL of the repository
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

fn parse_id(value: Option<String>, var: &'static str) -> Result<Option<u64>, ConfigError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                var,
                message: e.to_string(),
            }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn build(pairs: &[(&str, &str)]) -> Result<ReleaseConfig, ConfigError> {
        let vars = env(pairs);
        ReleaseConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_missing_github_token() {
        let err = build(&[("DISCORD_TOKEN", "d")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken("GITHUB_TOKEN")));
    }

    #[test]
    fn test_missing_discord_token() {
        let err = build(&[("GITHUB_TOKEN", "g")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken("DISCORD_TOKEN")));
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = build(&[("GITHUB_TOKEN", ""), ("DISCORD_TOKEN", "d")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken("GITHUB_TOKEN")));
    }

    #[test]
    fn test_defaults() {
        let config = build(&[("GITHUB_TOKEN", "g"), ("DISCORD_TOKEN", "d")]).unwrap();
        assert_eq!(config.owner, DEFAULT_OWNER);
        assert_eq!(config.repo, DEFAULT_REPO);
        assert_eq!(config.channel_id, DEFAULT_CHANNEL_ID);
        assert_eq!(config.role_id, DEFAULT_ROLE_ID);
        assert_eq!(config.repo_slug(), "Footagesus/WindUI");
        assert_eq!(config.repo_url(), "https://github.com/Footagesus/WindUI");
    }

    #[test]
    fn test_overrides() {
        let config = build(&[
            ("GITHUB_TOKEN", "g"),
            ("DISCORD_TOKEN", "d"),
            ("LIFTOFF_OWNER", "acme"),
            ("LIFTOFF_REPO", "rocket"),
            ("LIFTOFF_CHANNEL_ID", "42"),
            ("LIFTOFF_ROLE_ID", "7"),
        ])
        .unwrap();
        assert_eq!(config.repo_slug(), "acme/rocket");
        assert_eq!(config.channel_id, 42);
        assert_eq!(config.role_id, 7);
    }

    #[test]
    fn test_invalid_channel_id() {
        let err = build(&[
            ("GITHUB_TOKEN", "g"),
            ("DISCORD_TOKEN", "d"),
            ("LIFTOFF_CHANNEL_ID", "not-a-number"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                var: "LIFTOFF_CHANNEL_ID",
                ..
            }
        ));
    }
}
