//! GitHub releases API client

use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use liftoff_core::{ReleaseConfig, ReleaseRequest, RemoteRelease};

use crate::error::{HostError, Result};
use crate::traits::ReleaseHost;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub implementation of [`ReleaseHost`]
pub struct GitHubReleases {
    api_base: String,
    owner: String,
    repo: String,
    token: String,
    client: Client,
}

impl GitHubReleases {
    /// Create a client for the configured repository.
    pub fn new(config: &ReleaseConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("liftoff/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            api_base: GITHUB_API_BASE.to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            token: config.github_token.clone(),
            client,
        })
    }
}

#[async_trait]
impl ReleaseHost for GitHubReleases {
    async fn create_release(&self, request: &ReleaseRequest) -> Result<RemoteRelease> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.api_base, self.owner, self.repo
        );

        let payload = release_payload(request);

        debug!(url = %url, tag = %request.tag, "creating release");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", GITHUB_ACCEPT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() != 201 {
            let body = response.text().await.unwrap_or_default();
            return Err(HostError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        #[derive(Deserialize)]
        struct CreatedRelease {
            html_url: String,
            upload_url: String,
        }

        let created: CreatedRelease = response.json().await?;
        info!(url = %created.html_url, "release created");

        Ok(RemoteRelease {
            html_url: created.html_url,
            upload_url: created.upload_url,
        })
    }

    async fn upload_asset(&self, release: &RemoteRelease, path: &Path) -> Result<()> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| HostError::InvalidArtifact(format!("Bad file name: {}", path.display())))?;

        let url = asset_upload_url(&release.upload_url, file_name);
        let bytes = tokio::fs::read(path).await?;

        debug!(url = %url, size = bytes.len(), "uploading asset");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", GITHUB_ACCEPT)
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !matches!(status.as_u16(), 200 | 201) {
            let body = response.text().await.unwrap_or_default();
            return Err(HostError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        info!(name = file_name, "asset uploaded");
        Ok(())
    }
}

/// Build the create-release request body.
///
/// `prerelease` is always false, matching the deployed behavior.
pub fn release_payload(request: &ReleaseRequest) -> serde_json::Value {
    serde_json::json!({
        "tag_name": request.tag,
        "name": request.tag,
        "body": request.description,
        "draft": request.draft,
        "prerelease": false,
    })
}

/// Substitute the asset name into an `upload_url` template.
///
/// The template ends in a literal placeholder (`...assets{?name,label}`);
/// everything from the `{` on is replaced with a `?name=` query string.
pub fn asset_upload_url(template: &str, file_name: &str) -> String {
    let base = match template.find('{') {
        Some(idx) => &template[..idx],
        None => template,
    };
    format!("{}?name={}", base, file_name)
}
