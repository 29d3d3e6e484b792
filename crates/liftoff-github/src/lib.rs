//! GitHub release publishing
//!
//! Issues the two remote calls of a release run: create the release, then
//! optionally attach one binary asset against the upload URL the create call
//! returned.

pub mod client;
pub mod error;
pub mod traits;

pub use client::{asset_upload_url, release_payload, GitHubReleases};
pub use error::{HostError, Result};
pub use traits::ReleaseHost;
