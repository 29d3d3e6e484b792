//! Release-host trait seam

use std::path::Path;

use async_trait::async_trait;

use liftoff_core::{ReleaseRequest, RemoteRelease};

use crate::error::Result;

/// A service that can host a release and its assets
#[async_trait]
pub trait ReleaseHost {
    /// Create the release and return its URLs.
    async fn create_release(&self, request: &ReleaseRequest) -> Result<RemoteRelease>;

    /// Attach one binary asset to an already-created release.
    async fn upload_asset(&self, release: &RemoteRelease, path: &Path) -> Result<()>;
}
