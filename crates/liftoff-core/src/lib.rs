//! Liftoff Core - shared types and local file readers
//!
//! This crate provides the configuration, value types, and local file
//! readers (project metadata, changelog, artifact locator) used by the
//! liftoff release publisher.

pub mod changelog;
pub mod config;
pub mod error;
pub mod locate;
pub mod metadata;
pub mod types;

pub use changelog::read_changelog;
pub use config::ReleaseConfig;
pub use error::ConfigError;
pub use locate::find_file;
pub use metadata::{read_metadata, ProjectMetadata};
pub use types::{AnnouncementMessage, ReleaseRequest, RemoteRelease};
