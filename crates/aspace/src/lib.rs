//! # ArchivesSpace client
//!
//! Blocking client for the subset of the ArchivesSpace REST API used by the
//! thumbnail destroyer:
//! - resource tree retrieval
//! - archival object read and update
//! - digital object read and delete
//!
//! Connection settings come from a YAML file keyed by environment name (see [`ClientConfig`]).
//! Records are modelled only as far as the maintenance pipeline needs them; every other field
//! is carried through unchanged so that a read-modify-write never drops data.

mod client;
mod config;
mod models;
mod uri;

pub use client::{AspaceClient, SESSION_HEADER};
pub use config::ClientConfig;
pub use models::{ArchivalObject, DigitalObject, FileVersion, Instance};
pub use uri::split_uri;

/// Error type for ArchivesSpace client operations.
#[derive(Debug, thiserror::Error)]
pub enum AspaceError {
    #[error("invalid client configuration: {0}")]
    Config(String),
    #[error("failed to read client configuration: {0}")]
    ConfigRead(std::io::Error),
    #[error("failed to parse client configuration: {0}")]
    ConfigParse(serde_yaml::Error),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("login failed: {0}")]
    Login(String),
    #[error("invalid record uri: {0}")]
    InvalidUri(String),
}

/// Result type for ArchivesSpace client operations.
pub type AspaceResult<T> = std::result::Result<T, AspaceError>;
