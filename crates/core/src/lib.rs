//! # Destroyer Core
//!
//! Removes thumbnail-only digital objects from the archival objects of one resource.
//!
//! The pipeline has three stages:
//! - [`RecordUriExtractor`] finds candidate archival objects in a resource tree
//! - [`classifier`] decides whether a linked digital object is a removable thumbnail
//! - [`Orchestrator`] unlinks and deletes each removable digital object, record by record
//!
//! [`RunContext`] sequences a whole run and accumulates the totals.
//!
//! **No transport concerns**: HTTP, sessions and the record wire format live in `aspace-client`;
//! this crate only sees the [`RepositoryClient`] trait.

pub mod classifier;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod extractor;
pub mod orchestrator;
pub mod repository;

#[cfg(test)]
pub(crate) mod testing;

pub use config::RunConfig;
pub use driver::{RunContext, RunSummary};
pub use error::{DestroyerError, DestroyerResult};
pub use extractor::RecordUriExtractor;
pub use orchestrator::{remove_instance, DoRef, Orchestrator, RecordOutcome};
pub use repository::RepositoryClient;
