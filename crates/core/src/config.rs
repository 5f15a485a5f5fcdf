//! Run configuration.
//!
//! Resolved once at startup from command-line flags and handed to the [`RunContext`](crate::RunContext).
//! Nothing in the pipeline reads flags or environment variables directly.

use crate::{DestroyerError, DestroyerResult};

/// Target and mode of a single maintenance run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    repository_id: i64,
    resource_id: i64,
    dry_run: bool,
}

impl RunConfig {
    /// Create a new `RunConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`DestroyerError::InvalidInput`] if either identifier is not positive.
    pub fn new(repository_id: i64, resource_id: i64, dry_run: bool) -> DestroyerResult<Self> {
        if repository_id <= 0 {
            return Err(DestroyerError::InvalidInput(format!(
                "repository id must be positive, got {}",
                repository_id
            )));
        }
        if resource_id <= 0 {
            return Err(DestroyerError::InvalidInput(format!(
                "resource id must be positive, got {}",
                resource_id
            )));
        }

        Ok(Self {
            repository_id,
            resource_id,
            dry_run,
        })
    }

    pub fn repository_id(&self) -> i64 {
        self.repository_id
    }

    pub fn resource_id(&self) -> i64 {
        self.resource_id
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
