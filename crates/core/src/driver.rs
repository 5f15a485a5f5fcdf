//! Run sequencing.
//!
//! [`RunContext`] owns the repository client, the run configuration and the running totals, and
//! walks every candidate archival object of the target resource through the
//! [`Orchestrator`](crate::Orchestrator). Per-record failures never stop a run.

use crate::config::RunConfig;
use crate::constants::TOOL_NAME;
use crate::extractor::RecordUriExtractor;
use crate::orchestrator::{Orchestrator, RecordOutcome};
use crate::repository::RepositoryClient;
use crate::DestroyerResult;
use std::fmt;

/// Run-wide totals.
///
/// Only completed removals and dry-run skips are counted. Failed operations appear in the log only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub removed: usize,
    pub skipped: usize,
}

impl RunSummary {
    fn absorb(&mut self, outcome: RecordOutcome) {
        self.removed += outcome.removed;
        self.skipped += outcome.skipped;
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} complete, {} digital objects unlinked and removed, {} skipped",
            TOOL_NAME, self.removed, self.skipped
        )
    }
}

/// Explicit state for one run.
pub struct RunContext<C> {
    client: C,
    config: RunConfig,
    totals: RunSummary,
}

impl<C: RepositoryClient> RunContext<C> {
    pub fn new(client: C, config: RunConfig) -> Self {
        Self {
            client,
            config,
            totals: RunSummary::default(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn totals(&self) -> RunSummary {
        self.totals
    }

    /// Archival object URIs found in the target resource's tree, in tree order.
    ///
    /// # Errors
    ///
    /// Returns a `DestroyerError` if the tree cannot be fetched or serialised.
    pub fn candidates(&self) -> DestroyerResult<Vec<String>> {
        let extractor = RecordUriExtractor::new(self.config.repository_id())?;
        let tree = self
            .client
            .fetch_tree(self.config.repository_id(), self.config.resource_id())?;
        extractor.extract(&tree)
    }

    /// Processes every candidate and returns the accumulated totals.
    pub fn run(&mut self) -> RunSummary {
        if self.config.dry_run() {
            tracing::info!("running in dry-run mode, no digital objects will be unlinked or deleted");
        }

        let candidates = match self.candidates() {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::error!(
                    "failed to collect archival objects for /repositories/{}/resources/{}: {}",
                    self.config.repository_id(),
                    self.config.resource_id(),
                    e
                );
                Vec::new()
            }
        };
        tracing::info!("found {} archival objects to check", candidates.len());

        let orchestrator = Orchestrator::new(&self.client, self.config.dry_run());
        for uri in &candidates {
            let outcome = orchestrator.process_record(uri);
            self.totals.absorb(outcome);
        }

        tracing::info!("{}", self.totals);
        self.totals
    }
}
