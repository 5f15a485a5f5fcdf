//! Unlink and delete of thumbnail-only digital objects.
//!
//! For one archival object this module:
//! 1. fetches the record and classifies every digital object its `digital_object` instances link,
//! 2. for each thumbnail-only object, removes the linking instance from the record and saves it,
//! 3. deletes the digital object.
//!
//! Failures are contained: a failed record fetch skips the record, and any failure while
//! handling one digital object skips only that object. Nothing is retried.
//!
//! ## Positional removal
//!
//! Instances are removed by position, and the position is captured when the reference is
//! discovered. Once a record has been saved with one instance fewer, positions captured earlier
//! may point at a different instance. Every removal after the first in a record therefore
//! re-fetches the record and locates the instance by the digital object it links, falling back
//! to the captured position only when it still links that object. An instance linking several
//! thumbnails is removed once; the other objects it linked go straight to deletion.

use crate::classifier::classify;
use crate::constants::DIGITAL_OBJECT_INSTANCE_TYPE;
use crate::repository::RepositoryClient;
use crate::{DestroyerError, DestroyerResult};
use aspace_client::{split_uri, ArchivalObject, Instance};
use std::collections::HashSet;

/// A thumbnail-only digital object found on a record, with the position of the linking instance
/// at discovery time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoRef {
    pub uri: String,
    pub index: usize,
}

/// Counts for one processed record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordOutcome {
    pub removed: usize,
    pub skipped: usize,
}

/// Mutation state of the record currently being processed.
#[derive(Default)]
struct RecordState {
    /// Discovery-time copy, valid only until the first removal.
    cached: Option<ArchivalObject>,
    /// Digital objects whose linking instance has already been removed and saved.
    unlinked: HashSet<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Disposition {
    Removed,
    Skipped,
}

/// Removes the instance at `index`, checking that the list shrank by exactly one.
///
/// # Errors
///
/// - [`DestroyerError::InvalidInstanceIndex`] if `index` is out of range (the list is untouched).
/// - [`DestroyerError::UnlinkInvariant`] if the length changed by anything other than one.
pub fn remove_instance(instances: &mut Vec<Instance>, index: usize) -> DestroyerResult<Instance> {
    let before = instances.len();
    if index >= before {
        return Err(DestroyerError::InvalidInstanceIndex { index, len: before });
    }

    let removed = instances.remove(index);

    let after = instances.len();
    if after + 1 != before {
        return Err(DestroyerError::UnlinkInvariant { before, after });
    }

    Ok(removed)
}

fn links(instance: &Instance, uri: &str) -> bool {
    instance.instance_type == DIGITAL_OBJECT_INSTANCE_TYPE && instance.references(uri)
}

/// Current position of the instance linking `doref.uri` in `record`.
pub fn locate_instance(record: &ArchivalObject, doref: &DoRef) -> Option<usize> {
    match record.instances.get(doref.index) {
        Some(instance) if links(instance, &doref.uri) => Some(doref.index),
        _ => record
            .instances
            .iter()
            .position(|instance| links(instance, &doref.uri)),
    }
}

/// Processes archival objects one at a time against a repository client.
pub struct Orchestrator<'a, C: ?Sized> {
    client: &'a C,
    dry_run: bool,
}

impl<'a, C> Orchestrator<'a, C>
where
    C: RepositoryClient + ?Sized,
{
    pub fn new(client: &'a C, dry_run: bool) -> Self {
        Self { client, dry_run }
    }

    /// Unlinks and deletes every thumbnail-only digital object on the record at `record_uri`.
    ///
    /// Never fails: errors are logged and the affected record or reference is skipped. In dry-run
    /// mode no update or delete is issued and each qualifying reference counts as skipped.
    pub fn process_record(&self, record_uri: &str) -> RecordOutcome {
        let mut outcome = RecordOutcome::default();

        tracing::info!("checking {} for thumbnail links", record_uri);

        let (repository_id, record_id) = match split_uri(record_uri) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!("{}", e);
                return outcome;
            }
        };

        let record = match self.client.fetch_record(repository_id, record_id) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("failed to fetch {}: {}", record_uri, e);
                return outcome;
            }
        };

        let refs = self.collect_refs(&record);
        if refs.is_empty() {
            tracing::info!("no thumbnail links found in {}", record_uri);
            return outcome;
        }

        let mut state = RecordState {
            cached: Some(record),
            ..Default::default()
        };
        for doref in &refs {
            match self.remove(repository_id, record_id, record_uri, &mut state, doref) {
                Ok(Disposition::Removed) => outcome.removed += 1,
                Ok(Disposition::Skipped) => outcome.skipped += 1,
                Err(e) => tracing::error!("failed to remove {}: {}", doref.uri, e),
            }
        }

        outcome
    }

    /// Thumbnail-only digital objects linked from `record`, in instance order.
    pub fn collect_refs(&self, record: &ArchivalObject) -> Vec<DoRef> {
        let mut refs = Vec::new();

        for (index, instance) in record.instances.iter().enumerate() {
            if instance.instance_type != DIGITAL_OBJECT_INSTANCE_TYPE {
                continue;
            }
            for uri in instance.digital_object_uris() {
                match classify(self.client, uri) {
                    Ok(true) => refs.push(DoRef {
                        uri: uri.to_string(),
                        index,
                    }),
                    Ok(false) => {}
                    Err(e) => tracing::error!("failed to classify {}: {}", uri, e),
                }
            }
        }

        refs
    }

    fn remove(
        &self,
        repository_id: i64,
        record_id: i64,
        record_uri: &str,
        state: &mut RecordState,
        doref: &DoRef,
    ) -> DestroyerResult<Disposition> {
        tracing::info!("unlinking {} from {}", doref.uri, record_uri);
        if self.dry_run {
            tracing::info!(
                "dry-run, skipping unlinking of {} from {}",
                doref.uri,
                record_uri
            );
        } else if state.unlinked.contains(&doref.uri) {
            tracing::info!(
                "{} was unlinked from {} with an earlier instance",
                doref.uri,
                record_uri
            );
        } else {
            let msg = self.unlink(repository_id, record_id, record_uri, state, doref)?;
            tracing::info!("{}", msg);
        }

        tracing::info!("deleting {}", doref.uri);
        self.delete(doref)
    }

    fn unlink(
        &self,
        repository_id: i64,
        record_id: i64,
        record_uri: &str,
        state: &mut RecordState,
        doref: &DoRef,
    ) -> DestroyerResult<String> {
        let mut record = match state.cached.take() {
            Some(record) => record,
            None => self.client.fetch_record(repository_id, record_id)?,
        };

        let index =
            locate_instance(&record, doref).ok_or_else(|| DestroyerError::StaleReference {
                uri: doref.uri.clone(),
                record: record_uri.to_string(),
            })?;
        if index != doref.index {
            tracing::debug!(
                "instance for {} moved from {} to {}",
                doref.uri,
                doref.index,
                index
            );
        }

        let removed = remove_instance(&mut record.instances, index)?;

        let msg = self
            .client
            .update_record(repository_id, record_id, &record)?;
        state
            .unlinked
            .extend(removed.digital_object_uris().map(str::to_string));

        Ok(msg)
    }

    fn delete(&self, doref: &DoRef) -> DestroyerResult<Disposition> {
        let (repository_id, object_id) = split_uri(&doref.uri)?;
        let digital_object = self
            .client
            .fetch_digital_object(repository_id, object_id)?;
        let file_uri = digital_object
            .file_versions
            .first()
            .map(|version| version.file_uri.as_str())
            .unwrap_or("none");

        if self.dry_run {
            tracing::info!(
                "dry-run, skipping deletion of {}, file-uri: {}, title: {}",
                doref.uri,
                file_uri,
                digital_object.title
            );
            return Ok(Disposition::Skipped);
        }

        let msg = self
            .client
            .delete_digital_object(repository_id, object_id)?
            .replace('\n', "");
        let audit = serde_json::json!({
            "file-uri": file_uri,
            "title": digital_object.title,
        });
        tracing::info!("{} {}", msg, audit);

        Ok(Disposition::Removed)
    }
}
