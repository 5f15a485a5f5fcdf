//! Candidate discovery.
//!
//! Archival object URIs are pulled out of a resource tree by scanning its serialised JSON for the
//! canonical URI pattern instead of walking the tree structure. Tree payloads nest differently
//! between server versions and the scan does not care. It also picks up URIs that appear in
//! unrelated fields; downstream processing is idempotent for those.

use crate::{DestroyerError, DestroyerResult};
use regex::bytes::Regex;

/// Finds archival object URIs belonging to one repository.
#[derive(Clone, Debug)]
pub struct RecordUriExtractor {
    pattern: Regex,
}

impl RecordUriExtractor {
    /// Builds an extractor matching `/repositories/{repository_id}/archival_objects/{id}`.
    pub fn new(repository_id: i64) -> DestroyerResult<Self> {
        let pattern = Regex::new(&format!(
            "/repositories/{}/archival_objects/[0-9]+",
            repository_id
        ))
        .map_err(DestroyerError::Pattern)?;
        Ok(Self { pattern })
    }

    /// Serialises `tree` and returns every matching URI in order of appearance.
    ///
    /// Duplicates are kept. A tree without matches yields an empty list.
    pub fn extract(&self, tree: &serde_json::Value) -> DestroyerResult<Vec<String>> {
        let bytes = serde_json::to_vec(tree).map_err(DestroyerError::Serialization)?;
        Ok(self.extract_from_bytes(&bytes))
    }

    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Vec<String> {
        self.pattern
            .find_iter(bytes)
            .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
            .collect()
    }
}
