//! Repository client seam.
//!
//! The pipeline talks to the archival repository only through [`RepositoryClient`], so a run can
//! be driven against the live API or an in-memory substitute.

use aspace_client::{AspaceClient, AspaceResult, ArchivalObject, DigitalObject};

/// Read and write operations the pipeline needs from the archival repository.
pub trait RepositoryClient {
    /// Full descendant tree of a resource, schema not interpreted.
    fn fetch_tree(&self, repository_id: i64, resource_id: i64)
        -> AspaceResult<serde_json::Value>;

    fn fetch_record(&self, repository_id: i64, record_id: i64) -> AspaceResult<ArchivalObject>;

    /// Replaces the whole record; there is no partial update.
    fn update_record(
        &self,
        repository_id: i64,
        record_id: i64,
        record: &ArchivalObject,
    ) -> AspaceResult<String>;

    fn fetch_digital_object(
        &self,
        repository_id: i64,
        object_id: i64,
    ) -> AspaceResult<DigitalObject>;

    fn delete_digital_object(&self, repository_id: i64, object_id: i64) -> AspaceResult<String>;
}

impl RepositoryClient for AspaceClient {
    fn fetch_tree(
        &self,
        repository_id: i64,
        resource_id: i64,
    ) -> AspaceResult<serde_json::Value> {
        self.get_resource_tree(repository_id, resource_id)
    }

    fn fetch_record(&self, repository_id: i64, record_id: i64) -> AspaceResult<ArchivalObject> {
        self.get_archival_object(repository_id, record_id)
    }

    fn update_record(
        &self,
        repository_id: i64,
        record_id: i64,
        record: &ArchivalObject,
    ) -> AspaceResult<String> {
        self.update_archival_object(repository_id, record_id, record)
    }

    fn fetch_digital_object(
        &self,
        repository_id: i64,
        object_id: i64,
    ) -> AspaceResult<DigitalObject> {
        self.get_digital_object(repository_id, object_id)
    }

    fn delete_digital_object(&self, repository_id: i64, object_id: i64) -> AspaceResult<String> {
        AspaceClient::delete_digital_object(self, repository_id, object_id)
    }
}
