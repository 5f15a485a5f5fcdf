//! In-memory repository client for unit tests.

use crate::repository::RepositoryClient;
use aspace_client::{
    split_uri, ArchivalObject, AspaceError, AspaceResult, DigitalObject, FileVersion, Instance,
};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, HashSet};

fn not_found(uri: String) -> AspaceError {
    AspaceError::Status {
        status: 404,
        body: format!("{} not found", uri),
    }
}

fn ids(uri: &str) -> (i64, i64) {
    split_uri(uri).expect("test fixtures use canonical uris")
}

/// Records every mutating call and applies it to its own state, so a re-fetch after an update
/// sees the updated record.
#[derive(Default)]
pub(crate) struct FakeClient {
    tree: RefCell<Option<serde_json::Value>>,
    records: RefCell<HashMap<(i64, i64), ArchivalObject>>,
    digital_objects: RefCell<HashMap<(i64, i64), DigitalObject>>,
    failing_updates: RefCell<HashSet<(i64, i64)>>,
    updates: RefCell<Vec<(i64, i64, ArchivalObject)>>,
    deletes: RefCell<Vec<(i64, i64)>>,
    record_fetches: Cell<usize>,
    digital_object_fetches: Cell<usize>,
}

impl FakeClient {
    pub(crate) fn set_tree(&self, tree: serde_json::Value) {
        *self.tree.borrow_mut() = Some(tree);
    }

    pub(crate) fn add_record(&self, record: ArchivalObject) {
        self.records.borrow_mut().insert(ids(&record.uri), record);
    }

    pub(crate) fn add_digital_object(&self, object: DigitalObject) {
        self.digital_objects
            .borrow_mut()
            .insert(ids(&object.uri), object);
    }

    pub(crate) fn fail_updates_for(&self, record_uri: &str) {
        self.failing_updates.borrow_mut().insert(ids(record_uri));
    }

    pub(crate) fn record(&self, uri: &str) -> Option<ArchivalObject> {
        self.records.borrow().get(&ids(uri)).cloned()
    }

    pub(crate) fn updates(&self) -> Vec<(i64, i64, ArchivalObject)> {
        self.updates.borrow().clone()
    }

    pub(crate) fn deletes(&self) -> Vec<(i64, i64)> {
        self.deletes.borrow().clone()
    }

    pub(crate) fn record_fetches(&self) -> usize {
        self.record_fetches.get()
    }

    pub(crate) fn digital_object_fetches(&self) -> usize {
        self.digital_object_fetches.get()
    }
}

impl RepositoryClient for FakeClient {
    fn fetch_tree(
        &self,
        repository_id: i64,
        resource_id: i64,
    ) -> AspaceResult<serde_json::Value> {
        self.tree.borrow().clone().ok_or_else(|| {
            not_found(format!(
                "/repositories/{}/resources/{}/tree",
                repository_id, resource_id
            ))
        })
    }

    fn fetch_record(&self, repository_id: i64, record_id: i64) -> AspaceResult<ArchivalObject> {
        self.record_fetches.set(self.record_fetches.get() + 1);
        self.records
            .borrow()
            .get(&(repository_id, record_id))
            .cloned()
            .ok_or_else(|| {
                not_found(format!(
                    "/repositories/{}/archival_objects/{}",
                    repository_id, record_id
                ))
            })
    }

    fn update_record(
        &self,
        repository_id: i64,
        record_id: i64,
        record: &ArchivalObject,
    ) -> AspaceResult<String> {
        if self
            .failing_updates
            .borrow()
            .contains(&(repository_id, record_id))
        {
            return Err(AspaceError::Status {
                status: 409,
                body: "lock_version conflict".into(),
            });
        }
        self.updates
            .borrow_mut()
            .push((repository_id, record_id, record.clone()));
        self.records
            .borrow_mut()
            .insert((repository_id, record_id), record.clone());
        Ok(format!("{{\"status\":\"Updated\",\"id\":{}}}", record_id))
    }

    fn fetch_digital_object(
        &self,
        repository_id: i64,
        object_id: i64,
    ) -> AspaceResult<DigitalObject> {
        self.digital_object_fetches
            .set(self.digital_object_fetches.get() + 1);
        self.digital_objects
            .borrow()
            .get(&(repository_id, object_id))
            .cloned()
            .ok_or_else(|| {
                not_found(format!(
                    "/repositories/{}/digital_objects/{}",
                    repository_id, object_id
                ))
            })
    }

    fn delete_digital_object(&self, repository_id: i64, object_id: i64) -> AspaceResult<String> {
        let removed = self
            .digital_objects
            .borrow_mut()
            .remove(&(repository_id, object_id));
        if removed.is_none() {
            return Err(not_found(format!(
                "/repositories/{}/digital_objects/{}",
                repository_id, object_id
            )));
        }
        self.deletes.borrow_mut().push((repository_id, object_id));
        Ok(format!("{{\"status\":\"Deleted\",\"id\":{}}}\n", object_id))
    }
}

pub(crate) fn digital_object(uri: &str, use_statements: &[Option<&str>]) -> DigitalObject {
    DigitalObject {
        uri: uri.to_string(),
        title: format!("Object {}", uri),
        file_versions: use_statements
            .iter()
            .enumerate()
            .map(|(i, use_statement)| FileVersion {
                use_statement: use_statement.map(str::to_string),
                file_uri: format!("https://img.example.org/{}.jpg", i),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

pub(crate) fn thumbnail(uri: &str) -> DigitalObject {
    digital_object(uri, &[Some("Image-Thumbnail")])
}

pub(crate) fn digital_object_instance(uri: &str) -> Instance {
    let mut refs = BTreeMap::new();
    refs.insert("ref".to_string(), uri.to_string());
    Instance {
        instance_type: "digital_object".into(),
        digital_object: Some(refs),
        ..Default::default()
    }
}

pub(crate) fn container_instance() -> Instance {
    Instance {
        instance_type: "mixed_materials".into(),
        ..Default::default()
    }
}

pub(crate) fn archival_object(uri: &str, instances: Vec<Instance>) -> ArchivalObject {
    ArchivalObject {
        uri: uri.to_string(),
        instances,
        ..Default::default()
    }
}
