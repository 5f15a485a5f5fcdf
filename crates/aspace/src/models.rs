//! Record types returned by the ArchivesSpace API.
//!
//! Only the fields the maintenance pipeline reads are named. All other fields land in `extra`
//! and are serialised back unchanged, because updates replace the whole record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// An archival object (a described unit in a resource's hierarchy).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ArchivalObject {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub instances: Vec<Instance>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A typed attachment on an archival object.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Instance {
    #[serde(default)]
    pub instance_type: String,
    /// Link role (normally `ref`) to digital object URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_object: Option<BTreeMap<String, String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Instance {
    /// Digital object URIs referenced by this instance, in role order.
    pub fn digital_object_uris(&self) -> impl Iterator<Item = &str> {
        self.digital_object
            .iter()
            .flat_map(|refs| refs.values())
            .map(String::as_str)
    }

    /// True when this instance links to `uri`.
    pub fn references(&self, uri: &str) -> bool {
        self.digital_object_uris().any(|candidate| candidate == uri)
    }
}

/// A digital object (a surrogate file record attached to archival objects).
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DigitalObject {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub file_versions: Vec<FileVersion>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One stored file variant of a digital object.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FileVersion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_statement: Option<String>,
    #[serde(default)]
    pub file_uri: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
