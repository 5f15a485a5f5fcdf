//! Constants used throughout the destroyer core crate.

/// Instance type tag of instances that link a digital object.
pub const DIGITAL_OBJECT_INSTANCE_TYPE: &str = "digital_object";

/// Use statement of a thumbnail-only file version. Compared case-sensitively.
pub const THUMBNAIL_USE_STATEMENT: &str = "Image-Thumbnail";

/// Name used in log banners and the run summary.
pub const TOOL_NAME: &str = "thumbnail-destroyer";

/// Default client configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "go-aspace.yml";

/// Default log file, recreated on every run.
pub const DEFAULT_LOG_FILE: &str = "thumbnail-destroyer.log";

/// Default per-request timeout for the repository client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
