use aspace_client::AspaceError;

#[derive(Debug, thiserror::Error)]
pub enum DestroyerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("repository client error: {0}")]
    Client(#[from] AspaceError),
    #[error("failed to serialize resource tree: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to compile archival object pattern: {0}")]
    Pattern(regex::Error),
    #[error("instance index {index} is out of range for {len} instances")]
    InvalidInstanceIndex { index: usize, len: usize },
    #[error("instance count after unlink is {after}, expected {before} - 1")]
    UnlinkInvariant { before: usize, after: usize },
    #[error("{uri} is no longer linked from {record}")]
    StaleReference { uri: String, record: String },
}

pub type DestroyerResult<T> = std::result::Result<T, DestroyerError>;
