//! Thumbnail classification.
//!
//! A digital object is removable only when its single file version is a thumbnail. Objects with
//! more than one file version are never removable, whatever their use statements say, since the
//! other versions may carry full-resolution content.

use crate::constants::THUMBNAIL_USE_STATEMENT;
use crate::repository::RepositoryClient;
use crate::DestroyerResult;
use aspace_client::{split_uri, DigitalObject};

/// True iff `digital_object` has exactly one file version and it is tagged `Image-Thumbnail`.
pub fn is_thumbnail_only(digital_object: &DigitalObject) -> bool {
    match digital_object.file_versions.as_slice() {
        [only] => only.use_statement.as_deref() == Some(THUMBNAIL_USE_STATEMENT),
        _ => false,
    }
}

/// Fetches the digital object at `digital_object_uri` and classifies it.
///
/// # Errors
///
/// Returns a `DestroyerError` if the URI cannot be split or the fetch fails.
pub fn classify<C>(client: &C, digital_object_uri: &str) -> DestroyerResult<bool>
where
    C: RepositoryClient + ?Sized,
{
    let (repository_id, object_id) = split_uri(digital_object_uri)?;
    let digital_object = client.fetch_digital_object(repository_id, object_id)?;
    Ok(is_thumbnail_only(&digital_object))
}
