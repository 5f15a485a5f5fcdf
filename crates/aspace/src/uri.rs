use crate::{AspaceError, AspaceResult};

/// Splits a canonical record URI into `(repository_id, record_id)`.
///
/// Accepts `/repositories/{repository_id}/{kind}/{record_id}` for any record kind, for example
/// `/repositories/2/archival_objects/1234` or `/repositories/2/digital_objects/99`.
///
/// # Errors
///
/// Returns [`AspaceError::InvalidUri`] if the path does not have exactly four segments, does not
/// start with `repositories`, or either identifier is not a number.
pub fn split_uri(uri: &str) -> AspaceResult<(i64, i64)> {
    let invalid = || AspaceError::InvalidUri(uri.to_string());

    let segments: Vec<&str> = uri.trim().trim_matches('/').split('/').collect();
    match segments.as_slice() {
        ["repositories", repository_id, kind, record_id] if !kind.is_empty() => {
            let repository_id = repository_id.parse::<i64>().map_err(|_| invalid())?;
            let record_id = record_id.parse::<i64>().map_err(|_| invalid())?;
            Ok((repository_id, record_id))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_archival_object_uri() {
        assert_eq!(
            split_uri("/repositories/7/archival_objects/1234").unwrap(),
            (7, 1234)
        );
    }

    #[test]
    fn test_split_digital_object_uri() {
        assert_eq!(
            split_uri("/repositories/2/digital_objects/99").unwrap(),
            (2, 99)
        );
    }

    #[test]
    fn test_split_rejects_non_numeric_ids() {
        assert!(split_uri("/repositories/seven/archival_objects/1").is_err());
        assert!(split_uri("/repositories/7/archival_objects/abc").is_err());
    }

    #[test]
    fn test_split_rejects_wrong_shape() {
        assert!(split_uri("").is_err());
        assert!(split_uri("/repositories/7").is_err());
        assert!(split_uri("/repositories/7/archival_objects").is_err());
        assert!(split_uri("/repositories/7/archival_objects/1/extra").is_err());
        assert!(split_uri("/agents/7/people/1").is_err());
    }
}
