//! Storage-specific error type wrapping IO and JSON errors.

use thermohub_domain::error::ThermoError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The file could not be opened, read, written, or renamed.
    #[error("rules file IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file content is not a valid rule set.
    #[error("rules file JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for ThermoError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(_) => Self::StorageUnavailable(Box::new(err)),
            StorageError::Json(_) => Self::CorruptData(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_io_error_to_storage_unavailable() {
        let err = StorageError::from(std::io::Error::other("disk gone"));
        assert!(matches!(
            ThermoError::from(err),
            ThermoError::StorageUnavailable(_)
        ));
    }

    #[test]
    fn should_map_json_error_to_corrupt_data() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            ThermoError::from(StorageError::from(json_err)),
            ThermoError::CorruptData(_)
        ));
    }
}
