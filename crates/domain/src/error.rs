//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ThermoError`] via `From`. The HTTP adapter maps the variants to
//! status codes.

use std::error::Error as StdError;

/// Boxed source error coming from an adapter.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Root error for every thermohub operation.
#[derive(Debug, thiserror::Error)]
pub enum ThermoError {
    /// Input rejected before anything was mutated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No relay matches the requested key.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The backing store could not be opened, read, or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] BoxError),

    /// The backing store content does not have the rule set shape.
    #[error("corrupt rule data: {0}")]
    CorruptData(#[source] BoxError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A schedule entry carries an empty `time`.
    ///
    /// `schedule` holds the whole submitted schedule serialized as JSON.
    #[error("time field must not be empty: {schedule}")]
    EmptyScheduleTime { schedule: String },
}

/// A relay addressed by `(pin, designator)` does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("relay not found: pin={pin} dec={designator:?}")]
pub struct NotFoundError {
    pub pin: i64,
    pub designator: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_validation_error_with_payload() {
        let err = ThermoError::from(ValidationError::EmptyScheduleTime {
            schedule: r#"[{"time":"","temperature":20.0}]"#.to_string(),
        });
        assert_eq!(
            err.to_string(),
            r#"time field must not be empty: [{"time":"","temperature":20.0}]"#
        );
    }

    #[test]
    fn should_display_not_found_with_key() {
        let err = ThermoError::from(NotFoundError {
            pin: 4,
            designator: "a".to_string(),
        });
        assert_eq!(err.to_string(), r#"relay not found: pin=4 dec="a""#);
    }

    #[test]
    fn should_keep_source_for_storage_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ThermoError::StorageUnavailable(Box::new(io));
        assert!(StdError::source(&err).is_some());
        assert!(err.to_string().contains("missing"));
    }
}
