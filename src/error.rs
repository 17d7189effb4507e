//! Error types.
//!
//! Every scheduling operation reports exactly one [`CinemaError`] kind on
//! failure. Messages are the labels callers display to operators.

use thiserror::Error;

/// Failure of a cinema catalog or scheduling operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CinemaError {
    /// Screen capacity above the configured limit.
    #[error("Exceeded max capacity")]
    CapacityExceeded,

    /// A screen with the same name is already registered.
    #[error("Screen already exists")]
    DuplicateScreen,

    /// A film with the same name is already registered.
    #[error("Film already exists")]
    DuplicateFilm,

    /// Rating is not one of U, PG, 12, 15, 18.
    #[error("Invalid rating")]
    InvalidRating,

    /// Film duration is not a valid "H:MM" value.
    #[error("Invalid duration")]
    InvalidDuration,

    /// Showing start time is not a valid "H:MM" value.
    #[error("Invalid start time")]
    InvalidStartTime,

    /// No film registered under the requested name.
    #[error("Invalid film")]
    InvalidFilm,

    /// The showing (plus cleaning) would run to midnight or later.
    #[error("Invalid start time - film ends after midnight")]
    EndsAfterMidnight,

    /// No screen registered under the requested name.
    #[error("Invalid screen")]
    InvalidScreen,

    /// A stored showing end time could not be parsed.
    #[error("Invalid end time")]
    InvalidEndTime,

    /// The showing conflicts with one already on the screen.
    #[error("Time unavailable")]
    TimeUnavailable,
}

/// Failure while checking a [`CinemaConfig`](crate::config::CinemaConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, CinemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CinemaError::CapacityExceeded.to_string(), "Exceeded max capacity");
        assert_eq!(
            CinemaError::EndsAfterMidnight.to_string(),
            "Invalid start time - film ends after midnight"
        );
        assert_eq!(CinemaError::TimeUnavailable.to_string(), "Time unavailable");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            field: "max_capacity".into(),
            reason: "must be positive".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'max_capacity': must be positive"
        );
    }
}
