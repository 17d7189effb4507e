//! Cinema configuration.
//!
//! Holds the operating limits the scheduler enforces. Defaults match the
//! house rules: 100 seats per screen and 20 minutes of cleaning between
//! showings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default seat limit per screen.
pub const DEFAULT_MAX_CAPACITY: i32 = 100;

/// Default cleaning time appended after every showing (minutes).
pub const DEFAULT_CLEANING_BUFFER_MINUTES: u32 = 20;

/// Longest cleaning buffer that can still fit inside one day.
pub const MAX_CLEANING_BUFFER_MINUTES: u32 = 24 * 60 - 1;

/// Scheduler limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CinemaConfig {
    /// Largest capacity a screen may be registered with.
    pub max_capacity: i32,
    /// Minutes the screen stays blocked after a film ends.
    pub cleaning_buffer_minutes: u32,
}

impl Default for CinemaConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
            cleaning_buffer_minutes: DEFAULT_CLEANING_BUFFER_MINUTES,
        }
    }
}

impl CinemaConfig {
    /// Sets the capacity limit.
    pub fn with_max_capacity(mut self, max_capacity: i32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Sets the cleaning buffer.
    pub fn with_cleaning_buffer(mut self, minutes: u32) -> Self {
        self.cleaning_buffer_minutes = minutes;
        self
    }

    /// Checks that the limits are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_capacity <= 0 {
            return Err(ConfigError::Invalid {
                field: "max_capacity".to_string(),
                reason: format!("must be positive, got {}", self.max_capacity),
            });
        }
        if self.cleaning_buffer_minutes > MAX_CLEANING_BUFFER_MINUTES {
            return Err(ConfigError::Invalid {
                field: "cleaning_buffer_minutes".to_string(),
                reason: format!(
                    "must be at most {}, got {}",
                    MAX_CLEANING_BUFFER_MINUTES, self.cleaning_buffer_minutes
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = CinemaConfig::default();
        assert_eq!(c.max_capacity, 100);
        assert_eq!(c.cleaning_buffer_minutes, 20);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = CinemaConfig::default()
            .with_max_capacity(250)
            .with_cleaning_buffer(30);
        assert_eq!(c.max_capacity, 250);
        assert_eq!(c.cleaning_buffer_minutes, 30);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_invalid_capacity() {
        let err = CinemaConfig::default().with_max_capacity(0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "max_capacity"));
    }

    #[test]
    fn test_invalid_cleaning_buffer() {
        assert!(CinemaConfig::default()
            .with_cleaning_buffer(MAX_CLEANING_BUFFER_MINUTES)
            .validate()
            .is_ok());

        let err = CinemaConfig::default()
            .with_cleaning_buffer(u32::MAX)
            .validate()
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { ref field, .. } if field == "cleaning_buffer_minutes")
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let c: CinemaConfig = serde_json::from_str(r#"{"max_capacity": 120}"#).unwrap();
        assert_eq!(c.max_capacity, 120);
        assert_eq!(c.cleaning_buffer_minutes, 20);
    }
}
