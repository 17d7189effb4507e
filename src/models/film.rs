//! Film model.
//!
//! A film is registered once with a rating and a run length, and is
//! referenced (never copied) by every showing that screens it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ClockTime;
use crate::error::CinemaError;

/// A film in the cinema catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// Unique film name.
    pub name: String,
    /// Age classification.
    pub rating: Rating,
    /// Run length as registered ("H:MM" or "HH:MM"), kept verbatim.
    pub duration: String,
}

/// Age classification of a film.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    /// Universal.
    #[serde(rename = "U")]
    U,
    /// Parental guidance.
    #[serde(rename = "PG")]
    Pg,
    /// Suitable for 12 years and over.
    #[serde(rename = "12")]
    Twelve,
    /// Suitable only for 15 years and over.
    #[serde(rename = "15")]
    Fifteen,
    /// Adults only.
    #[serde(rename = "18")]
    Eighteen,
}

impl Rating {
    /// All ratings, youngest audience first.
    pub const ALL: [Rating; 5] = [
        Rating::U,
        Rating::Pg,
        Rating::Twelve,
        Rating::Fifteen,
        Rating::Eighteen,
    ];

    /// Canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::U => "U",
            Rating::Pg => "PG",
            Rating::Twelve => "12",
            Rating::Fifteen => "15",
            Rating::Eighteen => "18",
        }
    }
}

impl FromStr for Rating {
    type Err = CinemaError;

    /// Exact, case-sensitive match on the canonical label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rating::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or(CinemaError::InvalidRating)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Film {
    /// Creates a film. The duration is stored as given.
    pub fn new(name: impl Into<String>, rating: Rating, duration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            duration: duration.into(),
        }
    }

    /// Parsed run length, or `None` if the stored duration is malformed.
    pub fn run_length(&self) -> Option<ClockTime> {
        ClockTime::parse(&self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_parse() {
        assert_eq!("U".parse::<Rating>(), Ok(Rating::U));
        assert_eq!("PG".parse::<Rating>(), Ok(Rating::Pg));
        assert_eq!("12".parse::<Rating>(), Ok(Rating::Twelve));
        assert_eq!("15".parse::<Rating>(), Ok(Rating::Fifteen));
        assert_eq!("18".parse::<Rating>(), Ok(Rating::Eighteen));
    }

    #[test]
    fn test_rating_rejects() {
        assert_eq!("R".parse::<Rating>(), Err(CinemaError::InvalidRating));
        assert_eq!("pg".parse::<Rating>(), Err(CinemaError::InvalidRating));
        assert_eq!("".parse::<Rating>(), Err(CinemaError::InvalidRating));
        assert_eq!(" 12".parse::<Rating>(), Err(CinemaError::InvalidRating));
    }

    #[test]
    fn test_rating_display_and_serde() {
        assert_eq!(Rating::Pg.to_string(), "PG");
        assert_eq!(serde_json::to_string(&Rating::Fifteen).unwrap(), "\"15\"");
        let r: Rating = serde_json::from_str("\"U\"").unwrap();
        assert_eq!(r, Rating::U);
    }

    #[test]
    fn test_film_run_length() {
        let film = Film::new("Jaws", Rating::Pg, "2:04");
        assert_eq!(film.run_length(), Some(ClockTime::new(2, 4)));
        assert_eq!(film.duration, "2:04");

        let broken = Film::new("Broken", Rating::U, "two hours");
        assert!(broken.run_length().is_none());
    }
}
