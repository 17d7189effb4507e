//! Screen and showing models.
//!
//! A screen owns its showings in insertion order. Showings point at their
//! film by position in the cinema's film registry.

use serde::{Deserialize, Serialize};

use super::ClockTime;

/// An auditorium that films are shown on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Unique screen name.
    pub name: String,
    /// Seats available.
    pub capacity: i32,
    /// Scheduled showings, in the order they were added.
    pub showings: Vec<Showing>,
}

/// A scheduled screening of one film on one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showing {
    /// Index of the film in the cinema's film registry.
    pub film: usize,
    /// Start time exactly as requested.
    pub start_time: String,
    /// Computed end time (run length plus cleaning), unpadded "H:M".
    pub end_time: String,
}

impl Screen {
    /// Creates a screen with no showings.
    pub fn new(name: impl Into<String>, capacity: i32) -> Self {
        Self {
            name: name.into(),
            capacity,
            showings: Vec::new(),
        }
    }

    /// Adds a showing.
    pub fn add_showing(&mut self, showing: Showing) {
        self.showings.push(showing);
    }

    /// Number of showings.
    pub fn showing_count(&self) -> usize {
        self.showings.len()
    }
}

impl Showing {
    /// Creates a new showing.
    pub fn new(film: usize, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            film,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Parsed start time.
    pub fn start(&self) -> Option<ClockTime> {
        ClockTime::parse(&self.start_time)
    }

    /// Parsed end time.
    ///
    /// `None` when the stored end has single-digit minutes ("16:5"), since
    /// end times are written unpadded but read with the two-digit grammar.
    pub fn end(&self) -> Option<ClockTime> {
        ClockTime::parse(&self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_new() {
        let s = Screen::new("Screen 1", 50);
        assert_eq!(s.name, "Screen 1");
        assert_eq!(s.capacity, 50);
        assert_eq!(s.showing_count(), 0);
    }

    #[test]
    fn test_showing_times() {
        let sh = Showing::new(0, "14:00", "16:20");
        assert_eq!(sh.start(), Some(ClockTime::new(14, 0)));
        assert_eq!(sh.end(), Some(ClockTime::new(16, 20)));
    }

    #[test]
    fn test_unpadded_end_does_not_parse() {
        let sh = Showing::new(0, "14:00", "16:5");
        assert!(sh.end().is_none());
        assert_eq!(sh.start(), Some(ClockTime::new(14, 0)));
    }

    #[test]
    fn test_add_showing_keeps_order() {
        let mut s = Screen::new("Screen 1", 50);
        s.add_showing(Showing::new(0, "10:00", "12:20"));
        s.add_showing(Showing::new(1, "12:20", "14:40"));
        assert_eq!(s.showings[0].start_time, "10:00");
        assert_eq!(s.showings[1].film, 1);
    }
}
