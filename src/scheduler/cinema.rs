//! Cinema aggregate and showing scheduler.
//!
//! # Algorithm
//!
//! Placing a showing:
//! 1. Parse the requested start time.
//! 2. Resolve the film and parse its run length.
//! 3. End = start + run length + cleaning buffer; reject at or past midnight.
//! 4. Resolve the screen.
//! 5. Scan the screen's showings in order; stop at the first conflict.
//! 6. Append the showing.
//!
//! All checks run before any mutation, so a rejected call leaves the
//! cinema untouched.
//!
//! # Complexity
//! O(f + s + k) per placement, where f=films, s=screens, k=showings on
//! the target screen. Lookups are linear scans by name.

use serde::Serialize;
use tracing::{debug, info, trace};

use super::ShowingReport;
use crate::config::CinemaConfig;
use crate::error::{CinemaError, ConfigError, Result};
use crate::models::{ClockTime, Film, Rating, Screen, Showing, ShowingWindow};

/// A cinema: the film catalog, its screens, and their showings.
///
/// # Example
///
/// ```
/// use u_cinema::scheduler::Cinema;
/// use u_cinema::CinemaError;
///
/// let mut cinema = Cinema::new();
/// cinema.add_new_screen("Screen 1", 50).unwrap();
/// cinema.add_new_film("Jaws", "PG", "2:00").unwrap();
///
/// cinema.add_showing("Jaws", "Screen 1", "14:00").unwrap();
/// assert_eq!(
///     cinema.add_showing("Jaws", "Screen 1", "15:00"),
///     Err(CinemaError::TimeUnavailable)
/// );
///
/// let report = cinema.all_showings();
/// assert_eq!(report.get("Jaws").unwrap(), ["Screen 1 Jaws (PG) 14:00 - 16:20"]);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cinema {
    /// Registered films, in registration order.
    pub(crate) films: Vec<Film>,
    /// Registered screens, in registration order.
    pub(crate) screens: Vec<Screen>,
    /// Operating limits.
    pub(crate) config: CinemaConfig,
}

impl Cinema {
    /// Creates an empty cinema with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cinema with the given limits.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] if the limits fail [`CinemaConfig::validate`].
    pub fn with_config(config: CinemaConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            films: Vec::new(),
            screens: Vec::new(),
            config,
        })
    }

    /// Registers a screen.
    ///
    /// # Errors
    /// - [`CinemaError::CapacityExceeded`] if `capacity` is above the limit
    ///   (checked first).
    /// - [`CinemaError::DuplicateScreen`] if the name is taken.
    pub fn add_new_screen(&mut self, name: &str, capacity: i32) -> Result<()> {
        if capacity > self.config.max_capacity {
            debug!(
                screen = name,
                capacity,
                max = self.config.max_capacity,
                "screen rejected: capacity"
            );
            return Err(CinemaError::CapacityExceeded);
        }
        if self.screen(name).is_some() {
            debug!(screen = name, "screen rejected: duplicate");
            return Err(CinemaError::DuplicateScreen);
        }

        self.screens.push(Screen::new(name, capacity));
        info!(screen = name, capacity, "screen added");
        Ok(())
    }

    /// Registers a film.
    ///
    /// `rating` must be one of "U", "PG", "12", "15", "18". `duration` must
    /// be "H:MM" or "HH:MM" with hours > 0 and minutes <= 60; it is stored
    /// verbatim.
    ///
    /// # Errors
    /// [`CinemaError::DuplicateFilm`], then [`CinemaError::InvalidRating`],
    /// then [`CinemaError::InvalidDuration`], in that order.
    pub fn add_new_film(&mut self, name: &str, rating: &str, duration: &str) -> Result<()> {
        if self.film(name).is_some() {
            debug!(film = name, "film rejected: duplicate");
            return Err(CinemaError::DuplicateFilm);
        }
        let rating: Rating = rating.parse().inspect_err(|_| {
            debug!(film = name, rating, "film rejected: rating");
        })?;
        if ClockTime::parse(duration).is_none() {
            debug!(film = name, duration, "film rejected: duration");
            return Err(CinemaError::InvalidDuration);
        }

        self.films.push(Film::new(name, rating, duration));
        info!(film = name, %rating, duration, "film added");
        Ok(())
    }

    /// Schedules a showing of `film_name` on `screen_name` at `start_time`.
    ///
    /// The screen is blocked from the start until the film's run length plus
    /// the cleaning buffer has elapsed. Back-to-back showings are allowed.
    ///
    /// # Errors
    /// Checked in this order: [`CinemaError::InvalidStartTime`],
    /// [`CinemaError::InvalidFilm`], [`CinemaError::InvalidDuration`],
    /// [`CinemaError::EndsAfterMidnight`], [`CinemaError::InvalidScreen`],
    /// then, per existing showing, [`CinemaError::InvalidStartTime`] /
    /// [`CinemaError::InvalidEndTime`] for unreadable stored times, and
    /// finally [`CinemaError::TimeUnavailable`] on a conflict.
    pub fn add_showing(
        &mut self,
        film_name: &str,
        screen_name: &str,
        start_time: &str,
    ) -> Result<()> {
        let start = ClockTime::parse(start_time).ok_or_else(|| {
            debug!(start_time, "showing rejected: start time");
            CinemaError::InvalidStartTime
        })?;

        let film_index = self
            .films
            .iter()
            .position(|f| f.name == film_name)
            .ok_or_else(|| {
                debug!(film = film_name, "showing rejected: unknown film");
                CinemaError::InvalidFilm
            })?;
        let run_length = self.films[film_index]
            .run_length()
            .ok_or(CinemaError::InvalidDuration)?;

        let end = start
            .end_of_run(run_length, self.config.cleaning_buffer_minutes)
            .filter(|end| !end.is_after_midnight());
        let Some(end) = end else {
            debug!(
                film = film_name,
                start_time,
                "showing rejected: ends after midnight"
            );
            return Err(CinemaError::EndsAfterMidnight);
        };

        let screen = self
            .screens
            .iter_mut()
            .find(|s| s.name == screen_name)
            .ok_or_else(|| {
                debug!(screen = screen_name, "showing rejected: unknown screen");
                CinemaError::InvalidScreen
            })?;

        let intended = ShowingWindow::from_clock(start, end).ok_or(CinemaError::InvalidStartTime)?;
        check_availability(screen, &intended)?;

        let end_time = end.to_string();
        info!(
            film = film_name,
            screen = screen_name,
            start_time,
            end_time = %end_time,
            "showing added"
        );
        screen.add_showing(Showing::new(film_index, start_time, end_time));
        Ok(())
    }

    /// Lists every showing grouped by film name.
    ///
    /// Screens are visited in registration order and each screen's showings
    /// in scheduling order. A film's group appears when it is first met;
    /// entries read `"<screen> <film> (<rating>) <start> - <end>"`.
    pub fn all_showings(&self) -> ShowingReport {
        let mut report = ShowingReport::new();
        for screen in &self.screens {
            for showing in &screen.showings {
                let Some(film) = self.films.get(showing.film) else {
                    debug!(screen = %screen.name, film = showing.film, "showing skipped: dangling film");
                    continue;
                };
                report.push(
                    &film.name,
                    format!(
                        "{} {} ({}) {} - {}",
                        screen.name, film.name, film.rating, showing.start_time, showing.end_time
                    ),
                );
            }
        }
        report
    }

    /// Registered films.
    pub fn films(&self) -> &[Film] {
        &self.films
    }

    /// Registered screens.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Finds a film by exact name.
    pub fn film(&self, name: &str) -> Option<&Film> {
        self.films.iter().find(|f| f.name == name)
    }

    /// Finds a screen by exact name.
    pub fn screen(&self, name: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.name == name)
    }

    /// Showings on a screen, or `None` for an unknown screen.
    pub fn showings_on(&self, screen_name: &str) -> Option<&[Showing]> {
        self.screen(screen_name).map(|s| s.showings.as_slice())
    }

    /// Film shown by a showing.
    pub fn film_of(&self, showing: &Showing) -> Option<&Film> {
        self.films.get(showing.film)
    }

    /// Total showings across all screens.
    pub fn showing_count(&self) -> usize {
        self.screens.iter().map(|s| s.showing_count()).sum()
    }

    /// Active limits.
    pub fn config(&self) -> &CinemaConfig {
        &self.config
    }
}

/// Rejects `intended` if it conflicts with any showing already on `screen`.
///
/// Stored times are re-read on every scan; the first unreadable one or the
/// first conflict ends the scan.
fn check_availability(screen: &Screen, intended: &ShowingWindow) -> Result<()> {
    for existing in &screen.showings {
        let start = existing
            .start()
            .and_then(|t| t.to_instant())
            .ok_or_else(|| {
                debug!(screen = %screen.name, start_time = %existing.start_time, "stored start time unreadable");
                CinemaError::InvalidStartTime
            })?;
        let end = existing
            .end()
            .and_then(|t| t.to_instant())
            .ok_or_else(|| {
                debug!(screen = %screen.name, end_time = %existing.end_time, "stored end time unreadable");
                CinemaError::InvalidEndTime
            })?;

        let existing_window = ShowingWindow::new(start, end);
        trace!(screen = %screen.name, ?existing_window, ?intended, "checking conflict");
        if intended.conflicts_with(&existing_window) {
            debug!(
                screen = %screen.name,
                start_time = %existing.start_time,
                end_time = %existing.end_time,
                "showing rejected: time unavailable"
            );
            return Err(CinemaError::TimeUnavailable);
        }
    }
    Ok(())
}
