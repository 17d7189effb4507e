//! Cinema domain models.
//!
//! Provides the catalog types (films, screens) and the time types the
//! scheduler works with.
//!
//! # Domain Mappings
//!
//! | u-cinema | Generic scheduling |
//! |----------|--------------------|
//! | Screen | Resource (capacity 1 showing at a time) |
//! | Film | Task template with a fixed duration |
//! | Showing | Assignment (film × screen × window) |
//! | Cleaning buffer | Post-activity setup time |

mod clock;
mod film;
mod screen;

pub use clock::{ClockTime, ShowingWindow, AN_HOUR, MIDNIGHT_HOURS};
pub use film::{Film, Rating};
pub use screen::{Screen, Showing};
