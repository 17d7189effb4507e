//! Cinema showing scheduler.
//!
//! Keeps a single cinema's catalog of screens and films and places film
//! showings onto screens without time conflicts.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Film`, `Rating`, `Screen`, `Showing`,
//!   `ClockTime`, `ShowingWindow`
//! - **`scheduler`**: The `Cinema` aggregate (registration, placement,
//!   listings) and `ShowingReport`
//! - **`config`**: Capacity limit and cleaning buffer
//! - **`error`**: `CinemaError`, `ConfigError`
//! - **`logging`**: Console subscriber setup for `tracing` events
//!
//! # Time Model
//!
//! Times are "H:MM" strings on a single day. A showing occupies its screen
//! for the film's run length plus a cleaning buffer, and must finish
//! before midnight.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;

pub use config::CinemaConfig;
pub use error::{CinemaError, ConfigError};
pub use scheduler::{Cinema, ShowingReport};
