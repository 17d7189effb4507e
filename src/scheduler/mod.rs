//! Showing scheduler and listings.
//!
//! # Algorithm
//!
//! `Cinema` places showings one at a time. Each request is validated,
//! its end time computed (run length plus cleaning buffer), and its window
//! checked against every showing already on the screen. The first conflict
//! rejects the request; nothing is reordered or moved.
//!
//! # Listings
//!
//! `ShowingReport` groups display lines by film in traversal order.

mod cinema;
mod report;

pub use cinema::Cinema;
pub use report::ShowingReport;
