//! planner - Trip planning from the terminal
//!
//! A command-line client for a group trip-planning backend: create a trip
//! with a destination, a date range and guest invitations, then manage its
//! activities, links and participants while it is underway.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PlannerError;
