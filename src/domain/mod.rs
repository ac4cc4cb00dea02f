//! Domain layer - Business logic and domain models

pub mod activity;
pub mod date_range;
pub mod form;
pub mod trip;
pub mod validate;

pub use activity::{Activity, ActivityEntry, DaySection};
pub use date_range::{DateSelection, DayMarking};
pub use form::{FormStep, TripDraft, TripForm};
pub use trip::{Participant, Trip, TripLink};
