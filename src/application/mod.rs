//! Application layer - Use cases and orchestration

pub mod current_trip;
pub mod init;
pub mod manage_activities;
pub mod manage_config;
pub mod manage_guests;
pub mod manage_links;
pub mod plan_trip;
pub mod update_trip;

pub use current_trip::CurrentTripService;
pub use manage_activities::ActivitiesService;
pub use manage_config::ConfigService;
pub use manage_guests::GuestsService;
pub use manage_links::LinksService;
pub use plan_trip::PlanTripService;
pub use update_trip::UpdateTripService;
