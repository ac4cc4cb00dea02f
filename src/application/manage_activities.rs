//! Trip activities use cases

use crate::domain::{activity, DaySection};
use crate::error::{PlannerError, Result};
use crate::infrastructure::{ActivitiesGateway, TripsGateway};
use chrono::{NaiveDate, NaiveDateTime};

/// Service for scheduling and listing trip activities
pub struct ActivitiesService {
    activities: ActivitiesGateway,
    trips: TripsGateway,
}

impl ActivitiesService {
    /// Create a new activities service
    pub fn new(activities: ActivitiesGateway, trips: TripsGateway) -> Self {
        ActivitiesService { activities, trips }
    }

    /// Schedule an activity on `day` at a whole `hour`. The day must fall
    /// inside the trip's dates. Returns the new activity id.
    pub fn add(&self, trip_id: &str, title: &str, day: NaiveDate, hour: u8) -> Result<String> {
        let title = title.trim();

        if title.is_empty() {
            return Err(PlannerError::Validation(
                "Fill in the activity title".to_string(),
            ));
        }

        let occurs_at = day
            .and_hms_opt(u32::from(hour), 0, 0)
            .ok_or_else(|| PlannerError::Validation("The hour must be between 0 and 23".into()))?;

        let trip = self.trips.get_by_id(trip_id)?;

        if !trip.contains(day) {
            return Err(PlannerError::Validation(format!(
                "The activity date must fall within the trip dates ({})",
                trip.selection().label()
            )));
        }

        self.activities.create(trip_id, title, occurs_at)
    }

    /// Activities grouped per trip day, prepared for display
    pub fn list(&self, trip_id: &str, now: NaiveDateTime) -> Result<Vec<DaySection>> {
        let groups = self.activities.list(trip_id)?;
        Ok(activity::day_sections(groups, now))
    }
}
