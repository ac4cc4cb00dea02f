//! Update trip use case: edit the current trip's destination and dates

use crate::domain::{Trip, TripForm};
use crate::error::{PlannerError, Result};
use crate::infrastructure::{CurrentTripStore, PlannerRoot, TripsGateway};
use chrono::NaiveDate;

/// Service for editing the stored trip
pub struct UpdateTripService {
    trips: TripsGateway,
    store: PlannerRoot,
}

impl UpdateTripService {
    /// Create a new update trip service
    pub fn new(trips: TripsGateway, store: PlannerRoot) -> Self {
        UpdateTripService { trips, store }
    }

    /// Edit the current trip. The calendar selection is seeded from the
    /// trip's existing range, so the first tap of `taps` discards it and
    /// starts a new range (same rules as the creation calendar). Passing no
    /// taps keeps the dates; passing no destination keeps the destination.
    pub fn execute(&self, destination: Option<&str>, taps: &[NaiveDate]) -> Result<Trip> {
        let trip_id = self.store.get()?.ok_or(PlannerError::NoCurrentTrip)?;
        let trip = self.trips.get_by_id(&trip_id)?;

        let mut form = TripForm::seeded(destination.unwrap_or(&trip.destination), trip.selection());
        for tap in taps {
            form.select_day(*tap);
        }

        let draft = form.submit()?;

        self.trips
            .update(&trip_id, &draft.destination, draft.starts_at, draft.ends_at)?;

        Ok(Trip {
            id: trip_id,
            destination: draft.destination,
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            is_confirmed: trip.is_confirmed,
        })
    }
}
