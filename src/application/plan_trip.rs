//! Plan trip use case: submit the creation form and adopt the new trip

use crate::domain::TripForm;
use crate::error::Result;
use crate::infrastructure::{CurrentTripStore, PlannerRoot, TripsGateway};

/// Service for creating a trip from a finished form
pub struct PlanTripService {
    trips: TripsGateway,
    store: PlannerRoot,
}

impl PlanTripService {
    /// Create a new plan trip service
    pub fn new(trips: TripsGateway, store: PlannerRoot) -> Self {
        PlanTripService { trips, store }
    }

    /// Submit the form, create the trip remotely and remember its id as
    /// the current trip. Returns the new trip id.
    pub fn execute(&self, form: &TripForm, owner_name: &str, owner_email: &str) -> Result<String> {
        let draft = form.submit()?;

        let trip_id = self.trips.create(&draft, owner_name, owner_email)?;

        self.store.set(&trip_id)?;

        Ok(trip_id)
    }
}
