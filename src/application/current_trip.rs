//! Current trip use cases: resolve, load and forget the stored trip

use crate::domain::Trip;
use crate::error::{PlannerError, Result};
use crate::infrastructure::{CurrentTripStore, PlannerRoot, TripsGateway};

/// Service around the locally remembered trip id
pub struct CurrentTripService {
    trips: TripsGateway,
    store: PlannerRoot,
}

impl CurrentTripService {
    /// Create a new current trip service
    pub fn new(trips: TripsGateway, store: PlannerRoot) -> Self {
        CurrentTripService { trips, store }
    }

    /// The stored trip id, or `NoCurrentTrip`
    pub fn current_id(&self) -> Result<String> {
        self.store.get()?.ok_or(PlannerError::NoCurrentTrip)
    }

    /// Fetch the stored trip from the backend
    pub fn load(&self) -> Result<Trip> {
        let trip_id = self.current_id()?;
        self.trips.get_by_id(&trip_id)
    }

    /// Forget the stored trip id; the trip itself is untouched.
    /// Returns whether anything was stored.
    pub fn forget(&self) -> Result<bool> {
        let had_trip = self.store.get()?.is_some();
        self.store.clear()?;
        Ok(had_trip)
    }
}
