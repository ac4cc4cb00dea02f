//! Trip gateway: create, fetch and update trips

use crate::domain::{Trip, TripDraft};
use crate::error::Result;
use crate::infrastructure::api::{parse_wire_date, wire_date, ApiClient};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct TripEnvelope {
    trip: TripDto,
}

#[derive(Debug, Deserialize)]
struct TripDto {
    id: String,
    destination: String,
    starts_at: String,
    ends_at: String,
    is_confirmed: bool,
}

impl TripDto {
    fn into_trip(self) -> Result<Trip> {
        Ok(Trip {
            id: self.id,
            destination: self.destination,
            starts_at: parse_wire_date(&self.starts_at)?,
            ends_at: parse_wire_date(&self.ends_at)?,
            is_confirmed: self.is_confirmed,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TripCreated {
    #[serde(rename = "tripId")]
    trip_id: String,
}

/// Thin CRUD client for `/trips`
#[derive(Debug, Clone)]
pub struct TripsGateway {
    api: ApiClient,
}

impl TripsGateway {
    pub fn new(api: ApiClient) -> Self {
        TripsGateway { api }
    }

    pub fn get_by_id(&self, trip_id: &str) -> Result<Trip> {
        let envelope: TripEnvelope = self.api.get(&format!("/trips/{}", trip_id))?;
        envelope.trip.into_trip()
    }

    /// Create a trip from a finished form draft; returns the new trip id
    pub fn create(&self, draft: &TripDraft, owner_name: &str, owner_email: &str) -> Result<String> {
        let body = json!({
            "destination": draft.destination,
            "starts_at": wire_date(draft.starts_at),
            "ends_at": wire_date(draft.ends_at),
            "emails_to_invite": draft.emails_to_invite,
            "owner_name": owner_name,
            "owner_email": owner_email,
        });

        let created: TripCreated = self.api.post("/trips", &body)?;
        Ok(created.trip_id)
    }

    pub fn update(
        &self,
        trip_id: &str,
        destination: &str,
        starts_at: NaiveDate,
        ends_at: NaiveDate,
    ) -> Result<()> {
        let body = json!({
            "destination": destination,
            "starts_at": wire_date(starts_at),
            "ends_at": wire_date(ends_at),
        });

        self.api.put(&format!("/trips/{}", trip_id), &body)
    }
}
