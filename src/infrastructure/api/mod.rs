//! HTTP client and gateways for the trip-planning backend

pub mod activities;
pub mod links;
pub mod participants;
pub mod trips;

pub use activities::ActivitiesGateway;
pub use links::LinksGateway;
pub use participants::ParticipantsGateway;
pub use trips::TripsGateway;

use crate::error::{PlannerError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking JSON client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.http.get(self.url(path)).send()?;
        Self::decode(response)
    }

    pub fn post<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T> {
        let response = self.http.post(self.url(path)).json(body).send()?;
        Self::decode(response)
    }

    pub fn put(&self, path: &str, body: &Value) -> Result<()> {
        let response = self.http.put(self.url(path)).json(body).send()?;
        Self::check(response)
    }

    pub fn patch(&self, path: &str, body: &Value) -> Result<()> {
        let response = self.http.patch(self.url(path)).json(body).send()?;
        Self::check(response)
    }

    fn decode<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(api_error(status.as_u16(), response));
        }

        Ok(response.json()?)
    }

    fn check(response: reqwest::blocking::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            return Err(api_error(status.as_u16(), response));
        }

        Ok(())
    }
}

fn api_error(status: u16, response: reqwest::blocking::Response) -> PlannerError {
    let body = response.text().unwrap_or_default();

    // Backends commonly wrap errors as {"message": "..."}; fall back to the
    // raw body otherwise.
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| body.trim().to_string());

    PlannerError::Api { status, message }
}

/// Serialize a calendar date for the wire: midnight wall clock, no timezone
pub fn wire_date(date: NaiveDate) -> String {
    format!("{}T00:00:00", date.format("%Y-%m-%d"))
}

/// Serialize a date+time for the wire
pub fn wire_datetime(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Read the calendar-date portion of a wire datetime
pub fn parse_wire_date(value: &str) -> Result<NaiveDate> {
    let head = value
        .get(..10)
        .ok_or_else(|| PlannerError::InvalidDate(value.to_string()))?;

    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidDate(value.to_string()))
}

/// Read the date+time portion of a wire datetime; a bare date reads as
/// midnight
pub fn parse_wire_datetime(value: &str) -> Result<NaiveDateTime> {
    if let Some(head) = value.get(..19) {
        if let Ok(at) = NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S") {
            return Ok(at);
        }
    }

    let date = parse_wire_date(value)?;
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| PlannerError::InvalidDate(value.to_string()))
}
