//! Activity gateway: schedule and list trip activities

use crate::domain::Activity;
use crate::error::Result;
use crate::infrastructure::api::{parse_wire_date, parse_wire_datetime, wire_datetime, ApiClient};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ActivitiesEnvelope {
    activities: Vec<DayGroupDto>,
}

/// The backend returns one group per trip day, including empty days
#[derive(Debug, Deserialize)]
struct DayGroupDto {
    date: String,
    activities: Vec<ActivityDto>,
}

#[derive(Debug, Deserialize)]
struct ActivityDto {
    id: String,
    title: String,
    occurs_at: String,
}

#[derive(Debug, Deserialize)]
struct ActivityCreated {
    #[serde(rename = "activityId")]
    activity_id: String,
}

/// Thin CRUD client for `/trips/{id}/activities`
#[derive(Debug, Clone)]
pub struct ActivitiesGateway {
    api: ApiClient,
}

impl ActivitiesGateway {
    pub fn new(api: ApiClient) -> Self {
        ActivitiesGateway { api }
    }

    /// Activities grouped by trip day, in the backend's day order
    pub fn list(&self, trip_id: &str) -> Result<Vec<(NaiveDate, Vec<Activity>)>> {
        let envelope: ActivitiesEnvelope =
            self.api.get(&format!("/trips/{}/activities", trip_id))?;

        envelope
            .activities
            .into_iter()
            .map(|group| {
                let date = parse_wire_date(&group.date)?;
                let activities = group
                    .activities
                    .into_iter()
                    .map(|dto| {
                        Ok(Activity {
                            occurs_at: parse_wire_datetime(&dto.occurs_at)?,
                            id: dto.id,
                            title: dto.title,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok((date, activities))
            })
            .collect()
    }

    /// Schedule an activity; returns the new activity id
    pub fn create(&self, trip_id: &str, title: &str, occurs_at: NaiveDateTime) -> Result<String> {
        let body = json!({
            "title": title,
            "occurs_at": wire_datetime(occurs_at),
        });

        let created: ActivityCreated = self
            .api
            .post(&format!("/trips/{}/activities", trip_id), &body)?;
        Ok(created.activity_id)
    }
}
