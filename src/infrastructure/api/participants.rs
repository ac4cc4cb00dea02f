//! Participant gateway: list guests and confirm attendance

use crate::domain::Participant;
use crate::error::Result;
use crate::infrastructure::api::ApiClient;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct ParticipantsEnvelope {
    participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize)]
struct ParticipantDto {
    id: String,
    name: Option<String>,
    email: String,
    is_confirmed: bool,
}

/// Thin CRUD client for trip participants
#[derive(Debug, Clone)]
pub struct ParticipantsGateway {
    api: ApiClient,
}

impl ParticipantsGateway {
    pub fn new(api: ApiClient) -> Self {
        ParticipantsGateway { api }
    }

    pub fn list(&self, trip_id: &str) -> Result<Vec<Participant>> {
        let envelope: ParticipantsEnvelope =
            self.api.get(&format!("/trips/{}/participants", trip_id))?;

        Ok(envelope
            .participants
            .into_iter()
            .map(|dto| Participant {
                id: dto.id,
                name: dto.name.filter(|name| !name.is_empty()),
                email: dto.email,
                is_confirmed: dto.is_confirmed,
            })
            .collect())
    }

    /// Confirm a guest's attendance with their name and email
    pub fn confirm(&self, participant_id: &str, name: &str, email: &str) -> Result<()> {
        let body = json!({
            "name": name,
            "email": email,
        });

        self.api
            .patch(&format!("/participants/{}/confirm", participant_id), &body)
    }
}
