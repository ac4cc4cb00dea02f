//! Guest use cases: list participants and confirm attendance

use crate::domain::{validate, Participant};
use crate::error::{PlannerError, Result};
use crate::infrastructure::{CurrentTripStore, ParticipantsGateway, PlannerRoot};

/// Service for trip participants
pub struct GuestsService {
    participants: ParticipantsGateway,
    store: PlannerRoot,
}

impl GuestsService {
    /// Create a new guests service
    pub fn new(participants: ParticipantsGateway, store: PlannerRoot) -> Self {
        GuestsService {
            participants,
            store,
        }
    }

    pub fn list(&self, trip_id: &str) -> Result<Vec<Participant>> {
        self.participants.list(trip_id)
    }

    /// Confirm attendance for an invited participant, then adopt the trip
    /// as the current one (the invitation flow lands here without a stored
    /// trip id).
    pub fn confirm(&self, trip_id: &str, participant_id: &str, name: &str, email: &str) -> Result<()> {
        let name = name.trim();
        let email = email.trim().to_lowercase();

        if name.is_empty() {
            return Err(PlannerError::Validation(
                "Fill in your full name to confirm the trip".to_string(),
            ));
        }

        if !validate::is_valid_email(&email) {
            return Err(PlannerError::Validation(format!(
                "Invalid confirmation email: '{}'",
                email
            )));
        }

        self.participants.confirm(participant_id, name, &email)?;

        self.store.set(trip_id)?;

        Ok(())
    }
}
