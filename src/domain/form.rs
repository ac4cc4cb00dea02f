//! Trip creation form wizard
//!
//! Two-step form: destination and dates first, then guest emails. The state
//! lives in an explicit value owned by the caller; every mutation goes
//! through a method that keeps the gating rules in one place.

use crate::domain::date_range::DateSelection;
use crate::domain::validate;
use crate::error::{PlannerError, Result};
use chrono::NaiveDate;

const MIN_DESTINATION_CHARS: usize = 4;

/// Steps of the trip creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStep {
    /// Destination and date range
    #[default]
    TripDetails,
    /// Guest email list
    GuestEmails,
}

/// A finished form, ready for the create-trip request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDraft {
    pub destination: String,
    pub starts_at: NaiveDate,
    pub ends_at: NaiveDate,
    pub emails_to_invite: Vec<String>,
}

/// State of the multi-step trip form
#[derive(Debug, Clone, Default)]
pub struct TripForm {
    step: FormStep,
    destination: String,
    selection: DateSelection,
    guest_emails: Vec<String>,
}

impl TripForm {
    pub fn new() -> Self {
        TripForm::default()
    }

    /// Start from an existing trip's details, as the edit flow does
    pub fn seeded(destination: &str, selection: DateSelection) -> Self {
        TripForm {
            step: FormStep::TripDetails,
            destination: destination.to_string(),
            selection,
            guest_emails: Vec::new(),
        }
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn selection(&self) -> DateSelection {
        self.selection
    }

    pub fn guest_emails(&self) -> &[String] {
        &self.guest_emails
    }

    pub fn set_destination(&mut self, destination: &str) {
        self.destination = destination.to_string();
    }

    /// Apply one calendar tap to the date selection
    pub fn select_day(&mut self, day: NaiveDate) {
        self.selection = self.selection.select_day(day);
    }

    /// Move from the details step to the guest step, enforcing the gating
    /// rules: destination filled in (at least 4 characters) and a complete
    /// date range.
    pub fn advance(&mut self) -> Result<()> {
        self.check_details()?;
        self.step = FormStep::GuestEmails;
        Ok(())
    }

    /// Return to the details step to change destination or dates
    pub fn back(&mut self) {
        self.step = FormStep::TripDetails;
    }

    /// Add a guest email: trimmed, lowercased, shape-checked, deduplicated
    pub fn add_guest(&mut self, email: &str) -> Result<()> {
        let email = email.trim().to_lowercase();

        if !validate::is_valid_email(&email) {
            return Err(PlannerError::Validation(format!(
                "Invalid guest email: '{}'",
                email
            )));
        }

        if self.guest_emails.iter().any(|known| *known == email) {
            return Err(PlannerError::Validation(format!(
                "Guest already invited: '{}'",
                email
            )));
        }

        self.guest_emails.push(email);
        Ok(())
    }

    /// Remove a guest email (exact match after normalization)
    pub fn remove_guest(&mut self, email: &str) {
        let email = email.trim().to_lowercase();
        self.guest_emails.retain(|known| *known != email);
    }

    /// Re-check everything and produce the draft for the create request
    pub fn submit(&self) -> Result<TripDraft> {
        let (starts_at, ends_at) = self.check_details()?;

        Ok(TripDraft {
            destination: self.destination.trim().to_string(),
            starts_at,
            ends_at,
            emails_to_invite: self.guest_emails.clone(),
        })
    }

    fn check_details(&self) -> Result<(NaiveDate, NaiveDate)> {
        let destination = self.destination.trim();

        let (Some(starts_at), Some(ends_at)) = (self.selection.starts_at(), self.selection.ends_at())
        else {
            return Err(PlannerError::Validation(
                "Fill in the destination and both trip dates to continue".to_string(),
            ));
        };

        if destination.is_empty() {
            return Err(PlannerError::Validation(
                "Fill in the destination and both trip dates to continue".to_string(),
            ));
        }

        if destination.chars().count() < MIN_DESTINATION_CHARS {
            return Err(PlannerError::Validation(format!(
                "The destination must be at least {} characters",
                MIN_DESTINATION_CHARS
            )));
        }

        Ok((starts_at, ends_at))
    }
}
