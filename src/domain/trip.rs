//! Trip, link and participant models

use crate::domain::date_range::DateSelection;
use chrono::{Datelike, NaiveDate};

/// Longest destination shown in the trip header before truncation
const MAX_HEADER_DESTINATION_CHARS: usize = 14;

/// A trip as known to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: String,
    pub destination: String,
    pub starts_at: NaiveDate,
    pub ends_at: NaiveDate,
    pub is_confirmed: bool,
}

impl Trip {
    /// The trip's dates as a completed calendar selection
    pub fn selection(&self) -> DateSelection {
        DateSelection::from_range(self.starts_at, self.ends_at)
    }

    /// Whether `day` falls inside the trip's dates (inclusive)
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.starts_at && day <= self.ends_at
    }

    /// One-line header: truncated destination plus the date span,
    /// e.g. "Paris, 12 to 18 of Mar."
    pub fn header(&self) -> String {
        let destination: String = if self.destination.chars().count() > MAX_HEADER_DESTINATION_CHARS
        {
            let truncated: String = self
                .destination
                .chars()
                .take(MAX_HEADER_DESTINATION_CHARS)
                .collect();
            format!("{}...", truncated)
        } else {
            self.destination.clone()
        };

        format!(
            "{}, {} to {} of {}.",
            destination,
            self.starts_at.day(),
            self.ends_at.day(),
            self.starts_at.format("%b")
        )
    }
}

/// A shared link attached to a trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripLink {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// A trip participant; `name` is empty until the guest confirms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub is_confirmed: bool,
}
