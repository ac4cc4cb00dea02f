//! Trip links use cases

use crate::domain::{validate, TripLink};
use crate::error::{PlannerError, Result};
use crate::infrastructure::LinksGateway;

/// Service for attaching and listing shared trip links
pub struct LinksService {
    links: LinksGateway,
}

impl LinksService {
    /// Create a new links service
    pub fn new(links: LinksGateway) -> Self {
        LinksService { links }
    }

    /// Attach a link to the trip; returns the new link id
    pub fn add(&self, trip_id: &str, title: &str, url: &str) -> Result<String> {
        let title = title.trim();
        let url = url.trim();

        if title.is_empty() {
            return Err(PlannerError::Validation(
                "Fill in the link title".to_string(),
            ));
        }

        if !validate::is_valid_url(url) {
            return Err(PlannerError::Validation(format!(
                "Invalid link URL: '{}'",
                url
            )));
        }

        self.links.create(trip_id, title, url)
    }

    pub fn list(&self, trip_id: &str) -> Result<Vec<TripLink>> {
        self.links.list(trip_id)
    }
}
