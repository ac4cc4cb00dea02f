//! Link gateway: attach and list shared trip links

use crate::domain::TripLink;
use crate::error::Result;
use crate::infrastructure::api::ApiClient;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct LinksEnvelope {
    links: Vec<LinkDto>,
}

#[derive(Debug, Deserialize)]
struct LinkDto {
    id: String,
    title: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct LinkCreated {
    #[serde(rename = "linkId")]
    link_id: String,
}

/// Thin CRUD client for `/trips/{id}/links`
#[derive(Debug, Clone)]
pub struct LinksGateway {
    api: ApiClient,
}

impl LinksGateway {
    pub fn new(api: ApiClient) -> Self {
        LinksGateway { api }
    }

    pub fn list(&self, trip_id: &str) -> Result<Vec<TripLink>> {
        let envelope: LinksEnvelope = self.api.get(&format!("/trips/{}/links", trip_id))?;

        Ok(envelope
            .links
            .into_iter()
            .map(|dto| TripLink {
                id: dto.id,
                title: dto.title,
                url: dto.url,
            })
            .collect())
    }

    /// Attach a link; returns the new link id
    pub fn create(&self, trip_id: &str, title: &str, url: &str) -> Result<String> {
        let body = json!({
            "title": title,
            "url": url,
        });

        let created: LinkCreated = self.api.post(&format!("/trips/{}/links", trip_id), &body)?;
        Ok(created.link_id)
    }
}
