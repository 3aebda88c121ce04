use anyhow::Result;
use log::info;
use reqwest::Client;

use crate::config::FetchSettings;
use crate::domain::TeamPayload;
use crate::errors::AcquisitionError;
use crate::http::build_client;

/// Client for the team history endpoint
pub struct TeamClient {
    client: Client,
    url: String,
}

impl TeamClient {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let client = build_client(settings)?;
        Ok(Self {
            client,
            url: settings.endpoint_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue the single GET for the team payload. No retry.
    pub async fn fetch_team_data(&self) -> Result<TeamPayload, AcquisitionError> {
        info!("Fetching team data from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AcquisitionError::transport(&self.url, e))?;

        if !response.status().is_success() {
            return Err(AcquisitionError::Status {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AcquisitionError::transport(&self.url, e))?;
        let payload: TeamPayload =
            serde_json::from_slice(&body).map_err(|e| AcquisitionError::decode(&self.url, e))?;

        info!(
            "Received {} roster entries and {} matches",
            payload.roster.len(),
            payload.matches.as_ref().map_or(0, Vec::len)
        );
        Ok(payload)
    }
}
