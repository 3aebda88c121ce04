use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::config::FetchSettings;

/// Build the HTTP client used for the team endpoint
pub fn build_client(settings: &FetchSettings) -> Result<Client> {
    Client::builder()
        .user_agent(settings.user_agent)
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()
        .context("Failed to build HTTP client")
}
