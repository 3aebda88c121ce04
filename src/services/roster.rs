use anyhow::Result;
use log::{error, info};

use crate::api::TeamClient;
use crate::config::{FetchSettings, RenderSettings};
use crate::domain::{PlayerCard, TeamPayload};
use crate::errors::AcquisitionError;
use crate::render::{render_error, render_roster, Container};
use crate::stats::finalize_roster;

/// Outcome of one render cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderOutcome {
    Rendered { cards: usize, last_updated: Option<f64> },
    Failed,
}

/// Acquisition, derivation and render for one page load
pub struct RosterService {
    client: TeamClient,
    render: RenderSettings,
}

impl RosterService {
    pub fn new(fetch: &FetchSettings, render: RenderSettings) -> Result<Self> {
        Ok(Self {
            client: TeamClient::new(fetch)?,
            render,
        })
    }

    /// Fetch the roster and turn it into finalized cards
    pub async fn load_cards(&self) -> Result<(Vec<PlayerCard>, TeamPayload), AcquisitionError> {
        let payload = self.client.fetch_team_data().await?;
        let cards = finalize_roster(&payload.roster, payload.matches.as_deref(), &self.render);
        Ok((cards, payload))
    }

    /// Run the full cycle into `container`. Acquisition and template failures
    /// end up as the error state in the container and are never returned.
    pub async fn load_into<C: Container + ?Sized>(&self, container: &mut C) -> RenderOutcome {
        match self.load_cards().await {
            Ok((cards, payload)) => match render_roster(container, &cards, &self.render) {
                Ok(()) => {
                    info!("Roster from {} rendered", self.client.url());
                    RenderOutcome::Rendered {
                        cards: cards.len(),
                        last_updated: payload.last_updated,
                    }
                }
                Err(e) => {
                    error!("Failed to render roster cards: {}", e);
                    render_error(container);
                    RenderOutcome::Failed
                }
            },
            Err(e) => {
                error!("Error fetching data: {}", e);
                render_error(container);
                RenderOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::team_client::tests::{settings_for, spawn_upstream};
    use crate::render::{HtmlContainer, ERROR_MESSAGE};
    use axum::{Router, routing::get};

    const LEGACY_BODY: &str = r#"{
        "last_updated": 1700000000,
        "roster": [
            {"name": "Ana", "tag": "123", "role": "Duelist"},
            {"name": "Bo", "tag": "NA1", "role": "Smoker"}
        ],
        "matches": [
            {"players": {"all_players": [
                {"name": "ana", "tag": "123", "character": "Jett", "currenttier_patched": "Gold 1"},
                {"name": "Bo", "tag": "NA1", "character": "Viper", "currenttier_patched": "Silver 2"}
            ]}},
            {"players": {"all_players": [
                {"name": "Ana", "tag": "123", "character": "Omen", "currenttier_patched": "Gold 2"}
            ]}},
            {"players": {"all_players": [
                {"name": "ANA", "tag": "123", "character": "Jett", "currenttier_patched": "Gold 3"}
            ]}}
        ]
    }"#;

    async fn service_for(router: Router) -> RosterService {
        let base = spawn_upstream(router).await;
        RosterService::new(&settings_for(base), RenderSettings::default()).unwrap()
    }

    #[tokio::test]
    async fn test_legacy_payload_renders_derived_cards() {
        let service =
            service_for(Router::new().route("/api/team-history", get(|| async { LEGACY_BODY }))).await;
        let mut container = HtmlContainer::new("roster-grid");

        let outcome = service.load_into(&mut container).await;

        assert_eq!(
            outcome,
            RenderOutcome::Rendered {
                cards: 2,
                last_updated: Some(1700000000.0)
            }
        );
        let html = container.contents();
        assert!(html.contains("Main: Jett"));
        assert!(html.contains(r#"<span class="rank">Gold 3</span>"#));
        assert!(html.contains("Main: Viper"));
        assert!(html.find("<h2>Ana</h2>").unwrap() < html.find("<h2>Bo</h2>").unwrap());
    }

    #[tokio::test]
    async fn test_precomputed_payload_skips_derivation() {
        let body = r#"{"roster":[{"name":"Ana","tag":"123","role":"Duelist","main_agent":"Neon","rank":"Radiant"}]}"#;
        let service =
            service_for(Router::new().route("/api/team-history", get(move || async move { body }))).await;

        let (cards, _) = service.load_cards().await.unwrap();

        assert_eq!(cards[0].agent, "Neon");
        assert_eq!(cards[0].rank, "Radiant");
    }

    #[tokio::test]
    async fn test_failure_shows_single_error_message() {
        let service =
            service_for(Router::new().route("/api/team-history", get(|| async { "not json" }))).await;
        let mut container = HtmlContainer::new("roster-grid");

        let outcome = service.load_into(&mut container).await;

        assert_eq!(outcome, RenderOutcome::Failed);
        assert_eq!(container.contents(), ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_malformed_player_fails_whole_render() {
        let body = r#"{"roster":[{"name":"Ana","tag":"123"},{"tag":"NA1"}]}"#;
        let service =
            service_for(Router::new().route("/api/team-history", get(move || async move { body }))).await;
        let mut container = HtmlContainer::new("roster-grid");

        assert_eq!(service.load_into(&mut container).await, RenderOutcome::Failed);
        assert!(!container.contents().contains("<h2>Ana</h2>"));
    }
}
