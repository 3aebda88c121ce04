use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::config::settings::AppConfig;
use crate::render::{render_page, HtmlContainer};
use crate::services::roster::{RenderOutcome, RosterService};

/// One-shot render of the roster to a file or stdout
pub struct RenderService {
    config: AppConfig,
    output: Option<PathBuf>,
    fragment_only: bool,
}

impl RenderService {
    pub fn new(config: AppConfig, output: Option<PathBuf>, fragment_only: bool) -> Self {
        Self {
            config,
            output,
            fragment_only,
        }
    }

    pub async fn run(&self) -> Result<RenderOutcome> {
        let service = RosterService::new(&self.config.fetch, self.config.render.clone())?;
        let mut container = HtmlContainer::new(self.config.render.container_id.clone());

        let outcome = service.load_into(&mut container).await;
        let html = self
            .build_document(&container, outcome)
            .context("Failed to render roster page")?;
        self.write(&html)?;

        Ok(outcome)
    }

    fn build_document(
        &self,
        container: &HtmlContainer,
        outcome: RenderOutcome,
    ) -> askama::Result<String> {
        if self.fragment_only {
            return container.to_html();
        }
        let last_updated = match outcome {
            RenderOutcome::Rendered { last_updated, .. } => last_updated,
            RenderOutcome::Failed => None,
        };
        render_page(container, last_updated)
    }

    fn write(&self, html: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                fs::write(path, html)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote roster page to {}", path.display());
            }
            None => println!("{}", html),
        }
        Ok(())
    }
}
