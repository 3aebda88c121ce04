use askama::Template;
use log::info;

use crate::config::RenderSettings;
use crate::domain::PlayerCard;
use crate::render::card::render_card;

pub const ERROR_MESSAGE: &str = "<p>Error loading data.</p>";

/// A markup sink whose contents are owned and fully replaced by the renderer
pub trait Container {
    fn replace_contents(&mut self, html: String);
}

#[derive(Template)]
#[template(source = "<div id=\"{{ id }}\">\n{{ contents|safe }}\n</div>", ext = "html")]
struct ContainerTemplate<'a> {
    id: &'a str,
    contents: &'a str,
}

/// In-memory container element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlContainer {
    id: String,
    contents: String,
}

impl HtmlContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            contents: String::new(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Container element with its current contents
    pub fn to_html(&self) -> askama::Result<String> {
        ContainerTemplate {
            id: &self.id,
            contents: &self.contents,
        }
        .render()
    }
}

impl Container for HtmlContainer {
    fn replace_contents(&mut self, html: String) {
        self.contents = html;
    }
}

/// Replace the container contents with one fragment per card, in order.
/// On error the container is left untouched.
pub fn render_roster<C: Container + ?Sized>(
    container: &mut C,
    cards: &[PlayerCard],
    settings: &RenderSettings,
) -> askama::Result<()> {
    let fragments = cards
        .iter()
        .map(|card| render_card(card, settings))
        .collect::<askama::Result<Vec<String>>>()?;
    container.replace_contents(fragments.join("\n"));
    info!("Rendered {} player cards", cards.len());
    Ok(())
}

pub fn render_error<C: Container + ?Sized>(container: &mut C) {
    container.replace_contents(ERROR_MESSAGE.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str) -> PlayerCard {
        PlayerCard {
            name: name.to_string(),
            tag: "1".to_string(),
            role: "Duelist".to_string(),
            agent: "Jett".to_string(),
            rank: "Unranked".to_string(),
        }
    }

    #[test]
    fn test_renders_one_fragment_per_card_in_order() {
        let settings = RenderSettings::default();
        let mut container = HtmlContainer::new("roster-grid");
        let cards = vec![card("Cy"), card("Ana"), card("Bo")];

        render_roster(&mut container, &cards, &settings).unwrap();

        let html = container.contents();
        assert_eq!(html.matches("class=\"card\"").count(), 3);
        let cy = html.find("<h2>Cy</h2>").unwrap();
        let ana = html.find("<h2>Ana</h2>").unwrap();
        let bo = html.find("<h2>Bo</h2>").unwrap();
        assert!(cy < ana && ana < bo);
    }

    #[test]
    fn test_render_replaces_previous_contents() {
        let settings = RenderSettings::default();
        let mut container = HtmlContainer::new("roster-grid");

        render_error(&mut container);
        render_roster(&mut container, &[card("Ana")], &settings).unwrap();
        assert!(!container.contents().contains("Error loading data."));

        render_roster(&mut container, &[], &settings).unwrap();
        assert_eq!(container.contents(), "");
    }

    #[test]
    fn test_error_state_is_single_message() {
        let settings = RenderSettings::default();
        let mut container = HtmlContainer::new("roster-container");
        render_roster(&mut container, &[card("Ana")], &settings).unwrap();

        render_error(&mut container);

        assert_eq!(container.contents(), ERROR_MESSAGE);
        assert_eq!(
            container.to_html().unwrap(),
            "<div id=\"roster-container\">\n<p>Error loading data.</p>\n</div>"
        );
    }

    #[test]
    fn test_container_id_is_escaped() {
        let container = HtmlContainer::new("a\"b");
        assert!(container.to_html().unwrap().starts_with("<div id=\"a&quot;b\">"));
    }
}
