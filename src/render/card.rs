use askama::Template;
use urlencoding::encode;

use crate::config::RenderSettings;
use crate::domain::PlayerCard;
use crate::render::agent::{normalize_agent_name, ImageSource};
use crate::render::role::RoleIcon;

/// One player card. Every field is escaped by the template.
#[derive(Template, Debug)]
#[template(path = "card.html")]
pub struct CardTemplate<'a> {
    /// Detail page link, or `None` for a plain card
    pub href: Option<String>,
    pub image_src: &'a str,
    pub onerror: String,
    pub agent: &'a str,
    pub name: &'a str,
    pub icon: &'a str,
    pub icon_src: Option<String>,
    pub role: &'a str,
    pub rank: &'a str,
}

/// Detail page URL with every value percent-encoded
pub fn detail_link(card: &PlayerCard) -> String {
    format!(
        "/player?name={}&tag={}&agent={}",
        encode(&card.name),
        encode(&card.tag),
        encode(&card.agent)
    )
}

/// Render one player card fragment
pub fn render_card(card: &PlayerCard, settings: &RenderSettings) -> askama::Result<String> {
    let image = ImageSource::new(&settings.asset_base_path, &card.agent, &settings.fallback_agent);
    let icon = RoleIcon::from_role(&card.role);
    let agent = if normalize_agent_name(&card.agent).is_empty() {
        settings.fallback_agent.as_str()
    } else {
        card.agent.as_str()
    };

    CardTemplate {
        href: settings.emit_detail_link.then(|| detail_link(card)),
        image_src: image.src(),
        onerror: fallback_handler(&image),
        agent,
        name: &card.name,
        icon: icon.as_str(),
        icon_src: settings
            .role_icon_base_path
            .as_deref()
            .map(|base| icon.icon_path(base)),
        role: &card.role,
        rank: &card.rank,
    }
    .render()
}

// The handler clears itself before swapping the source
fn fallback_handler(image: &ImageSource) -> String {
    match image.fallback() {
        Some(path) => format!(
            "this.onerror=null;this.src='{}';",
            path.replace('\\', "\\\\").replace('\'', "\\'")
        ),
        None => "this.onerror=null;".to_string(),
    }
}
