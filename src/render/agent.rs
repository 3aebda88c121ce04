/// Canonical asset key for an agent name.
///
/// Strips `/` (as in "KAY/O"), then upper-cases the first character and
/// lower-cases the rest. Returns an empty string for empty input.
pub fn normalize_agent_name(agent: &str) -> String {
    let stripped: String = agent.trim().chars().filter(|c| *c != '/').collect();
    let mut chars = stripped.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Path of an agent's artwork under the asset directory
pub fn agent_image_path(asset_base_path: &str, agent: &str) -> String {
    format!(
        "{}/{}_Artwork-large.webp",
        asset_base_path.trim_end_matches('/'),
        normalize_agent_name(agent)
    )
}

/// An `<img>` source with a single-use fallback.
///
/// Mirrors the browser side handler: the first load failure swaps in the
/// fallback image and disarms itself, so a missing fallback cannot loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    current: String,
    fallback: Option<String>,
}

impl ImageSource {
    pub fn new(asset_base_path: &str, agent: &str, fallback_agent: &str) -> Self {
        let agent = if normalize_agent_name(agent).is_empty() {
            fallback_agent
        } else {
            agent
        };

        Self {
            current: agent_image_path(asset_base_path, agent),
            fallback: Some(agent_image_path(asset_base_path, fallback_agent)),
        }
    }

    pub fn src(&self) -> &str {
        &self.current
    }

    /// Fallback path the handler would switch to, if still armed
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }

    /// Handle a load failure, returning the new source on first use only
    pub fn on_load_error(&mut self) -> Option<&str> {
        let fallback = self.fallback.take()?;
        self.current = fallback;
        Some(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_handles_slash_and_case() {
        assert_eq!(normalize_agent_name("KAY/O"), "Kayo");
        assert_eq!(normalize_agent_name("jett"), "Jett");
        assert_eq!(normalize_agent_name("BRIMSTONE"), "Brimstone");
        assert_eq!(normalize_agent_name(""), "");
        assert_eq!(normalize_agent_name("/"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for agent in ["KAY/O", "Astra", "deadlock", "Iso", "vYSE"] {
            let once = normalize_agent_name(agent);
            assert_eq!(normalize_agent_name(&once), once);
        }
    }

    #[test]
    fn test_image_path() {
        assert_eq!(
            agent_image_path("/static/assets/agents/", "KAY/O"),
            "/static/assets/agents/Kayo_Artwork-large.webp"
        );
    }

    #[test]
    fn test_fallback_fires_at_most_once() {
        let mut image = ImageSource::new("/a", "Tejo", "Jett");
        assert_eq!(image.src(), "/a/Tejo_Artwork-large.webp");

        assert_eq!(image.on_load_error(), Some("/a/Jett_Artwork-large.webp"));
        assert_eq!(image.on_load_error(), None);
        assert_eq!(image.on_load_error(), None);
        assert_eq!(image.src(), "/a/Jett_Artwork-large.webp");
        assert_eq!(image.fallback(), None);
    }

    #[test]
    fn test_empty_agent_uses_fallback_source() {
        let image = ImageSource::new("/a", " / ", "Jett");
        assert_eq!(image.src(), "/a/Jett_Artwork-large.webp");
    }
}
