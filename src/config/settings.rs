use std::env;
use std::path::PathBuf;

use log::warn;

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub endpoint_path: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            endpoint_path: "/api/team-history",
            user_agent: "RosterCards/1.0",
            timeout_secs: 30,
        }
    }
}

impl FetchSettings {
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint_path)
    }
}

/// Parameters of the card renderer
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub container_id: String,
    pub asset_base_path: String,
    /// Role icon directory, or `None` to render roles as text only
    pub role_icon_base_path: Option<String>,
    pub fallback_agent: String,
    pub unranked_label: String,
    pub emit_detail_link: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            container_id: "roster-grid".to_string(),
            asset_base_path: "/static/assets/agents".to_string(),
            role_icon_base_path: Some("/static/assets/roles".to_string()),
            fallback_agent: "Jett".to_string(),
            unranked_label: "Unranked".to_string(),
            emit_detail_link: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub static_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub fetch: FetchSettings,
    pub render: RenderSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            fetch: FetchSettings::default(),
            render: RenderSettings::default(),
            server: ServerSettings::default(),
        }
    }

    /// Defaults with `ROSTER_*` environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.fetch.base_url = url;
        }
        self
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("ROSTER_API_URL") {
            self.fetch.base_url = url;
        }
        if let Some(dir) = lookup("ROSTER_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("ROSTER_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => self.fetch.timeout_secs = secs,
                Err(_) => warn!("Ignoring invalid ROSTER_TIMEOUT_SECS: {}", raw),
            }
        }
    }
}
