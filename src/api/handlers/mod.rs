use crate::config::settings::AppConfig;
use crate::services::roster::RosterService;

pub mod roster;

pub struct AppState {
    pub roster: RosterService,
    pub config: AppConfig,
}
