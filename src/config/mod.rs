pub mod settings;

pub use settings::{AppConfig, FetchSettings, RenderSettings, ServerSettings};
