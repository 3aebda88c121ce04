pub mod derivation;

pub use derivation::{calculate_player_stats, finalize_roster, role_fallback_agent};
