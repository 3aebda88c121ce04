use serde::{Deserialize, Serialize};

/// One roster entry as delivered by the team endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub tag: String,
    #[serde(default)]
    pub role: String,
    #[serde(alias = "mainAgent", default)]
    pub main_agent: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
}

impl PlayerRecord {
    /// True when a participant entry refers to this player.
    /// Names compare case-insensitively, tags exactly.
    pub fn is_identified_by(&self, name: &str, tag: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase() && self.tag == tag
    }
}

/// Raw match record (legacy payloads only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default)]
    pub players: MatchPlayers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayers {
    #[serde(default)]
    pub all_players: Vec<Participant>,
}

/// A single participant of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub tag: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub currenttier_patched: Option<String>,
}

/// Body of the team endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamPayload {
    pub roster: Vec<PlayerRecord>,
    #[serde(default)]
    pub matches: Option<Vec<MatchRecord>>,
    #[serde(default)]
    pub last_updated: Option<f64>,
}

/// Stats derived from match history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStats {
    pub most_played_agent: String,
    pub current_rank: Option<String>,
}

/// A player ready to be rendered: agent and rank are always populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    pub name: String,
    pub tag: String,
    pub role: String,
    pub agent: String,
    pub rank: String,
}
