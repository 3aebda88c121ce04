pub mod models;

pub use models::{
    DerivedStats, MatchPlayers, MatchRecord, Participant, PlayerCard, PlayerRecord, TeamPayload,
};
