use log::{debug, warn};

use crate::config::RenderSettings;
use crate::domain::{DerivedStats, MatchRecord, PlayerCard, PlayerRecord};

/// Occurrence count of one agent, kept in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
struct AgentTally {
    agent: String,
    count: usize,
}

/// Derive the main agent and latest rank of a player from match history.
///
/// The match list is taken in delivery order, which the backend is assumed to
/// keep chronological: the rank of the last matching entry is the current one.
/// Ties between agents resolve to the one seen first.
pub fn calculate_player_stats(player: &PlayerRecord, matches: &[MatchRecord]) -> DerivedStats {
    let mut tallies: Vec<AgentTally> = Vec::new();
    let mut current_rank = None;
    let mut appearances = 0;

    for record in matches {
        let entry = record
            .players
            .all_players
            .iter()
            .find(|p| player.is_identified_by(&p.name, &p.tag));

        if let Some(entry) = entry {
            appearances += 1;
            count_agent(&mut tallies, &entry.character);
            current_rank = entry.currenttier_patched.clone();
        }
    }

    let most_played_agent = match pick_most_played(&tallies) {
        Some(agent) => agent,
        None => {
            debug!("{}#{} has no match history, using role default", player.name, player.tag);
            role_fallback_agent(&player.role).to_string()
        }
    };

    debug!(
        "{}#{}: {} appearances, main {}",
        player.name, player.tag, appearances, most_played_agent
    );

    DerivedStats {
        most_played_agent,
        current_rank,
    }
}

/// Default agent for a player without any recorded matches
pub fn role_fallback_agent(role: &str) -> &'static str {
    let role = role.trim();
    let is = |name: &str| role.eq_ignore_ascii_case(name);

    if is("Duelist") {
        "Jett"
    } else if is("Initiator") {
        "Sova"
    } else if is("Controller") || is("Smoker") {
        "Omen"
    } else if is("Sentinel") {
        "Killjoy"
    } else {
        "Jett"
    }
}

/// Turn the raw roster into render-ready cards, preserving roster order.
///
/// Precomputed non-blank `main_agent`/`rank` values take precedence over
/// derivation, field by field.
pub fn finalize_roster(
    roster: &[PlayerRecord],
    matches: Option<&[MatchRecord]>,
    settings: &RenderSettings,
) -> Vec<PlayerCard> {
    roster
        .iter()
        .map(|player| finalize_player(player, matches, settings))
        .collect()
}

fn finalize_player(
    player: &PlayerRecord,
    matches: Option<&[MatchRecord]>,
    settings: &RenderSettings,
) -> PlayerCard {
    let given_agent = non_blank(&player.main_agent);
    let given_rank = non_blank(&player.rank);

    // Each field is resolved on its own: a backend value only covers its own field
    let derived = match matches {
        Some(matches) if given_agent.is_none() || given_rank.is_none() => {
            Some(calculate_player_stats(player, matches))
        }
        _ => None,
    };

    let agent = given_agent
        .map(str::to_string)
        .or_else(|| {
            derived
                .as_ref()
                .map(|d| d.most_played_agent.trim())
                .filter(|a| !a.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            warn!("{}#{} has no agent data, using role default", player.name, player.tag);
            role_fallback_agent(&player.role).to_string()
        });

    let rank = given_rank
        .map(str::to_string)
        .or_else(|| {
            derived
                .as_ref()
                .and_then(|d| non_blank(&d.current_rank).map(str::to_string))
        })
        .unwrap_or_else(|| settings.unranked_label.clone());

    PlayerCard {
        name: player.name.clone(),
        tag: player.tag.clone(),
        role: player.role.clone(),
        agent,
        rank,
    }
}

fn count_agent(tallies: &mut Vec<AgentTally>, agent: &str) {
    let agent = agent.trim();
    if agent.is_empty() {
        return;
    }
    match tallies.iter_mut().find(|t| t.agent == agent) {
        Some(tally) => tally.count += 1,
        None => tallies.push(AgentTally {
            agent: agent.to_string(),
            count: 1,
        }),
    }
}

fn pick_most_played(tallies: &[AgentTally]) -> Option<String> {
    let mut best: Option<&AgentTally> = None;
    for tally in tallies {
        // Strict comparison keeps the first-seen agent on ties
        if best.is_none_or(|b| tally.count > b.count) {
            best = Some(tally);
        }
    }
    best.map(|t| t.agent.clone())
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
