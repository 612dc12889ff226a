//! Team composition rules, checked before anything touches the database.

use std::collections::HashSet;

use crate::{model::team::CreateTeamDto, server::error::team::TeamError};

pub const TEAM_SIZE: usize = 11;

/// Validates a team draft against the composition rules, failing on the
/// first violation: exactly 11 distinct players, captain and vice-captain
/// both selected and different from each other.
pub fn validate_composition(draft: &CreateTeamDto) -> Result<(), TeamError> {
    if draft.players.len() != TEAM_SIZE {
        return Err(TeamError::WrongPlayerCount(draft.players.len()));
    }

    let selected: HashSet<&str> = draft
        .players
        .iter()
        .map(|player| player.player_id.as_str())
        .collect();
    if selected.len() != TEAM_SIZE {
        return Err(TeamError::DuplicatePlayer);
    }

    if !selected.contains(draft.captain_id.as_str()) {
        return Err(TeamError::CaptainNotInTeam);
    }
    if !selected.contains(draft.vice_captain_id.as_str()) {
        return Err(TeamError::ViceCaptainNotInTeam);
    }
    if draft.captain_id == draft.vice_captain_id {
        return Err(TeamError::CaptainIsViceCaptain);
    }

    Ok(())
}
