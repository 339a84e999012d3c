//! Group stage: round-robin match generation and set result recording.

use crate::models::{GroupId, GroupMatch, MatchId, SetScore, Tournament, TournamentError};

/// Generate the round robin of a group: every member meets every other member once.
///
/// Pairings follow membership order (1-2, 1-3, ..., 2-3, ...). A group's matches can only be
/// generated once.
pub fn generate_group_matches(
    tournament: &mut Tournament,
    group_id: GroupId,
) -> Result<Vec<GroupMatch>, TournamentError> {
    let group = tournament
        .group(group_id)
        .ok_or(TournamentError::GroupNotFound(group_id))?;
    if tournament.matches_in(group_id).next().is_some() {
        return Err(TournamentError::MatchesAlreadyGenerated(group_id));
    }

    let members = &group.members;
    let mut matches = Vec::with_capacity(members.len() * members.len().saturating_sub(1) / 2);
    for (i, &a) in members.iter().enumerate() {
        for &b in &members[i + 1..] {
            matches.push(GroupMatch::new(group_id, a, b));
        }
    }

    tournament.matches.extend(matches.iter().cloned());
    log::info!("Generated {} matches for group {}", matches.len(), group_id);
    Ok(matches)
}

/// Record (or overwrite) the sets of a match. Every set must have a winner.
pub fn record_match_sets(
    tournament: &mut Tournament,
    match_id: MatchId,
    sets: Vec<SetScore>,
) -> Result<(), TournamentError> {
    if sets.is_empty() {
        return Err(TournamentError::NoSets);
    }
    if sets.iter().any(|s| s.winner().is_none()) {
        return Err(TournamentError::InvalidSetScore);
    }
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.sets = sets;
    Ok(())
}
