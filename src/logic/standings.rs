//! Group standings: statistics from recorded sets and the two group winners.

use std::cmp::Ordering;

use crate::models::{Criterion, GroupError, GroupId, GroupStatistics, Tournament, TournamentError, Winner};

/// Number of participants that advance from each group.
pub const WINNERS_PER_GROUP: usize = 2;

/// Rank a group and return its top two.
///
/// Ordered by sets won, then points scored, both descending; fully equal entries keep their
/// input order. Position 2 is credited to points when it has as many sets as position 1.
pub fn rank_group_winners(statistics: &[GroupStatistics]) -> Result<Vec<Winner>, GroupError> {
    if statistics.len() < WINNERS_PER_GROUP {
        return Err(GroupError::InsufficientParticipants {
            required: WINNERS_PER_GROUP,
            found: statistics.len(),
        });
    }

    let mut ranked: Vec<&GroupStatistics> = statistics.iter().collect();
    ranked.sort_by(|a, b| compare_standing(a, b));

    let winners = ranked
        .iter()
        .take(WINNERS_PER_GROUP)
        .enumerate()
        .map(|(i, stats)| {
            // Only the previous position is inspected, not the whole tied block.
            let criterion = if i > 0 && stats.sets_won == ranked[i - 1].sets_won {
                Criterion::PointsWon
            } else {
                Criterion::SetsWon
            };
            Winner {
                position: i + 1,
                participant_id: stats.participant_id,
                name: stats.name.clone(),
                criterion,
                sets_won: stats.sets_won,
                points_won: stats.points_won,
            }
        })
        .collect();
    Ok(winners)
}

/// Sets won, then points scored, both descending.
fn compare_standing(a: &GroupStatistics, b: &GroupStatistics) -> Ordering {
    b.sets_won
        .cmp(&a.sets_won)
        .then_with(|| b.points_won.cmp(&a.points_won))
}

/// Statistics for every member of a group, ordered by sets won then points scored (both
/// descending); equal entries stay in membership order.
///
/// Members without recorded sets appear with zeros.
pub fn group_statistics(tournament: &Tournament, group_id: GroupId) -> Result<Vec<GroupStatistics>, TournamentError> {
    let group = tournament
        .group(group_id)
        .ok_or(TournamentError::GroupNotFound(group_id))?;

    let mut statistics = group
        .members
        .iter()
        .map(|&pid| -> Result<GroupStatistics, TournamentError> {
            let participant = tournament
                .participant(pid)
                .ok_or(TournamentError::ParticipantNotFound(pid))?;
            let (sets_won, points_won) = tournament
                .matches_in(group_id)
                .map(|m| m.tally_for(pid))
                .fold((0, 0), |(s, p), (ms, mp)| (s + ms, p + mp));
            Ok(GroupStatistics::new(pid, participant.name.clone(), sets_won, points_won))
        })
        .collect::<Result<Vec<_>, _>>()?;
    statistics.sort_by(compare_standing);
    Ok(statistics)
}

/// Statistics of a group followed by its ranking.
pub fn group_winners(tournament: &Tournament, group_id: GroupId) -> Result<Vec<Winner>, TournamentError> {
    let statistics = group_statistics(tournament, group_id)?;
    Ok(rank_group_winners(&statistics)?)
}
