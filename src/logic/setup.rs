//! Setup phase: roster import and group creation for a category.

use crate::logic::distribution::{distribute_participants, distribute_ranked, DistributionMethod};
use crate::models::{CategoryId, Group, Participant, ParticipantId, RankedParticipant, Tournament, TournamentError};
use serde::Deserialize;

/// One roster line: `name,category,rating` (rating may be empty or absent).
#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    category: String,
    #[serde(default)]
    rating: Option<i32>,
}

/// Register every participant of a CSV roster. Categories are matched by name and created
/// when missing. Nothing is applied unless every row is valid; a name repeated within a
/// category fails with `DuplicateParticipant`. Returns the number registered.
pub fn import_participants<R: std::io::Read>(
    tournament: &mut Tournament,
    reader: R,
) -> Result<usize, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut staged = tournament.clone();
    let mut imported = 0;
    for (i, result) in rdr.deserialize::<RosterRow>().enumerate() {
        // Header is line 1.
        let fallback_line = i as u64 + 2;
        let row = result.map_err(|e| TournamentError::InvalidImport {
            line: e.position().map(|p| p.line()).unwrap_or(fallback_line),
            reason: e.to_string(),
        })?;
        let invalid = |reason: &str| TournamentError::InvalidImport {
            line: fallback_line,
            reason: reason.to_string(),
        };
        if row.category.is_empty() {
            return Err(invalid("missing category"));
        }
        let existing = staged.category_by_name(&row.category).map(|c| c.id);
        let category_id = match existing {
            Some(id) => id,
            None => staged.add_category(row.category.as_str()).map_err(|e| invalid(&e.to_string()))?,
        };
        staged
            .register_participant(category_id, row.name.as_str(), row.rating.unwrap_or_default())
            .map_err(|e| match e {
                TournamentError::DuplicateParticipant { .. } => e,
                _ => invalid(&e.to_string()),
            })?;
        imported += 1;
    }

    *tournament = staged;
    log::info!("Imported {} participants into tournament {}", imported, tournament.id);
    Ok(imported)
}

/// Create the groups of one category.
///
/// Ranked: participants ordered by rating (strongest first, ties in registration order) and
/// snake-seeded. Unranked: registration order, groups of 5 then 4 or 3.
/// The partition is computed before the tournament is touched, so a failure leaves it unchanged.
pub fn create_groups(
    tournament: &mut Tournament,
    category_id: CategoryId,
    method: DistributionMethod,
) -> Result<Vec<Group>, TournamentError> {
    if tournament.category(category_id).is_none() {
        return Err(TournamentError::CategoryNotFound(category_id));
    }
    if tournament.has_groups_for(category_id) {
        return Err(TournamentError::GroupsAlreadyCreated(category_id));
    }

    let partition = match method {
        DistributionMethod::Ranked => {
            let mut entrants: Vec<RankedParticipant> = tournament
                .participants_in(category_id)
                .map(Participant::ranked)
                .collect();
            entrants.sort_by(|a, b| b.rating.cmp(&a.rating));
            distribute_ranked(&entrants)?
        }
        DistributionMethod::Unranked => {
            let entrants: Vec<ParticipantId> = tournament
                .participants_in(category_id)
                .map(|p| p.id)
                .collect();
            distribute_participants(&entrants)?
        }
    };

    let ids = tournament.allocate_group_ids(partition.len());
    let groups: Vec<Group> = ids
        .zip(partition)
        .enumerate()
        .map(|(i, (id, members))| Group::new(id, category_id, format!("Group {}", i + 1), members))
        .collect();
    tournament.groups.extend(groups.iter().cloned());

    log::info!(
        "Created {} groups for category {} of tournament {} ({:?})",
        groups.len(),
        category_id,
        tournament.id,
        method
    );
    Ok(groups)
}
