//! Splitting a category's participants into round-robin groups.
//!
//! Two strategies:
//! - unranked: fewest groups of 3 to 5, filled in input order;
//! - ranked: snake (serpentine) seeding by rating, so top seeds land in different groups.

use crate::models::{GroupError, ParticipantId, RankedParticipant, MAX_GROUP_SIZE, MIN_GROUP_SIZE};
use serde::{Deserialize, Serialize};

/// Which distributor to run when creating groups.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMethod {
    /// Snake seeding by rating.
    #[default]
    Ranked,
    /// Groups of 5 plus groups of 4 or 3, in registration order.
    Unranked,
}

/// Group sizes for `n` participants: some groups of 5 followed by groups of 4, or groups of 3.
///
/// Scans the number of 5-groups from `n / 5` down to 0 and takes the first count whose
/// remainder divides by 4 (checked first) or by 3.
pub fn group_sizes(n: usize) -> Result<Vec<usize>, GroupError> {
    if n < MIN_GROUP_SIZE {
        return Err(GroupError::InsufficientParticipants {
            required: MIN_GROUP_SIZE,
            found: n,
        });
    }
    for fives in (0..=n / MAX_GROUP_SIZE).rev() {
        let remaining = n - fives * MAX_GROUP_SIZE;
        let filler = [4, 3].into_iter().find(|size| remaining % size == 0);
        if let Some(size) = filler {
            let mut sizes = vec![MAX_GROUP_SIZE; fives];
            sizes.extend(std::iter::repeat(size).take(remaining / size));
            return Ok(sizes);
        }
    }
    Err(GroupError::UnpartitionableCount(n))
}

/// Unranked distribution: consecutive runs of the input fill each group in turn.
pub fn distribute_participants(participants: &[ParticipantId]) -> Result<Vec<Vec<ParticipantId>>, GroupError> {
    let sizes = group_sizes(participants.len())?;
    let mut rest = participants;
    let groups = sizes
        .into_iter()
        .map(|size| {
            let (head, tail) = rest.split_at(size);
            rest = tail;
            head.to_vec()
        })
        .collect::<Vec<_>>();
    log::debug!(
        "Distributed {} participants into {} groups (unranked)",
        participants.len(),
        groups.len()
    );
    Ok(groups)
}

/// Number of groups for the seeded distributor.
///
/// Among `g` in `1..=n/3` with at least 3 participants per group on average, picks the one
/// leaving the smallest remainder `n % g`; on equal remainders the larger `g` wins.
/// Falls back to a single group.
pub fn seeded_group_count(n: usize) -> usize {
    let mut best = 1;
    let mut best_remainder = usize::MAX;
    for g in 1..=n / MIN_GROUP_SIZE {
        if n / g < MIN_GROUP_SIZE {
            continue;
        }
        let remainder = n % g;
        if remainder <= best_remainder {
            best = g;
            best_remainder = remainder;
        }
    }
    best
}

/// Ranked distribution with snake seeding.
///
/// `participants` must already be sorted by rating, strongest first. Row `r` of seeds
/// (`index / groups`) goes left to right on even rows and right to left on odd rows.
/// Group sizes are not bounded to 5 here: a count that does not split evenly can produce
/// a single large group.
pub fn distribute_ranked(participants: &[RankedParticipant]) -> Result<Vec<Vec<ParticipantId>>, GroupError> {
    let n = participants.len();
    if n < MIN_GROUP_SIZE {
        return Err(GroupError::InsufficientParticipants {
            required: MIN_GROUP_SIZE,
            found: n,
        });
    }
    let group_count = seeded_group_count(n);
    let mut groups: Vec<Vec<ParticipantId>> = vec![Vec::with_capacity(n / group_count + 1); group_count];
    for (index, participant) in participants.iter().enumerate() {
        groups[snake_slot(index, group_count)].push(participant.id);
    }
    log::debug!("Distributed {} participants into {} seeded groups", n, group_count);
    Ok(groups)
}

/// Target group of the seed at `index` when snaking across `group_count` groups.
fn snake_slot(index: usize, group_count: usize) -> usize {
    let row = index / group_count;
    let column = index % group_count;
    if row % 2 == 0 {
        column
    } else {
        group_count - 1 - column
    }
}
