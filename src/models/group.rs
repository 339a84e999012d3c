//! Group of participants and the errors raised while forming groups.

use crate::models::category::CategoryId;
use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// Identifier for a group (unique within a tournament).
pub type GroupId = u32;

/// Smallest group the unranked distributor will emit.
pub const MIN_GROUP_SIZE: usize = 3;
/// Largest group the unranked distributor will emit.
pub const MAX_GROUP_SIZE: usize = 5;

/// A fixed set of participants who play each other once within a category.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub category_id: CategoryId,
    pub name: String,
    /// Members in seeding order.
    pub members: Vec<ParticipantId>,
}

impl Group {
    pub fn new(id: GroupId, category_id: CategoryId, name: impl Into<String>, members: Vec<ParticipantId>) -> Self {
        Self {
            id,
            category_id,
            name: name.into(),
            members,
        }
    }

    pub fn contains(&self, participant_id: ParticipantId) -> bool {
        self.members.contains(&participant_id)
    }
}

/// Errors from the group distributor and the standings ranker.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GroupError {
    /// Too few participants: 3 to distribute into groups, 2 to rank winners.
    InsufficientParticipants { required: usize, found: usize },
    /// No mix of groups of 5 with groups of 4 (or of 3) adds up to this count.
    UnpartitionableCount(usize),
}

impl std::fmt::Display for GroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupError::InsufficientParticipants { required, found } => {
                write!(f, "At least {} participants required (found {})", required, found)
            }
            GroupError::UnpartitionableCount(n) => {
                write!(f, "{} participants cannot be split into groups of 3 to 5", n)
            }
        }
    }
}

impl std::error::Error for GroupError {}
