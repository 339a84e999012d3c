//! Round-robin match inside a group and its set scores.

use crate::models::group::GroupId;
use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which side of a match won a set.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

/// Points scored by each side in one set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetScore {
    pub points_1: u32,
    pub points_2: u32,
}

impl SetScore {
    pub fn new(points_1: u32, points_2: u32) -> Self {
        Self { points_1, points_2 }
    }

    /// None for a tied set, which is never a valid result.
    pub fn winner(&self) -> Option<Side> {
        match self.points_1.cmp(&self.points_2) {
            std::cmp::Ordering::Greater => Some(Side::One),
            std::cmp::Ordering::Less => Some(Side::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// A single group match between two participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupMatch {
    pub id: MatchId,
    pub group_id: GroupId,
    pub participant_1: ParticipantId,
    pub participant_2: ParticipantId,
    /// Empty until a result is recorded.
    pub sets: Vec<SetScore>,
}

impl GroupMatch {
    pub fn new(group_id: GroupId, participant_1: ParticipantId, participant_2: ParticipantId) -> Self {
        Self {
            id: Uuid::new_v4(),
            group_id,
            participant_1,
            participant_2,
            sets: Vec::new(),
        }
    }

    pub fn is_played(&self) -> bool {
        !self.sets.is_empty()
    }

    /// Sets won and points scored by `participant_id` in this match; zeros if they did not play in it.
    pub fn tally_for(&self, participant_id: ParticipantId) -> (u32, u32) {
        let side = if participant_id == self.participant_1 {
            Side::One
        } else if participant_id == self.participant_2 {
            Side::Two
        } else {
            return (0, 0);
        };
        self.sets.iter().fold((0, 0), |(sets, points), set| {
            let scored = match side {
                Side::One => set.points_1,
                Side::Two => set.points_2,
            };
            let won = u32::from(set.winner() == Some(side));
            (sets + won, points + scored)
        })
    }
}
