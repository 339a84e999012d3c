//! Participant (a registration in one category of a tournament) and its ranked view.

use crate::models::category::CategoryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a registered participant (unique within a tournament).
pub type ParticipantId = i64;

/// A competitor registered in one category of a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub category_id: CategoryId,
    /// Skill rating used for seeding; higher is stronger.
    pub rating: i32,
    pub registered_at: DateTime<Utc>,
}

impl Participant {
    /// Create a new participant registered now.
    pub fn new(id: ParticipantId, name: impl Into<String>, category_id: CategoryId, rating: i32) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
            rating,
            registered_at: Utc::now(),
        }
    }

    /// The `(id, rating)` pair consumed by the seeded distributor.
    pub fn ranked(&self) -> RankedParticipant {
        RankedParticipant {
            id: self.id,
            rating: self.rating,
        }
    }
}

/// A participant id with the rating it is seeded by.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankedParticipant {
    pub id: ParticipantId,
    pub rating: i32,
}

impl RankedParticipant {
    pub fn new(id: ParticipantId, rating: i32) -> Self {
        Self { id, rating }
    }
}
