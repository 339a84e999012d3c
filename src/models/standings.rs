//! Group statistics and ranked winners.

use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// Aggregate results of one participant across the matches of one group.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStatistics {
    pub participant_id: ParticipantId,
    pub name: String,
    pub sets_won: u32,
    pub points_won: u32,
}

impl GroupStatistics {
    pub fn new(participant_id: ParticipantId, name: impl Into<String>, sets_won: u32, points_won: u32) -> Self {
        Self {
            participant_id,
            name: name.into(),
            sets_won,
            points_won,
        }
    }
}

/// The statistic that decided a winner's position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Criterion {
    #[serde(rename = "Total de Sets Ganhos")]
    SetsWon,
    #[serde(rename = "Total de Pontos Conquistados")]
    PointsWon,
}

impl Criterion {
    pub fn label(self) -> &'static str {
        match self {
            Criterion::SetsWon => "Total de Sets Ganhos",
            Criterion::PointsWon => "Total de Pontos Conquistados",
        }
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One ranked entry of a group's result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    /// 1-based.
    pub position: usize,
    pub participant_id: ParticipantId,
    pub name: String,
    pub criterion: Criterion,
    pub sets_won: u32,
    pub points_won: u32,
}
