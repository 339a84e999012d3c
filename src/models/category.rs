//! Sport catalogue and tournament categories.

use serde::{Deserialize, Serialize};

/// Identifier for a category inside a tournament.
pub type CategoryId = u32;

/// Sports a tournament can be organized for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    BeachTennis,
    TableTennis,
    Tennis,
    Pickleball,
    Squash,
    Badminton,
    Padel,
}

impl Sport {
    pub const ALL: [Sport; 7] = [
        Sport::BeachTennis,
        Sport::TableTennis,
        Sport::Tennis,
        Sport::Pickleball,
        Sport::Squash,
        Sport::Badminton,
        Sport::Padel,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Sport::BeachTennis => "Beach Tennis",
            Sport::TableTennis => "Table Tennis",
            Sport::Tennis => "Tennis",
            Sport::Pickleball => "Pickleball",
            Sport::Squash => "Squash",
            Sport::Badminton => "Badminton",
            Sport::Padel => "Padel",
        }
    }
}

/// A division of a tournament (e.g. "Men's Singles A"). Groups are formed per category.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}
