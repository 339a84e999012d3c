//! Tournament: categories, registrations, groups and matches.

use crate::models::category::{Category, CategoryId, Sport};
use crate::models::game::{GroupMatch, MatchId};
use crate::models::group::{Group, GroupError, GroupId};
use crate::models::participant::{Participant, ParticipantId};
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// Longest accepted tournament name (after trimming).
pub const MAX_NAME_LEN: usize = 100;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Name is empty or longer than 100 characters.
    InvalidName,
    /// End date is before the start date.
    InvalidDates,
    /// A category with this name already exists (case-insensitive).
    DuplicateCategoryName,
    /// A participant with this name is already registered in the category (case-insensitive).
    DuplicateParticipant { category_id: CategoryId, name: String },
    CategoryNotFound(CategoryId),
    ParticipantNotFound(ParticipantId),
    GroupNotFound(GroupId),
    MatchNotFound(MatchId),
    /// Groups were already created for this category.
    GroupsAlreadyCreated(CategoryId),
    /// Matches were already generated for this group.
    MatchesAlreadyGenerated(GroupId),
    /// The participant is already in a group and can no longer withdraw.
    ParticipantAlreadyGrouped(ParticipantId),
    /// A set ended level on points.
    InvalidSetScore,
    /// A result must contain at least one set.
    NoSets,
    /// A roster row could not be read.
    InvalidImport { line: u64, reason: String },
    /// The distributor or ranker rejected the input.
    Grouping(GroupError),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidName => {
                write!(f, "Name must be between 1 and {} characters", MAX_NAME_LEN)
            }
            TournamentError::InvalidDates => write!(f, "End date must not be before the start date"),
            TournamentError::DuplicateCategoryName => write!(f, "A category with this name already exists"),
            TournamentError::DuplicateParticipant { category_id, name } => {
                write!(f, "{} is already registered in category {}", name, category_id)
            }
            TournamentError::CategoryNotFound(id) => write!(f, "Category {} not found", id),
            TournamentError::ParticipantNotFound(id) => write!(f, "Participant {} not found", id),
            TournamentError::GroupNotFound(id) => write!(f, "Group {} not found", id),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::GroupsAlreadyCreated(id) => {
                write!(f, "Groups were already created for category {}", id)
            }
            TournamentError::MatchesAlreadyGenerated(id) => {
                write!(f, "Matches were already generated for group {}", id)
            }
            TournamentError::ParticipantAlreadyGrouped(id) => {
                write!(f, "Participant {} is already assigned to a group", id)
            }
            TournamentError::InvalidSetScore => write!(f, "A set cannot end with equal points"),
            TournamentError::NoSets => write!(f, "At least one set is required"),
            TournamentError::InvalidImport { line, reason } => {
                write!(f, "Invalid roster row at line {}: {}", line, reason)
            }
            TournamentError::Grouping(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TournamentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TournamentError::Grouping(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GroupError> for TournamentError {
    fn from(e: GroupError) -> Self {
        TournamentError::Grouping(e)
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state.
#[derive(Clone, Debug, Serialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub sport: Sport,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub categories: Vec<Category>,
    /// Registrations across all categories.
    pub participants: Vec<Participant>,
    pub groups: Vec<Group>,
    /// Round-robin matches of every group.
    pub matches: Vec<GroupMatch>,
    #[serde(skip)]
    next_category_id: CategoryId,
    #[serde(skip)]
    next_participant_id: ParticipantId,
    #[serde(skip)]
    next_group_id: GroupId,
}

impl Tournament {
    /// Create an empty tournament. The name is trimmed; `end_date` may equal `start_date`.
    pub fn new(
        name: impl Into<String>,
        sport: Sport,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, TournamentError> {
        let name = validated_name(name.into())?;
        validate_dates(start_date, end_date)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            sport,
            start_date,
            end_date,
            categories: Vec::new(),
            participants: Vec::new(),
            groups: Vec::new(),
            matches: Vec::new(),
            next_category_id: 1,
            next_participant_id: 1,
            next_group_id: 1,
        })
    }

    /// Replace name, sport and dates with the same validation as [`Tournament::new`].
    /// Nothing changes when validation fails.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        sport: Sport,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<(), TournamentError> {
        let name = validated_name(name.into())?;
        validate_dates(start_date, end_date)?;
        self.name = name;
        self.sport = sport;
        self.start_date = start_date;
        self.end_date = end_date;
        Ok(())
    }

    /// Add a category; names are unique (case-insensitive). Returns the new id.
    pub fn add_category(&mut self, name: impl Into<String>) -> Result<CategoryId, TournamentError> {
        let name = validated_name(name.into())?;
        if self.category_by_name(&name).is_some() {
            return Err(TournamentError::DuplicateCategoryName);
        }
        let id = self.next_category_id;
        self.next_category_id = id + 1;
        self.categories.push(Category { id, name });
        Ok(id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        let name = name.trim();
        self.categories.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Register a participant in a category. Names are unique per category (case-insensitive).
    /// Returns the new participant id.
    pub fn register_participant(
        &mut self,
        category_id: CategoryId,
        name: impl Into<String>,
        rating: i32,
    ) -> Result<ParticipantId, TournamentError> {
        if self.category(category_id).is_none() {
            return Err(TournamentError::CategoryNotFound(category_id));
        }
        let name = validated_name(name.into())?;
        let is_duplicate = self
            .participants_in(category_id)
            .any(|p| p.name.eq_ignore_ascii_case(&name));
        if is_duplicate {
            return Err(TournamentError::DuplicateParticipant { category_id, name });
        }
        let id = self.next_participant_id;
        self.next_participant_id = id + 1;
        self.participants.push(Participant::new(id, name, category_id, rating));
        Ok(id)
    }

    /// Withdraw a registration. Not allowed once the participant has been placed in a group.
    pub fn withdraw_participant(&mut self, participant_id: ParticipantId) -> Result<(), TournamentError> {
        let idx = self
            .participants
            .iter()
            .position(|p| p.id == participant_id)
            .ok_or(TournamentError::ParticipantNotFound(participant_id))?;
        if self.group_of(participant_id).is_some() {
            return Err(TournamentError::ParticipantAlreadyGrouped(participant_id));
        }
        self.participants.remove(idx);
        Ok(())
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Registrations of one category, in registration order.
    pub fn participants_in(&self, category_id: CategoryId) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(move |p| p.category_id == category_id)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// The group a participant was placed in, if any.
    pub fn group_of(&self, participant_id: ParticipantId) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(participant_id))
    }

    pub fn has_groups_for(&self, category_id: CategoryId) -> bool {
        self.groups.iter().any(|g| g.category_id == category_id)
    }

    /// Matches belonging to one group.
    pub fn matches_in(&self, group_id: GroupId) -> impl Iterator<Item = &GroupMatch> {
        self.matches.iter().filter(move |m| m.group_id == group_id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GroupMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Reserve `count` consecutive group ids.
    pub(crate) fn allocate_group_ids(&mut self, count: usize) -> std::ops::Range<GroupId> {
        let first = self.next_group_id;
        let end = first + count as GroupId;
        self.next_group_id = end;
        first..end
    }
}

fn validated_name(name: String) -> Result<String, TournamentError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_NAME_LEN {
        return Err(TournamentError::InvalidName);
    }
    Ok(trimmed.to_string())
}

fn validate_dates(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), TournamentError> {
    if end_date < start_date {
        return Err(TournamentError::InvalidDates);
    }
    Ok(())
}
