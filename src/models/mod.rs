//! Data structures for competitions: sports, categories, participants, groups, matches, standings.

mod category;
mod game;
mod group;
mod participant;
mod standings;
mod tournament;

pub use category::{Category, CategoryId, Sport};
pub use game::{GroupMatch, MatchId, SetScore, Side};
pub use group::{Group, GroupError, GroupId, MAX_GROUP_SIZE, MIN_GROUP_SIZE};
pub use participant::{Participant, ParticipantId, RankedParticipant};
pub use standings::{Criterion, GroupStatistics, Winner};
pub use tournament::{Tournament, TournamentError, TournamentId, MAX_NAME_LEN};
