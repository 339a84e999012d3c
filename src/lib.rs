//! Competitions web app: library with models, group formation and standings logic.

pub mod config;
pub mod logic;
pub mod models;

pub use config::Config;
pub use logic::{
    create_groups, distribute_participants, distribute_ranked, generate_group_matches, group_sizes,
    group_statistics, group_winners, import_participants, rank_group_winners, record_match_sets,
    seeded_group_count, DistributionMethod, WINNERS_PER_GROUP,
};
pub use models::{
    Category, CategoryId, Criterion, Group, GroupError, GroupId, GroupMatch, GroupStatistics, MatchId,
    Participant, ParticipantId, RankedParticipant, SetScore, Side, Sport, Tournament, TournamentError,
    TournamentId, Winner, MAX_GROUP_SIZE, MIN_GROUP_SIZE,
};
