//! Competition business logic: group distribution, setup, group play, standings.

mod distribution;
mod group_play;
mod setup;
mod standings;

pub use distribution::{
    distribute_participants, distribute_ranked, group_sizes, seeded_group_count, DistributionMethod,
};
pub use group_play::{generate_group_matches, record_match_sets};
pub use setup::{create_groups, import_participants};
pub use standings::{group_statistics, group_winners, rank_group_winners, WINNERS_PER_GROUP};
