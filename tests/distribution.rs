//! Integration tests for group distribution: unranked partition and snake seeding.

use competitions_web::{
    distribute_participants, distribute_ranked, GroupError, ParticipantId, RankedParticipant,
    MAX_GROUP_SIZE, MIN_GROUP_SIZE,
};
use std::collections::HashSet;

fn ids(n: usize) -> Vec<ParticipantId> {
    (1..=n as ParticipantId).collect()
}

fn ranked(ratings: &[i32]) -> Vec<RankedParticipant> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, &r)| RankedParticipant::new(i as ParticipantId + 1, r))
        .collect()
}

#[test]
fn unranked_partitions_every_accepted_count_exactly() {
    for n in 3..=60 {
        let input = ids(n);
        let groups = match distribute_participants(&input) {
            Ok(g) => g,
            Err(GroupError::UnpartitionableCount(m)) => {
                assert_eq!(m, n);
                continue;
            }
            Err(e) => panic!("unexpected error for {n}: {e}"),
        };
        assert!(groups
            .iter()
            .all(|g| (MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&g.len())));
        let flat: Vec<ParticipantId> = groups.concat();
        assert_eq!(flat, input, "groups keep input order for {n}");
        let unique: HashSet<_> = flat.iter().collect();
        assert_eq!(unique.len(), n);
    }
}

#[test]
fn nine_is_one_five_and_one_four() {
    let groups = distribute_participants(&ids(9)).unwrap();
    assert_eq!(groups, vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9]]);
}

#[test]
fn seven_is_unpartitionable() {
    assert_eq!(
        distribute_participants(&ids(7)),
        Err(GroupError::UnpartitionableCount(7))
    );
}

#[test]
fn fewer_than_three_is_rejected_by_both_variants() {
    for n in 0..3 {
        let expected = Err(GroupError::InsufficientParticipants { required: 3, found: n });
        assert_eq!(distribute_participants(&ids(n)), expected);
        let ratings: Vec<i32> = (0..n as i32).rev().collect();
        assert_eq!(distribute_ranked(&ranked(&ratings)), expected);
    }
}

#[test]
fn ranked_six_snakes_into_two_groups() {
    let groups = distribute_ranked(&ranked(&[10, 9, 8, 7, 6, 5])).unwrap();
    assert_eq!(groups, vec![vec![1, 4, 5], vec![2, 3, 6]]);
}

#[test]
fn ranked_spreads_top_seeds_across_groups() {
    let groups = distribute_ranked(&ranked(&[12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1])).unwrap();
    assert_eq!(groups.len(), 4);
    // First row of seeds: one top-4 seed per group.
    for (g, seed) in groups.iter().zip(1..) {
        assert_eq!(g[0], seed);
        assert_eq!(g.len(), 3);
    }
    assert_eq!(groups[0], vec![1, 8, 9]);
    assert_eq!(groups[3], vec![4, 5, 12]);
}

#[test]
fn ranked_keeps_every_participant_once() {
    for n in 3..=40 {
        let ratings: Vec<i32> = (0..n as i32).rev().collect();
        let groups = distribute_ranked(&ranked(&ratings)).unwrap();
        let mut flat = groups.concat();
        flat.sort_unstable();
        assert_eq!(flat, ids(n));
        assert!(groups.iter().all(|g| g.len() >= MIN_GROUP_SIZE));
    }
}

#[test]
fn distribution_is_deterministic() {
    let input = ids(23);
    assert_eq!(
        distribute_participants(&input),
        distribute_participants(&input)
    );
    let seeded = ranked(&[50, 40, 40, 30, 20, 20, 10, 5, 1]);
    assert_eq!(distribute_ranked(&seeded), distribute_ranked(&seeded));
}
