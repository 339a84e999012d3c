//! Integration tests for tournament setup: registrations, roster import and group creation.

use chrono::NaiveDate;
use competitions_web::{
    create_groups, import_participants, DistributionMethod, GroupError, Sport, Tournament,
    TournamentError,
};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn tournament() -> Tournament {
    Tournament::new("City Cup", Sport::TableTennis, date(10), date(12)).unwrap()
}

/// Tournament with one category holding `ratings.len()` participants, registered in that order.
fn tournament_with_ratings(ratings: &[i32]) -> (Tournament, u32) {
    let mut t = tournament();
    let category = t.add_category("Open").unwrap();
    for (i, &r) in ratings.iter().enumerate() {
        t.register_participant(category, format!("P{i}"), r).unwrap();
    }
    (t, category)
}

#[test]
fn new_tournament_validates_name_and_dates() {
    assert!(matches!(
        Tournament::new("   ", Sport::Tennis, date(1), date(2)),
        Err(TournamentError::InvalidName)
    ));
    assert!(matches!(
        Tournament::new("x".repeat(101), Sport::Tennis, date(1), date(2)),
        Err(TournamentError::InvalidName)
    ));
    assert!(matches!(
        Tournament::new("Late", Sport::Tennis, date(5), date(4)),
        Err(TournamentError::InvalidDates)
    ));
    let t = Tournament::new("  Same Day  ", Sport::Padel, date(4), date(4)).unwrap();
    assert_eq!(t.name, "Same Day");
}

#[test]
fn category_names_are_unique_ignoring_case() {
    let mut t = tournament();
    t.add_category("Women A").unwrap();
    assert_eq!(t.add_category("women a"), Err(TournamentError::DuplicateCategoryName));
}

#[test]
fn register_requires_existing_category() {
    let mut t = tournament();
    assert_eq!(
        t.register_participant(9, "Ana", 10),
        Err(TournamentError::CategoryNotFound(9))
    );
}

#[test]
fn update_replaces_details_after_validation() {
    let mut t = tournament();
    t.update("  City Cup Finals ", Sport::Padel, date(11), date(14)).unwrap();
    assert_eq!(t.name, "City Cup Finals");
    assert_eq!(t.sport, Sport::Padel);
    assert_eq!((t.start_date, t.end_date), (date(11), date(14)));

    assert_eq!(
        t.update("Renamed", Sport::Tennis, date(20), date(19)),
        Err(TournamentError::InvalidDates)
    );
    assert_eq!(t.update("", Sport::Tennis, date(20), date(21)), Err(TournamentError::InvalidName));
    assert_eq!(t.name, "City Cup Finals");
    assert_eq!(t.sport, Sport::Padel);
    assert_eq!((t.start_date, t.end_date), (date(11), date(14)));
}

#[test]
fn participant_names_are_unique_per_category_ignoring_case() {
    let mut t = tournament();
    let open = t.add_category("Open").unwrap();
    let juniors = t.add_category("Juniors").unwrap();
    assert_eq!(t.register_participant(open, "Ana", 10), Ok(1));
    assert!(matches!(
        t.register_participant(open, "ana", 10),
        Err(TournamentError::DuplicateParticipant { .. })
    ));
    assert!(matches!(
        t.register_participant(open, " Ana ", 12),
        Err(TournamentError::DuplicateParticipant { .. })
    ));
    // Another category may hold the same name.
    assert_eq!(t.register_participant(juniors, "Ana", 10), Ok(2));
    assert_eq!(t.participants_in(open).count(), 1);
}

#[test]
fn ranked_groups_sort_by_rating_before_seeding() {
    // Registered weakest first; seeding must still start from the strongest.
    let (mut t, category) = tournament_with_ratings(&[5, 6, 7, 8, 9, 10]);
    let groups = create_groups(&mut t, category, DistributionMethod::Ranked).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].members, vec![6, 3, 2]);
    assert_eq!(groups[1].members, vec![5, 4, 1]);
    assert_eq!(groups[0].name, "Group 1");
    assert_eq!(groups[1].name, "Group 2");
    assert_eq!(t.groups, groups);
}

#[test]
fn unranked_groups_follow_registration_order() {
    let (mut t, category) = tournament_with_ratings(&[1, 9, 2, 8, 3, 7, 4, 6, 5]);
    let groups = create_groups(&mut t, category, DistributionMethod::Unranked).unwrap();
    let members: Vec<Vec<i64>> = groups.into_iter().map(|g| g.members).collect();
    assert_eq!(members, vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9]]);
}

#[test]
fn groups_only_include_the_requested_category() {
    let (mut t, open) = tournament_with_ratings(&[10, 20, 30]);
    let juniors = t.add_category("Juniors").unwrap();
    t.register_participant(juniors, "Kid", 99).unwrap();
    let groups = create_groups(&mut t, open, DistributionMethod::Ranked).unwrap();
    assert_eq!(groups.len(), 1);
    assert!(!groups[0].contains(4));
    assert!(t.group_of(4).is_none());
}

#[test]
fn failed_creation_leaves_tournament_untouched() {
    let (mut t, category) = tournament_with_ratings(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(
        create_groups(&mut t, category, DistributionMethod::Unranked),
        Err(TournamentError::Grouping(GroupError::UnpartitionableCount(7)))
    );
    assert!(t.groups.is_empty());

    let (mut t, category) = tournament_with_ratings(&[1, 2]);
    assert_eq!(
        create_groups(&mut t, category, DistributionMethod::Ranked),
        Err(TournamentError::Grouping(GroupError::InsufficientParticipants {
            required: 3,
            found: 2
        }))
    );
    assert!(t.groups.is_empty());
}

#[test]
fn groups_are_created_once_per_category() {
    let (mut t, category) = tournament_with_ratings(&[1, 2, 3]);
    create_groups(&mut t, category, DistributionMethod::Ranked).unwrap();
    assert_eq!(
        create_groups(&mut t, category, DistributionMethod::Ranked),
        Err(TournamentError::GroupsAlreadyCreated(category))
    );
    assert_eq!(
        create_groups(&mut t, 42, DistributionMethod::Ranked),
        Err(TournamentError::CategoryNotFound(42))
    );
}

#[test]
fn grouped_participants_cannot_withdraw() {
    let (mut t, category) = tournament_with_ratings(&[1, 2, 3, 4]);
    t.register_participant(category, "Late", 0).unwrap();
    t.withdraw_participant(5).unwrap();
    create_groups(&mut t, category, DistributionMethod::Ranked).unwrap();
    assert_eq!(
        t.withdraw_participant(1),
        Err(TournamentError::ParticipantAlreadyGrouped(1))
    );
    assert_eq!(
        t.withdraw_participant(5),
        Err(TournamentError::ParticipantNotFound(5))
    );
}

#[test]
fn import_registers_roster_and_creates_categories() {
    let mut t = tournament();
    let roster = "name,category,rating\n\
                  Ana, Open ,1500\n\
                  Bruno,Open,\n\
                  Carla,Juniors,900\n";
    assert_eq!(import_participants(&mut t, roster.as_bytes()).unwrap(), 3);
    assert_eq!(t.categories.len(), 2);
    let open = t.category_by_name("open").unwrap().id;
    assert_eq!(t.participants_in(open).count(), 2);
    let bruno = t.participants.iter().find(|p| p.name == "Bruno").unwrap();
    assert_eq!(bruno.rating, 0);
}

#[test]
fn import_is_all_or_nothing() {
    let mut t = tournament();
    let roster = "name,category,rating\nAna,Open,10\nBruno,Open,strong\n";
    let err = import_participants(&mut t, roster.as_bytes()).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidImport { line: 3, .. }));
    assert!(t.participants.is_empty());
    assert!(t.categories.is_empty());
}

#[test]
fn import_rejects_repeated_names_and_applies_nothing() {
    let mut t = tournament();
    let roster = "name,category,rating\nAna,Open,10\nBruno,Open,8\nANA,open,7\n";
    let err = import_participants(&mut t, roster.as_bytes()).unwrap_err();
    assert!(matches!(err, TournamentError::DuplicateParticipant { ref name, .. } if name == "ANA"));
    assert!(t.participants.is_empty());
    assert!(t.categories.is_empty());
}

#[test]
fn import_rejects_names_already_registered() {
    let mut t = tournament();
    let open = t.add_category("Open").unwrap();
    t.register_participant(open, "Carla", 5).unwrap();
    let roster = "name,category,rating\nDiego,Open,3\ncarla,Open,4\n";
    assert!(matches!(
        import_participants(&mut t, roster.as_bytes()),
        Err(TournamentError::DuplicateParticipant { .. })
    ));
    assert_eq!(t.participants.len(), 1);
}
