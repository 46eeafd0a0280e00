// tests/health_group_tests.rs
use health_groups::config::Config;
use health_groups::group::{HealthGroup, Members, ShowDetails};
use health_groups::registry::HealthGroups;
use health_groups::security::SecurityContext;
use health_groups::status::{
    SimpleHttpCodeStatusMapper, SimpleStatusAggregator, Status,
};
use proptest::prelude::*;
use std::sync::Arc;

fn group(show_details: ShowDetails, roles: Option<Vec<String>>) -> HealthGroup {
    HealthGroup::new(
        Members::from_fn(|name| name == "db"),
        Arc::new(SimpleStatusAggregator::default()),
        Arc::new(SimpleHttpCodeStatusMapper::default()),
        show_details,
        roles,
    )
}

#[test]
fn authorized_disclosure_scenario() {
    let group = group(ShowDetails::WhenAuthorized, Some(vec!["ADMIN".into()]));

    assert!(group.is_member("db"));
    assert!(!group.is_member("cache"));

    assert!(!group.include_details(&SecurityContext::anonymous()));
    assert!(!group.include_details(&SecurityContext::with_roles("alice", ["USER"])));
    assert!(group.include_details(&SecurityContext::with_roles("alice", ["ADMIN"])));
}

#[test]
fn config_to_evaluation_end_to_end() {
    let yaml = r#"
show_details: when-authorized
roles: [ADMIN]
groups:
  readiness:
    include: [db, cache]
    exclude: [cache]
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    config.validate().unwrap();
    let groups = HealthGroups::from_config(&config);

    let readiness = groups.get("readiness").unwrap();
    assert!(readiness.is_member("db"));
    assert!(!readiness.is_member("cache"));

    // The caller's sequence: collect member statuses, aggregate, map.
    let statuses = [("db", Status::Down), ("cache", Status::Up)];
    let member_statuses: Vec<Status> = statuses
        .iter()
        .filter(|(name, _)| readiness.is_member(name))
        .map(|(_, status)| *status)
        .collect();
    let overall = readiness.status_aggregator().aggregate(&member_statuses);
    assert_eq!(overall, Status::Down);
    assert_eq!(readiness.http_code_mapper().status_code(overall), 503);

    // Primary sees both checks; DOWN still wins.
    let all_statuses: Vec<Status> = statuses.iter().map(|(_, s)| *s).collect();
    let primary_overall = groups.primary().status_aggregator().aggregate(&all_statuses);
    assert_eq!(primary_overall, Status::Down);

    assert!(!readiness.include_details(&SecurityContext::anonymous()));
    assert!(readiness.include_details(&SecurityContext::with_roles("alice", ["ADMIN"])));
}

fn arbitrary_context() -> impl Strategy<Value = SecurityContext> {
    (
        proptest::option::of("[a-z]{1,8}"),
        proptest::collection::hash_set("[A-Z]{1,8}", 0..4),
    )
        .prop_map(|(principal, roles)| match principal {
            Some(principal) => SecurityContext::with_roles(principal, roles),
            None => SecurityContext::anonymous(),
        })
}

proptest! {
    #[test]
    fn never_is_false_for_every_context(context in arbitrary_context(), roles in proptest::collection::vec("[A-Z]{1,8}", 0..4)) {
        let group = group(ShowDetails::Never, Some(roles));
        prop_assert!(!group.include_details(&context));
    }

    #[test]
    fn always_is_true_for_every_context(context in arbitrary_context(), roles in proptest::collection::vec("[A-Z]{1,8}", 0..4)) {
        let group = group(ShowDetails::Always, Some(roles));
        prop_assert!(group.include_details(&context));
    }

    #[test]
    fn when_authorized_never_discloses_to_anonymous(roles in proptest::collection::vec("[A-Z]{1,8}", 0..4)) {
        let group = group(ShowDetails::WhenAuthorized, Some(roles));
        prop_assert!(!group.include_details(&SecurityContext::anonymous()));
    }

    #[test]
    fn when_authorized_matches_set_intersection(
        principal in "[a-z]{1,8}",
        group_roles in proptest::collection::hash_set("[A-Z]{1,4}", 0..4),
        caller_roles in proptest::collection::hash_set("[A-Z]{1,4}", 0..4),
    ) {
        let expected = group_roles.is_empty()
            || group_roles.intersection(&caller_roles).next().is_some();
        let group = group(
            ShowDetails::WhenAuthorized,
            Some(group_roles.into_iter().collect()),
        );
        let context = SecurityContext::with_roles(principal, caller_roles);
        prop_assert_eq!(group.include_details(&context), expected);
    }
}
