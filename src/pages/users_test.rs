use super::*;
use crate::net::source::test_helpers::dummy_user;
use crate::net::types::Role;

#[test]
fn users_placeholders() {
    assert_eq!(users_body(&LoadState::Loading), ListBody::Placeholder("Loading users..."));
    assert_eq!(users_body(&LoadState::Loaded(Vec::new())), ListBody::Placeholder("No users found"));
    assert_eq!(
        users_body(&LoadState::Failed("offline".to_owned())),
        ListBody::Placeholder("Error loading users")
    );
}

#[test]
fn loaded_users_keep_source_order() {
    let users = vec![dummy_user(2, Role::Member, true), dummy_user(1, Role::Admin, false)];
    let ListBody::Items(rows) = users_body(&LoadState::Loaded(users)) else {
        panic!("expected rows");
    };
    let ids: Vec<i64> = rows.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![2, 1]);
}
