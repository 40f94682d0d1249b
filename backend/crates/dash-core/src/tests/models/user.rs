use crate::{FieldValue, Record, Role, UserFields, UserRecord, UserStatus};

use serde_json::json;

fn text(field: &Option<FieldValue<String>>) -> Option<&str> {
    field.as_ref().and_then(|value| value.as_str())
}

fn seed_user() -> UserRecord {
    serde_json::from_value(json!({
        "id": 3,
        "name": "Carol White",
        "email": "user3@example.com",
        "role": "viewer",
        "status": "active",
        "joined": "2023-05-10",
    }))
    .unwrap()
}

#[test]
fn test_user_record_round_trips_known_fields() {
    let user = seed_user();

    assert_eq!(user.id, 3);
    assert_eq!(text(&user.fields.name), Some("Carol White"));
    assert_eq!(user.fields.role, Some(Role::Viewer.into()));
    assert_eq!(user.fields.status, Some(UserStatus::Active.into()));
    assert!(user.fields.extra.is_empty());
}

#[test]
fn given_partial_patch_when_applied_then_absent_fields_are_preserved() {
    let mut user = seed_user();
    let patch: UserFields = serde_json::from_value(json!({ "status": "inactive" })).unwrap();

    user.apply_patch(patch);

    assert_eq!(user.id, 3);
    assert_eq!(user.fields.status, Some(UserStatus::Inactive.into()));
    assert_eq!(text(&user.fields.name), Some("Carol White"));
    assert_eq!(text(&user.fields.email), Some("user3@example.com"));
    assert_eq!(text(&user.fields.joined), Some("2023-05-10"));
}

#[test]
fn given_patch_with_id_when_applied_then_id_is_unchanged() {
    let mut user = seed_user();
    let patch: UserFields =
        serde_json::from_value(json!({ "id": 99, "name": "Carol Black" })).unwrap();

    user.apply_patch(patch);

    assert_eq!(user.id, 3);
    assert_eq!(text(&user.fields.name), Some("Carol Black"));
    assert!(!user.fields.extra.contains_key("id"));

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["id"], 3);
}

#[test]
fn given_unknown_attributes_when_created_then_they_are_kept() {
    let draft: UserFields = serde_json::from_value(json!({
        "name": "Kim Park",
        "department": "Research",
        "id": 1,
    }))
    .unwrap();

    let user = UserRecord::from_draft(11, draft);
    let value = serde_json::to_value(&user).unwrap();

    assert_eq!(value["id"], 11);
    assert_eq!(value["department"], "Research");
    assert!(value.get("email").is_none());
}

#[test]
fn given_unlisted_role_and_status_when_decoded_then_kept_verbatim() {
    let draft: UserFields =
        serde_json::from_value(json!({ "role": "manager", "status": "pending" })).unwrap();

    let user = UserRecord::from_draft(12, draft);
    let value = serde_json::to_value(&user).unwrap();

    assert_eq!(user.fields.role, Some(FieldValue::Raw(json!("manager"))));
    assert_eq!(value["role"], "manager");
    assert_eq!(value["status"], "pending");
}

#[test]
fn given_null_in_patch_when_applied_then_field_is_replaced_by_null() {
    let mut user = seed_user();
    let patch: UserFields = serde_json::from_value(json!({ "joined": null })).unwrap();

    user.apply_patch(patch);
    let value = serde_json::to_value(&user).unwrap();

    assert!(user.fields.joined.as_ref().is_some_and(FieldValue::is_null));
    assert!(value["joined"].is_null());
    assert!(value.as_object().unwrap().contains_key("joined"));
    assert_eq!(value["name"], "Carol White");
}

#[test]
fn given_draft_without_role_when_created_then_no_role_is_assumed() {
    let draft: UserFields = serde_json::from_value(json!({ "name": "Kim Park" })).unwrap();

    let user = UserRecord::from_draft(13, draft);
    let value = serde_json::to_value(&user).unwrap();

    assert_eq!(user.fields.role, None);
    assert!(value.get("role").is_none());
}
