use crate::{AvatarMode, FieldValue, Identity, Profile, ProfileOverride, ProfileUpdate, Role};

use serde_json::json;

fn admin() -> Identity {
    Identity::new(1, "Admin User", "admin@example.com", "password123", Role::Admin)
}

#[test]
fn test_profile_without_overrides_mirrors_identity() {
    let profile = Profile::merged(&admin(), None);

    assert_eq!(profile.id, 1);
    assert_eq!(profile.name, "Admin User");
    assert_eq!(profile.email, "admin@example.com");
    assert_eq!(profile.role, Role::Admin);
    assert_eq!(profile.avatar_mode, None);

    let value = serde_json::to_value(&profile).unwrap();
    assert!(value.get("password").is_none());
}

#[test]
fn test_override_only_changes_provided_fields() {
    let mut overrides = ProfileOverride::default();
    overrides.apply(ProfileUpdate {
        name: Some("Root".to_string()),
        ..Default::default()
    });

    let profile = Profile::merged(&admin(), Some(&overrides));

    assert_eq!(profile.name, "Root");
    assert_eq!(profile.email, "admin@example.com");
}

#[test]
fn given_letter_mode_when_applied_then_stored_image_is_cleared() {
    let mut overrides = ProfileOverride::default();
    overrides.apply(ProfileUpdate {
        avatar_mode: Some(AvatarMode::Image.into()),
        avatar_base64: Some("iVBORw0KGgo=".to_string()),
        ..Default::default()
    });
    assert_eq!(overrides.avatar_base64.as_deref(), Some("iVBORw0KGgo="));

    overrides.apply(ProfileUpdate {
        avatar_mode: Some(AvatarMode::Letter.into()),
        ..Default::default()
    });

    assert_eq!(overrides.avatar_mode, Some(FieldValue::Known(AvatarMode::Letter)));
    assert_eq!(overrides.avatar_base64, None);
}

#[test]
fn given_letter_mode_and_image_in_same_update_then_image_is_dropped() {
    let mut overrides = ProfileOverride::default();

    overrides.apply(ProfileUpdate {
        avatar_mode: Some(AvatarMode::Letter.into()),
        avatar_base64: Some("iVBORw0KGgo=".to_string()),
        ..Default::default()
    });

    assert_eq!(overrides.avatar_base64, None);
}

#[test]
fn given_image_without_mode_when_applied_then_mode_is_untouched() {
    let mut overrides = ProfileOverride::default();
    overrides.apply(ProfileUpdate {
        avatar_mode: Some(AvatarMode::Letter.into()),
        ..Default::default()
    });

    overrides.apply(ProfileUpdate {
        avatar_base64: Some("R0lGODlh".to_string()),
        ..Default::default()
    });

    assert_eq!(overrides.avatar_mode, Some(FieldValue::Known(AvatarMode::Letter)));
    assert_eq!(overrides.avatar_base64.as_deref(), Some("R0lGODlh"));
}

#[test]
fn given_unlisted_avatar_mode_when_applied_then_kept_and_image_retained() {
    let mut overrides = ProfileOverride::default();
    let update: ProfileUpdate = serde_json::from_value(json!({
        "avatar_mode": "upload",
        "avatar_base64": "iVBORw0KGgo=",
    }))
    .unwrap();

    overrides.apply(update);
    let profile = Profile::merged(&admin(), Some(&overrides));
    let value = serde_json::to_value(&profile).unwrap();

    assert_eq!(value["avatar_mode"], "upload");
    assert_eq!(value["avatar_base64"], "iVBORw0KGgo=");
}

#[test]
fn given_null_avatar_mode_when_decoded_then_treated_as_absent() {
    let update: ProfileUpdate = serde_json::from_value(json!({ "avatar_mode": null })).unwrap();

    assert_eq!(update.avatar_mode, None);
}
