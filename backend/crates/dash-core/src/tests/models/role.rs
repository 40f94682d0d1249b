use crate::{AvatarMode, Role, UserStatus};

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Editor.as_str(), "editor");
    assert_eq!(Role::Viewer.as_str(), "viewer");
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Editor).unwrap(), "editor");
    assert_eq!(
        serde_json::from_value::<Role>("admin".into()).unwrap(),
        Role::Admin
    );
}

#[test]
fn test_user_status_display() {
    assert_eq!(UserStatus::Active.to_string(), "active");
    assert_eq!(UserStatus::Inactive.to_string(), "inactive");
}

#[test]
fn test_avatar_mode_decodes_letter() {
    assert_eq!(
        serde_json::from_value::<AvatarMode>("letter".into()).unwrap(),
        AvatarMode::Letter
    );
    assert!(serde_json::from_value::<AvatarMode>("emoji".into()).is_err());
}
