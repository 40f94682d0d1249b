//! Self-service profile ("me") view and its per-identity overrides.

use crate::{AvatarMode, FieldValue, Identity, RecordId, Role};

use serde::{Deserialize, Serialize};

/// Profile edit payload. Only the fields provided are changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Modes other than `letter` and `image` are stored as sent
    #[serde(default)]
    pub avatar_mode: Option<FieldValue<AvatarMode>>,
    #[serde(default)]
    pub avatar_base64: Option<String>,
}

/// Stored overrides for one identity, keyed by the identity's email
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileOverride {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_mode: Option<FieldValue<AvatarMode>>,
    pub avatar_base64: Option<String>,
}

impl ProfileOverride {
    /// Apply an update. Switching to [`AvatarMode::Letter`] always clears the
    /// stored image, including one supplied in the same update.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(image) = update.avatar_base64 {
            self.avatar_base64 = Some(image);
        }
        if let Some(mode) = update.avatar_mode {
            if mode.known() == Some(&AvatarMode::Letter) {
                self.avatar_base64 = None;
            }
            self.avatar_mode = Some(mode);
        }
    }
}

/// Identity merged with its overrides. Never exposes the password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar_mode: Option<FieldValue<AvatarMode>>,
    pub avatar_base64: Option<String>,
}

impl Profile {
    pub fn merged(identity: &Identity, overrides: Option<&ProfileOverride>) -> Self {
        let mut profile = Self {
            id: identity.id,
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role,
            avatar_mode: None,
            avatar_base64: None,
        };

        if let Some(o) = overrides {
            if let Some(ref name) = o.name {
                profile.name = name.clone();
            }
            if let Some(ref email) = o.email {
                profile.email = email.clone();
            }
            profile.avatar_mode = o.avatar_mode.clone();
            profile.avatar_base64 = o.avatar_base64.clone();
        }

        profile
    }
}
