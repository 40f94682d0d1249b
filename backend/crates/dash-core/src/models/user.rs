//! Managed user entries shown in the dashboard user table.
//!
//! These are display records, not login identities: creating a user here does
//! not grant it the ability to authenticate.

use crate::models::field::deserialize_present;
use crate::{
    Attributes, FieldValue, Record, RecordId, Role, UserStatus, merge_attributes, merge_field,
};

use serde::{Deserialize, Serialize};

/// User attributes. Used both as the create payload and as the update patch;
/// absent fields are left untouched on update and an explicit `null` replaces
/// the stored value.
/// `role` and `status` outside the known values are kept as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFields {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<FieldValue<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<FieldValue<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<FieldValue<Role>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<FieldValue<UserStatus>>,
    /// Join date, `YYYY-MM-DD`
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub joined: Option<FieldValue<String>>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl UserFields {
    /// Field-by-field merge; keys present in `patch` win, `null` included.
    pub fn merge(&mut self, patch: UserFields) {
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.email, patch.email);
        merge_field(&mut self.role, patch.role);
        merge_field(&mut self.status, patch.status);
        merge_field(&mut self.joined, patch.joined);
        merge_attributes(&mut self.extra, patch.extra);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: UserFields,
}

impl Record for UserRecord {
    const ENTITY: &'static str = "User";

    type Draft = UserFields;
    type Patch = UserFields;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: UserFields) -> Self {
        let mut fields = UserFields::default();
        fields.merge(draft);
        Self { id, fields }
    }

    fn apply_patch(&mut self, patch: UserFields) {
        self.fields.merge(patch);
    }
}
