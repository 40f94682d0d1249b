use dash_core::{Identity, RecordId, Role};

use serde::Serialize;

/// Public view of the logged-in identity
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Identity> for AuthenticatedUser {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role,
        }
    }
}
