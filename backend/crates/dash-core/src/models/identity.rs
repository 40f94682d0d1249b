//! Login identity held by the credential store.

use crate::{RecordId, Role};

use serde::{Deserialize, Serialize};

/// A principal that can log in. Immutable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: RecordId,
    pub name: String,
    /// Unique key; also the token subject
    pub email: String,
    /// Never serialized
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
}

impl Identity {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    /// Compare a presented password against the stored secret
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
