use crate::{Result as StoreErrorResult, StoreError};

use dash_core::Identity;

use std::collections::HashMap;
use std::panic::Location;

use error_location::ErrorLocation;

/// Static email -> identity mapping used by login and token resolution
pub struct CredentialStore {
    identities: HashMap<String, Identity>,
}

impl CredentialStore {
    pub fn new(identities: impl IntoIterator<Item = Identity>) -> Self {
        Self {
            identities: identities
                .into_iter()
                .map(|identity| (identity.email.clone(), identity))
                .collect(),
        }
    }

    pub fn find(&self, email: &str) -> Option<&Identity> {
        self.identities.get(email)
    }

    /// Check an email/password pair. Unknown email and wrong password are
    /// indistinguishable to the caller.
    #[track_caller]
    pub fn authenticate(&self, email: &str, password: &str) -> StoreErrorResult<&Identity> {
        self.identities
            .get(email)
            .filter(|identity| identity.password_matches(password))
            .ok_or_else(|| StoreError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
