use dash_core::{Identity, Profile, ProfileOverride, ProfileUpdate};

use std::collections::HashMap;

use log::debug;
use tokio::sync::RwLock;

/// Per-identity profile overrides, keyed by the identity's login email.
/// Entries are created on first update and never removed.
#[derive(Default)]
pub struct ProfileStore {
    overrides: RwLock<HashMap<String, ProfileOverride>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity merged with any stored overrides
    pub async fn profile(&self, identity: &Identity) -> Profile {
        let overrides = self.overrides.read().await;
        Profile::merged(identity, overrides.get(&identity.email))
    }

    /// Upsert overrides for `identity` and return the merged profile
    pub async fn update(&self, identity: &Identity, update: ProfileUpdate) -> Profile {
        let mut overrides = self.overrides.write().await;
        let entry = overrides.entry(identity.email.clone()).or_default();
        entry.apply(update);
        debug!("Profile overrides updated for {}", identity.email);

        Profile::merged(identity, Some(entry))
    }
}
