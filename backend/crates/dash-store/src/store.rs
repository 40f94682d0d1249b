use crate::{Collection, CredentialStore, ProfileStore, ReferenceData, seed};

use dash_core::{FileRecord, PresetRecord, ShapeRecord, UserRecord};

use log::info;

/// All in-memory state of the service. Lost on restart.
pub struct Store {
    pub credentials: CredentialStore,
    pub profiles: ProfileStore,
    pub users: Collection<UserRecord>,
    pub files: Collection<FileRecord>,
    pub presets: Collection<PresetRecord>,
    pub shapes: Collection<ShapeRecord>,
    pub reference: ReferenceData,
}

impl Store {
    /// Store populated with the built-in fixture data
    pub fn seeded() -> Self {
        let store = Self {
            credentials: CredentialStore::new(seed::credentials()),
            profiles: ProfileStore::new(),
            users: Collection::seeded(seed::users()),
            files: Collection::seeded(seed::files()),
            presets: Collection::seeded(seed::presets()),
            shapes: Collection::new(),
            reference: ReferenceData::seeded(),
        };

        info!(
            "Store seeded: {} identities, {} history markers, {} regions",
            store.credentials.len(),
            store.reference.history.len(),
            store.reference.regions.features.len()
        );

        store
    }
}
