pub mod collection;
pub mod credential_store;
pub mod error;
pub mod profile_store;
pub mod reference_data;
pub mod seed;
pub mod store;

pub use collection::Collection;
pub use credential_store::CredentialStore;
pub use error::{Result, StoreError};
pub use profile_store::ProfileStore;
pub use reference_data::ReferenceData;
pub use store::Store;
