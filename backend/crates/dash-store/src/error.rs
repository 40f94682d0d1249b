use dash_core::RecordId;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{entity} {id} not found {location}")]
    NotFound {
        entity: &'static str,
        id: RecordId,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },
}

pub type Result<T> = std::result::Result<T, StoreError>;
