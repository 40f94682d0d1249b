pub mod auth;
pub mod error;
pub mod extractors;
pub mod files;
pub mod maps;
pub mod ok_response;
pub mod users;
