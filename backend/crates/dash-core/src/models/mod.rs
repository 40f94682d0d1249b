pub mod attributes;
pub mod avatar_mode;
pub mod field;
pub mod file;
pub mod history_marker;
pub mod identity;
pub mod preset;
pub mod profile;
pub mod region;
pub mod role;
pub mod shape;
pub mod user;
pub mod user_status;
