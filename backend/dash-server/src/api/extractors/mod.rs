pub mod current_user;
pub mod json_body;
pub mod record_path;
