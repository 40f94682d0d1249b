pub mod auth;
pub mod authenticated_user;
pub mod login_request;
pub mod login_response;
