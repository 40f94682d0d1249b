use crate::AuthenticatedUser;

use serde::Serialize;

pub const TOKEN_TYPE_BEARER: &str = "bearer";

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: AuthenticatedUser,
}
