pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::login, authenticated_user::AuthenticatedUser, login_request::LoginRequest,
        login_response::LoginResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{current_user::CurrentUser, json_body::JsonBody, record_path::RecordPath},
    files::files::{delete_file, get_file, list_files, update_file, upload_file},
    maps::{
        maps::{geojson, history},
        presets::{create_preset, delete_preset, list_presets, update_preset},
        shapes::{create_shapes, delete_shape, list_shapes, update_shape},
    },
    ok_response::OkResponse,
    users::{
        me::{get_me, update_me},
        users::{create_user, delete_user, list_users, update_user},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
