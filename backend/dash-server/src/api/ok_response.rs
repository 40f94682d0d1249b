use serde::Serialize;

/// `{"ok": true}` acknowledgement returned by deletes
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl Default for OkResponse {
    fn default() -> Self {
        Self { ok: true }
    }
}
