use dash_auth::TokenService;
use dash_store::Store;

use std::sync::Arc;

/// Shared handler state. Cloned per request; the contents are shared.
#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(tokens: TokenService, store: Store) -> Self {
        Self {
            tokens: Arc::new(tokens),
            store: Arc::new(store),
        }
    }
}
