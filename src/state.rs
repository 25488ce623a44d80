use std::sync::Arc;

use crate::auth::SessionKeys;
use crate::config::AppConfig;
use crate::store::JsonStore;

/// Shared application state: immutable configuration, the signing keys, and
/// the file-store collaborator. Cloned per handler by axum.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub keys: Arc<SessionKeys>,
    pub store: JsonStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let keys = SessionKeys::new(
            &config.security.session_secret,
            config.security.session_ttl_days,
        );
        let store = JsonStore::new(config.storage.data_dir.clone());
        Self {
            config: Arc::new(config),
            keys: Arc::new(keys),
            store,
        }
    }
}
