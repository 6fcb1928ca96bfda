//! App Context

use std::sync::Arc;

use crate::{
    api::{ApiClient, ApiConfig, AuthApi, JobsApi},
    auth::SessionManager,
    config::AppConfig,
    jobs::JobsController,
    session::{FileSessionStore, SessionStore},
};

/// Application context wiring configuration into the core components.
///
/// Owns one session manager and one jobs controller sharing a single API
/// client and session store. Consuming surfaces receive this handle
/// explicitly instead of reaching for ambient global state.
pub struct AppContext {
    pub auth: SessionManager,
    pub jobs: JobsController,
}

impl AppContext {
    /// Build the context with the file-backed session store from `config`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let store: Arc<dyn SessionStore> =
            Arc::new(FileSessionStore::new(config.session_path.clone()));

        Self::with_store(config, store)
    }

    /// Build the context over a caller-provided session store.
    #[must_use]
    pub fn with_store(config: &AppConfig, store: Arc<dyn SessionStore>) -> Self {
        let api = Arc::new(ApiClient::new(
            ApiConfig {
                base_url: config.api_base_url.clone(),
            },
            Arc::clone(&store),
        ));

        let auth_api: Arc<dyn AuthApi> = Arc::clone(&api) as Arc<dyn AuthApi>;
        let jobs_api: Arc<dyn JobsApi> = api;

        Self {
            auth: SessionManager::new(auth_api, store),
            jobs: JobsController::new(jobs_api),
        }
    }
}
