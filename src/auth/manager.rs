//! Auth session manager.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::{
    api::{ApiError, AuthApi, LoginResponse, RegisterResponse, Registration},
    auth::models::AuthState,
    session::{SessionStore, TOKEN_KEY, USER_NAME_KEY},
};

/// Owner of the authentication session.
///
/// All session mutations route through this component; nothing else writes
/// the session store. Construction performs the one-time initialization from
/// persisted state, so a restarted process resumes its previous session.
pub struct SessionManager {
    api: Arc<dyn AuthApi>,
    store: Arc<dyn SessionStore>,
    state: RwLock<AuthState>,
}

impl SessionManager {
    /// Build the manager, restoring authentication state from the store.
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, store: Arc<dyn SessionStore>) -> Self {
        let token = store.get(TOKEN_KEY);
        let user_name = store.get(USER_NAME_KEY).unwrap_or_default();

        let state = AuthState {
            authenticated: token.is_some_and(|token| !token.is_empty()),
            user_name,
        };

        Self {
            api,
            store,
            state: RwLock::new(state),
        }
    }

    /// Authenticate with the backend and start a session.
    ///
    /// On success the token (and name, when returned) is persisted and the
    /// in-memory state flips to authenticated. On failure the error is
    /// propagated unchanged and no state is mutated.
    ///
    /// # Errors
    ///
    /// Returns the gateway error from a rejected or failed login attempt.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self.api.login(email, password).await?;

        self.store.set(TOKEN_KEY, &response.token);

        let mut state = self.write_state();

        if let Some(name) = &response.name {
            self.store.set(USER_NAME_KEY, name);
            state.user_name = name.clone();
        }

        state.authenticated = true;
        drop(state);

        debug!("session started");

        Ok(response)
    }

    /// Create a new account.
    ///
    /// Registration alone does not start a session: the display name is
    /// persisted when the backend returns one, but `is_authenticated` is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns the gateway error from a rejected or failed registration.
    pub async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        let response = self.api.register(registration).await?;

        if let Some(name) = &response.name {
            self.store.set(USER_NAME_KEY, name);
            self.write_state().user_name = name.clone();
        }

        Ok(response)
    }

    /// End the session, clearing persisted and in-memory state.
    ///
    /// Purely local; no network call is made and the operation always
    /// succeeds.
    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_NAME_KEY);

        *self.write_state() = AuthState::default();

        debug!("session ended");
    }

    /// Whether a session token is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read_state().authenticated
    }

    /// Display name of the current user; empty when unknown.
    #[must_use]
    pub fn user_name(&self) -> String {
        self.read_state().user_name.clone()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
