//! Auth state models.

/// In-memory authentication state.
///
/// Derived from the session store on construction and kept in lockstep with
/// it at every transition: `authenticated` is true exactly when the store
/// holds a non-empty token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Display name of the current user; empty when unknown.
    pub user_name: String,

    /// Whether a session token is held.
    pub authenticated: bool,
}
