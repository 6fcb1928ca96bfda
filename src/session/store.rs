//! Session store abstraction.

use mockall::automock;

/// Store key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Store key under which the user's display name is persisted.
pub const USER_NAME_KEY: &str = "userName";

/// Durable key-value persistence for the client session.
///
/// The store holds at most two entries ([`TOKEN_KEY`] and [`USER_NAME_KEY`])
/// and mirrors the session across process restarts. Operations are
/// synchronous and infallible; implementations that can fail internally
/// (e.g. file I/O) degrade to an empty store rather than surfacing errors.
#[automock]
pub trait SessionStore: Send + Sync {
    /// Read the value persisted under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the entry under `key`, if present.
    fn remove(&self, key: &str);
}
