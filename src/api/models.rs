//! Auth request/response payloads.

use serde::{Deserialize, Serialize};

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer credential for subsequent requests.
    pub token: String,

    /// Display name, when the backend returns one.
    #[serde(default)]
    pub name: Option<String>,
}

/// Registration request payload.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful registration payload.
///
/// Registration does not start a session; at most the backend echoes the
/// display name back.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub name: Option<String>,
}
