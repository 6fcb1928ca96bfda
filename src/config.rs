//! Client configuration.

use std::path::PathBuf;

use clap::Args;
use thiserror::Error;

/// Base URL of the backend API when none is configured.
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend API base URL, including the `/api` prefix.
    pub api_base_url: String,

    /// Path of the persisted session file.
    pub session_path: PathBuf,
}

/// Configuration resolution errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No user config directory could be determined for the session file.
    #[error("could not determine a config directory; pass --session-file")]
    NoConfigDir,
}

/// Command-line and environment configuration arguments.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Backend API base URL
    #[arg(long = "api-url", env = "JOBTRACK_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Session file path; defaults to a file under the user config directory
    #[arg(long = "session-file", env = "JOBTRACK_SESSION_FILE")]
    session_file: Option<PathBuf>,
}

impl ConfigArgs {
    /// Resolve arguments into an [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error when no session file path was given and the user
    /// config directory cannot be determined.
    pub fn resolve(self) -> Result<AppConfig, ConfigError> {
        let session_path = match self.session_file {
            Some(path) => path,
            None => default_session_path().ok_or(ConfigError::NoConfigDir)?,
        };

        Ok(AppConfig {
            api_base_url: self.api_url,
            session_path,
        })
    }
}

fn default_session_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jobtrack").join("session.json"))
}
