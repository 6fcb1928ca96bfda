//! HTTP client for the job tracker REST backend.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use crate::{
    api::{
        errors::{ApiError, normalize_error_body},
        models::{LoginResponse, RegisterResponse, Registration},
    },
    jobs::models::{JobApplication, JobDraft, JobId},
    session::{SessionStore, TOKEN_KEY},
};

/// Configuration for connecting to the backend API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix, e.g. `"http://localhost:8080/api"`.
    pub base_url: String,
}

/// HTTP client translating logical operations into REST calls.
///
/// Every outgoing request attaches the current session token as a bearer
/// credential when one is present in the session store; without a token the
/// request is sent unauthenticated. No retries are performed — a single
/// failed attempt is reported to the caller.
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
    store: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a new client from the given configuration and session store.
    #[must_use]
    pub fn new(config: ApiConfig, store: Arc<dyn SessionStore>) -> Self {
        let config = ApiConfig {
            base_url: config.base_url.trim_end_matches('/').to_string(),
        };

        Self {
            config,
            http: Client::new(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// Attach the persisted bearer token, when one is present.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.store.get(TOKEN_KEY) {
            Some(token) if !token.is_empty() => request.bearer_auth(token),
            _ => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        Err(ApiError::Status {
            status,
            message: normalize_error_body(status, &body),
        })
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        debug!(email, "logging in");

        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError> {
        debug!(email = %registration.email, "registering");

        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(registration)
            .send()
            .await?;

        Self::read_json(response).await
    }
}

#[async_trait]
impl JobsApi for ApiClient {
    async fn list_jobs(&self) -> Result<Vec<JobApplication>, ApiError> {
        let request = self.authorize(self.http.get(self.url("/jobs")));

        Self::read_json(request.send().await?).await
    }

    async fn create_job(&self, draft: &JobDraft) -> Result<JobApplication, ApiError> {
        debug!(company = %draft.company, "creating job");

        let request = self.authorize(self.http.post(self.url("/jobs")).json(draft));

        Self::read_json(request.send().await?).await
    }

    async fn update_job(&self, id: JobId, draft: &JobDraft) -> Result<JobApplication, ApiError> {
        debug!(id, "updating job");

        let request = self.authorize(self.http.put(self.url(&format!("/jobs/{id}"))).json(draft));

        Self::read_json(request.send().await?).await
    }

    async fn delete_job(&self, id: JobId) -> Result<(), ApiError> {
        debug!(id, "deleting job");

        let request = self.authorize(self.http.delete(self.url(&format!("/jobs/{id}"))));

        Self::check_status(request.send().await?).await?;

        Ok(())
    }
}

/// Authentication endpoints of the backend.
#[automock]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// Create a new account. Does not start a session.
    async fn register(&self, registration: &Registration) -> Result<RegisterResponse, ApiError>;
}

/// Job collection endpoints of the backend.
#[automock]
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// Retrieve the authenticated user's full job list.
    async fn list_jobs(&self) -> Result<Vec<JobApplication>, ApiError>;

    /// Create a new job record; the backend assigns the id.
    async fn create_job(&self, draft: &JobDraft) -> Result<JobApplication, ApiError>;

    /// Replace the mutable fields of an existing job record.
    async fn update_job(&self, id: JobId, draft: &JobDraft) -> Result<JobApplication, ApiError>;

    /// Delete a job record.
    async fn delete_job(&self, id: JobId) -> Result<(), ApiError>;
}
