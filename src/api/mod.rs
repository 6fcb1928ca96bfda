//! API gateway

mod client;
mod errors;
mod models;

pub use client::{ApiClient, ApiConfig, AuthApi, JobsApi, MockAuthApi, MockJobsApi};
pub use errors::ApiError;
pub use models::{LoginResponse, RegisterResponse, Registration};
