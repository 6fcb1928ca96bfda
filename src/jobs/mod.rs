//! Job collection

mod controller;
mod errors;
pub mod models;

pub use controller::JobsController;
pub use errors::JobsError;
pub use models::{JobApplication, JobDraft, JobId, JobStatus, StatusFilter};
