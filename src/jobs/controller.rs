//! Job collection controller.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use crate::{
    api::JobsApi,
    jobs::{
        errors::JobsError,
        models::{JobApplication, JobDraft, JobId, JobStatus, StatusFilter},
    },
};

/// Owner of the authenticated user's in-memory job list.
///
/// The backend is the system of record; this controller holds a transient
/// cached copy and reloads it in full after every mutation rather than
/// patching locally. A failed reload is fail-soft: the previous list is
/// preserved and the error reported to the caller.
pub struct JobsController {
    api: Arc<dyn JobsApi>,
    jobs: RwLock<Vec<JobApplication>>,
}

impl JobsController {
    /// Create a controller with an empty cached list.
    #[must_use]
    pub fn new(api: Arc<dyn JobsApi>) -> Self {
        Self {
            api,
            jobs: RwLock::new(Vec::new()),
        }
    }

    /// Replace the cached list with the backend's current collection.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the previously loaded list is left
    /// untouched.
    pub async fn refresh(&self) -> Result<(), JobsError> {
        match self.api.list_jobs().await {
            Ok(jobs) => {
                *self.write_jobs() = jobs;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "job list refresh failed; keeping previous list");
                Err(error.into())
            }
        }
    }

    /// Create a job record, then resynchronize the cached list.
    ///
    /// # Errors
    ///
    /// Returns the creation or resynchronization error; a failed creation
    /// performs no local mutation.
    pub async fn create(&self, draft: &JobDraft) -> Result<JobApplication, JobsError> {
        let created = self.api.create_job(draft).await?;

        self.refresh().await?;

        Ok(created)
    }

    /// Replace the mutable fields of an existing record, then
    /// resynchronize.
    ///
    /// # Errors
    ///
    /// Returns [`JobsError::NotFound`] for an unknown id, or the update or
    /// resynchronization error.
    pub async fn update(&self, id: JobId, draft: &JobDraft) -> Result<JobApplication, JobsError> {
        let updated = self.api.update_job(id, draft).await?;

        self.refresh().await?;

        Ok(updated)
    }

    /// Delete a record, then resynchronize.
    ///
    /// # Errors
    ///
    /// Returns [`JobsError::NotFound`] for an unknown id, or the delete or
    /// resynchronization error.
    pub async fn delete(&self, id: JobId) -> Result<(), JobsError> {
        self.api.delete_job(id).await?;

        self.refresh().await
    }

    /// Snapshot of the cached list.
    #[must_use]
    pub fn jobs(&self) -> Vec<JobApplication> {
        self.read_jobs().clone()
    }

    /// Pure projection of the cached list through a status filter.
    ///
    /// [`StatusFilter::All`] is the identity; a concrete filter returns
    /// exactly the matching records in their original relative order.
    #[must_use]
    pub fn filtered(&self, filter: StatusFilter) -> Vec<JobApplication> {
        self.read_jobs()
            .iter()
            .filter(|job| filter.matches(job.status))
            .cloned()
            .collect()
    }

    /// Per-status tally over the cached list, in display order.
    #[must_use]
    pub fn status_counts(&self) -> Vec<(JobStatus, usize)> {
        let jobs = self.read_jobs();

        JobStatus::ALL
            .into_iter()
            .map(|status| {
                let count = jobs.iter().filter(|job| job.status == status).count();
                (status, count)
            })
            .collect()
    }

    fn read_jobs(&self) -> RwLockReadGuard<'_, Vec<JobApplication>> {
        self.jobs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_jobs(&self) -> RwLockWriteGuard<'_, Vec<JobApplication>> {
        self.jobs.write().unwrap_or_else(PoisonError::into_inner)
    }
}
