//! End-to-end session and CRUD flow through the application context.

use std::path::PathBuf;

use jiff::civil::date;
use testresult::TestResult;

use jobtrack::{
    api::Registration,
    config::AppConfig,
    context::AppContext,
    jobs::{JobDraft, JobStatus, JobsError, StatusFilter},
    session::{FileSessionStore, SessionStore, TOKEN_KEY, USER_NAME_KEY},
};

use crate::support::TestBackend;

mod support;

fn config(backend: &TestBackend, dir: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        api_base_url: backend.base_url(),
        session_path: dir.path().join("session.json"),
    }
}

fn draft(company: &str, status: JobStatus) -> JobDraft {
    JobDraft {
        company: company.to_string(),
        position: "Eng".to_string(),
        status,
        applied_date: date(2024, 1, 1),
        notes: None,
    }
}

fn store_at(path: PathBuf) -> FileSessionStore {
    FileSessionStore::new(path)
}

#[tokio::test]
async fn register_login_crud_logout() -> TestResult {
    let backend = TestBackend::start().await;
    let dir = tempfile::tempdir()?;
    let config = config(&backend, &dir);

    let context = AppContext::from_config(&config);

    // Registration creates the account but no session.
    context
        .auth
        .register(&Registration {
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        })
        .await?;

    assert!(!context.auth.is_authenticated());

    // Login starts the session and persists the token.
    context.auth.login("a@x.com", "secret1").await?;

    assert!(context.auth.is_authenticated());
    assert_eq!(context.auth.user_name(), "Alice");

    let store = store_at(config.session_path.clone());
    assert_eq!(store.get(TOKEN_KEY), Some(support::TOKEN.to_string()));

    // CRUD against the backend, resynchronizing after every mutation.
    let first = context.jobs.create(&draft("Acme", JobStatus::Applied)).await?;
    let second = context
        .jobs
        .create(&draft("Globex", JobStatus::Interview))
        .await?;

    assert_eq!(context.jobs.jobs().len(), 2);

    context
        .jobs
        .update(first.id, &draft("Acme", JobStatus::Offer))
        .await?;

    let offers = context.jobs.filtered(StatusFilter::Only(JobStatus::Offer));
    assert_eq!(offers.len(), 1);
    assert_eq!(offers.first().map(|job| job.id), Some(first.id));

    context.jobs.delete(second.id).await?;

    let remaining = context.jobs.jobs();
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|job| job.id == first.id));
    assert_eq!(backend.job_count(), 1);

    // Logout clears both persisted entries.
    context.auth.logout();

    assert!(!context.auth.is_authenticated());

    let store = store_at(config.session_path.clone());
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_NAME_KEY), None);

    Ok(())
}

#[tokio::test]
async fn session_survives_a_process_restart() -> TestResult {
    let backend = TestBackend::start().await;
    backend.seed_user("Alice", "a@x.com", "secret1");

    let dir = tempfile::tempdir()?;
    let config = config(&backend, &dir);

    let context = AppContext::from_config(&config);
    context.auth.login("a@x.com", "secret1").await?;
    drop(context);

    // A fresh context over the same session file resumes the session.
    let restarted = AppContext::from_config(&config);

    assert!(restarted.auth.is_authenticated());
    assert_eq!(restarted.auth.user_name(), "Alice");

    restarted.jobs.refresh().await?;

    Ok(())
}

#[tokio::test]
async fn job_operations_after_logout_are_unauthorized() -> TestResult {
    let backend = TestBackend::start().await;
    backend.seed_user("Alice", "a@x.com", "secret1");

    let dir = tempfile::tempdir()?;
    let config = config(&backend, &dir);

    let context = AppContext::from_config(&config);
    context.auth.login("a@x.com", "secret1").await?;
    context.jobs.create(&draft("Acme", JobStatus::Applied)).await?;

    context.auth.logout();

    let result = context.jobs.refresh().await;

    assert!(
        matches!(result, Err(JobsError::Unauthorized)),
        "expected Unauthorized after logout, got {result:?}"
    );

    // Fail-soft read: the previously loaded list is retained.
    assert_eq!(context.jobs.jobs().len(), 1);

    Ok(())
}

#[tokio::test]
async fn failed_login_does_not_disturb_a_persisted_session() -> TestResult {
    let backend = TestBackend::start().await;
    backend.seed_user("Alice", "a@x.com", "secret1");

    let dir = tempfile::tempdir()?;
    let config = config(&backend, &dir);

    let context = AppContext::from_config(&config);
    context.auth.login("a@x.com", "secret1").await?;

    let result = context.auth.login("a@x.com", "wrong").await;

    assert!(result.is_err(), "second login should have been rejected");
    assert!(context.auth.is_authenticated());

    let store = store_at(config.session_path.clone());
    assert_eq!(store.get(TOKEN_KEY), Some(support::TOKEN.to_string()));

    Ok(())
}
