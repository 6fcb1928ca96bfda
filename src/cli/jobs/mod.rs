//! Job commands.

use clap::{Args, Subcommand};
use jiff::civil::Date;
use jobtrack::{
    context::AppContext,
    jobs::models::{JobApplication, JobStatus},
};

mod add;
mod delete;
mod list;
mod update;

#[derive(Debug, Args)]
pub(crate) struct JobsCommand {
    #[command(subcommand)]
    command: JobsSubcommand,
}

#[derive(Debug, Subcommand)]
enum JobsSubcommand {
    /// List tracked applications
    List(list::ListJobsArgs),

    /// Track a new application
    Add(add::AddJobArgs),

    /// Replace the fields of an application
    Update(update::UpdateJobArgs),

    /// Stop tracking an application
    Delete(delete::DeleteJobArgs),
}

pub(crate) async fn run(context: &AppContext, command: JobsCommand) -> Result<(), String> {
    ensure_authenticated(context)?;

    match command.command {
        JobsSubcommand::List(args) => list::run(context, args).await,
        JobsSubcommand::Add(args) => add::run(context, args).await,
        JobsSubcommand::Update(args) => update::run(context, args).await,
        JobsSubcommand::Delete(args) => delete::run(context, args).await,
    }
}

/// Job operations require a session; direct the user to log in instead of
/// issuing a request that the backend will reject.
fn ensure_authenticated(context: &AppContext) -> Result<(), String> {
    if context.auth.is_authenticated() {
        Ok(())
    } else {
        Err("not logged in; run `jobtrack login` first".to_string())
    }
}

fn parse_status(raw: &str) -> Result<JobStatus, String> {
    raw.parse::<JobStatus>().map_err(|error| error.to_string())
}

fn parse_date(raw: &str) -> Result<Date, String> {
    raw.parse()
        .map_err(|error| format!("invalid applied-date: {error}"))
}

fn print_job(job: &JobApplication) {
    println!("id: {}", job.id);
    println!("company: {}", job.company);
    println!("position: {}", job.position);
    println!("status: {}", job.status);
    println!("applied_date: {}", job.applied_date);

    if let Some(notes) = &job.notes {
        println!("notes: {notes}");
    }
}
