use clap::Args;
use jobtrack::{
    context::AppContext,
    jobs::{JobDraft, JobId},
};

#[derive(Debug, Args)]
pub(crate) struct UpdateJobArgs {
    /// Id of the record to replace
    id: JobId,

    /// Company name
    #[arg(long)]
    company: String,

    /// Position title
    #[arg(long)]
    position: String,

    /// Application status (applied, interview, offer, rejected, accepted)
    #[arg(long)]
    status: String,

    /// Application date (YYYY-MM-DD)
    #[arg(long)]
    applied_date: String,

    /// Free-form notes
    #[arg(long)]
    notes: Option<String>,
}

pub(crate) async fn run(context: &AppContext, args: UpdateJobArgs) -> Result<(), String> {
    if args.company.trim().is_empty() {
        return Err("company cannot be empty".to_string());
    }

    if args.position.trim().is_empty() {
        return Err("position cannot be empty".to_string());
    }

    let draft = JobDraft {
        company: args.company,
        position: args.position,
        status: super::parse_status(&args.status)?,
        applied_date: super::parse_date(&args.applied_date)?,
        notes: args.notes,
    };

    let updated = context
        .jobs
        .update(args.id, &draft)
        .await
        .map_err(|error| format!("failed to update job: {error}"))?;

    super::print_job(&updated);

    Ok(())
}
