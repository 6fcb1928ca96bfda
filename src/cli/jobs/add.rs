use clap::Args;
use jobtrack::{context::AppContext, jobs::JobDraft};

#[derive(Debug, Args)]
pub(crate) struct AddJobArgs {
    /// Company name
    #[arg(long)]
    company: String,

    /// Position title
    #[arg(long)]
    position: String,

    /// Application status (applied, interview, offer, rejected, accepted)
    #[arg(long)]
    status: String,

    /// Application date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    applied_date: Option<String>,

    /// Free-form notes
    #[arg(long)]
    notes: Option<String>,
}

pub(crate) async fn run(context: &AppContext, args: AddJobArgs) -> Result<(), String> {
    if args.company.trim().is_empty() {
        return Err("company cannot be empty".to_string());
    }

    if args.position.trim().is_empty() {
        return Err("position cannot be empty".to_string());
    }

    let applied_date = match args.applied_date.as_deref() {
        Some(raw) => super::parse_date(raw)?,
        None => jiff::Zoned::now().date(),
    };

    let draft = JobDraft {
        company: args.company,
        position: args.position,
        status: super::parse_status(&args.status)?,
        applied_date,
        notes: args.notes,
    };

    let created = context
        .jobs
        .create(&draft)
        .await
        .map_err(|error| format!("failed to add job: {error}"))?;

    super::print_job(&created);

    Ok(())
}
