use clap::Args;
use jobtrack::{context::AppContext, jobs::StatusFilter};

#[derive(Debug, Args)]
pub(crate) struct ListJobsArgs {
    /// Filter by status (applied, interview, offer, rejected, accepted, or all)
    #[arg(long, default_value = "all")]
    status: String,

    /// Print per-status counts instead of the records themselves
    #[arg(long)]
    counts: bool,
}

pub(crate) async fn run(context: &AppContext, args: ListJobsArgs) -> Result<(), String> {
    let filter = args
        .status
        .parse::<StatusFilter>()
        .map_err(|error| error.to_string())?;

    context
        .jobs
        .refresh()
        .await
        .map_err(|error| format!("failed to fetch jobs: {error}"))?;

    if args.counts {
        for (status, count) in context.jobs.status_counts() {
            println!("{status}: {count}");
        }

        return Ok(());
    }

    let jobs = context.jobs.filtered(filter);

    if jobs.is_empty() {
        println!("no jobs found");
        return Ok(());
    }

    for job in &jobs {
        super::print_job(job);
        println!();
    }

    Ok(())
}
