use clap::Args;
use jobtrack::{context::AppContext, jobs::JobId};

#[derive(Debug, Args)]
pub(crate) struct DeleteJobArgs {
    /// Id of the record to delete
    id: JobId,
}

pub(crate) async fn run(context: &AppContext, args: DeleteJobArgs) -> Result<(), String> {
    context
        .jobs
        .delete(args.id)
        .await
        .map_err(|error| format!("failed to delete job: {error}"))?;

    println!("deleted job {}", args.id);

    Ok(())
}
