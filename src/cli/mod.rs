use clap::{Parser, Subcommand};
use jobtrack::{config::ConfigArgs, context::AppContext};

mod auth;
mod jobs;

#[derive(Debug, Parser)]
#[command(name = "jobtrack", about = "Job application tracker client", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login(auth::LoginArgs),

    /// Create a new account
    Register(auth::RegisterArgs),

    /// End the persisted session
    Logout,

    /// Show the current session
    Whoami,

    /// Manage tracked job applications
    Jobs(jobs::JobsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let config = self
            .config
            .resolve()
            .map_err(|error| format!("invalid configuration: {error}"))?;

        let context = AppContext::from_config(&config);

        match self.command {
            Commands::Login(args) => auth::login(&context, args).await,
            Commands::Register(args) => auth::register(&context, args).await,
            Commands::Logout => auth::logout(&context),
            Commands::Whoami => auth::whoami(&context),
            Commands::Jobs(command) => jobs::run(&context, command).await,
        }
    }
}
