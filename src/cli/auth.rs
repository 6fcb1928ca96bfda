//! Session commands.

use clap::Args;
use jobtrack::{api::Registration, context::AppContext};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email address
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "JOBTRACK_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn login(context: &AppContext, args: LoginArgs) -> Result<(), String> {
    let response = context
        .auth
        .login(&args.email, &args.password)
        .await
        .map_err(|error| format!("failed to log in: {error}"))?;

    match response.name {
        Some(name) => println!("logged in as {name}"),
        None => println!("logged in"),
    }

    Ok(())
}

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Account email address
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long, env = "JOBTRACK_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn register(context: &AppContext, args: RegisterArgs) -> Result<(), String> {
    let registration = Registration {
        name: args.name,
        email: args.email,
        password: args.password,
    };

    context
        .auth
        .register(&registration)
        .await
        .map_err(|error| format!("failed to register: {error}"))?;

    println!(
        "registered {}; run `jobtrack login` to start a session",
        registration.email
    );

    Ok(())
}

pub(crate) fn logout(context: &AppContext) -> Result<(), String> {
    context.auth.logout();

    println!("logged out");

    Ok(())
}

pub(crate) fn whoami(context: &AppContext) -> Result<(), String> {
    if !context.auth.is_authenticated() {
        println!("not logged in");
        return Ok(());
    }

    let name = context.auth.user_name();

    if name.is_empty() {
        println!("logged in");
    } else {
        println!("logged in as {name}");
    }

    Ok(())
}
