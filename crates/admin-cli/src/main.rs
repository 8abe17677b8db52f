//! BigEye operator console.
//!
//! Thin terminal frontend over `bigeye-client`: every subcommand maps to one
//! admin page. The backend owns all business rules; this binary only renders
//! responses and gates the destructive calls behind confirmations.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bigeye_client::{AdminClient, ApiError, ClientConfig, Session, SessionState};
use cli::{Cli, Command};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        // A torn-down session is an expected operator state, not a bug.
        if matches!(e.downcast_ref::<ApiError>(), Some(ApiError::SessionExpired)) {
            eprintln!("Session expired. Run `bigeye-admin login <email>` to continue.");
        } else {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ClientConfig::from_env();
    tracing::debug!(api_url = %config.api_url, "Loaded configuration");
    let client = AdminClient::new(&config)?;
    let mut session = Session::new(client);
    session.resolve()?;

    match cli.command {
        Command::Login { email } => commands::auth::login(&mut session, &email).await,
        Command::Logout => commands::auth::logout(&mut session),
        Command::Dashboard { days } => commands::dashboard::show(authed(&session)?, days).await,
        Command::Users { action } => {
            commands::users::run(authed(&session)?, action, config.page_size).await
        }
        Command::Slips { action } => {
            commands::slips::run(authed(&session)?, action, config.page_size).await
        }
        Command::Jobs { action } => {
            commands::jobs::run(authed(&session)?, action, config.page_size).await
        }
        Command::Finance { action } => commands::finance::run(authed(&session)?, action).await,
        Command::Config { action } => commands::system::run(authed(&session)?, action).await,
        Command::Audit {
            severity,
            days,
            search,
            page,
        } => {
            commands::audit::run(
                authed(&session)?,
                severity,
                days,
                &search,
                page,
                config.page_size,
            )
            .await
        }
        Command::Promo { action } => commands::promo::run(authed(&session)?, action).await,
    }
}

/// Gate for everything except login/logout.
fn authed(session: &Session) -> Result<&AdminClient> {
    if session.state() != SessionState::Authenticated {
        anyhow::bail!("Not logged in. Run `bigeye-admin login <email>` first.");
    }
    Ok(session.client())
}
