//! gridport server binary.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use gridport_server::app::{router, AppState};
use gridport_sheets::{Credentials, SheetsClient};

#[derive(Parser)]
#[command(name = "gridport")]
#[command(
    author,
    version,
    about = "HTTP service for copying cell ranges between spreadsheets"
)]
struct Cli {
    /// Address to bind the HTTP server on
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,

    /// Path to the service-account credentials file
    #[arg(long, default_value = "/etc/secrets/service_account.json")]
    credentials: PathBuf,

    /// Override the API base URL from the credentials file
    #[arg(long)]
    api_base: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut creds = Credentials::from_file(&cli.credentials)
        .with_context(|| format!("failed to load credentials from '{}'", cli.credentials.display()))?;
    if let Some(api_base) = cli.api_base {
        creds.api_base = api_base;
    }

    let client = SheetsClient::new(creds).context("failed to build spreadsheet service client")?;
    let state = AppState {
        sheets: Arc::new(client),
    };

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    tracing::info!("listening on {}", cli.bind);

    axum::serve(listener, router(state))
        .await
        .context("server error")?;

    Ok(())
}
