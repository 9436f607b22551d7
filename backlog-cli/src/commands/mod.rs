pub(crate) mod browse;
pub(crate) mod credentials;
pub(crate) mod details;
pub(crate) mod regions;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use backlog_igdb::{CatalogError, Credentials, IgdbClient};

use crate::CliError;
use crate::cli_types::CredentialArgs;

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}

/// A steady-ticking spinner, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: &'static str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Load credentials (applying CLI overrides) and connect to IGDB.
pub(crate) async fn connect_igdb(args: &CredentialArgs, quiet: bool) -> Result<IgdbClient, CliError> {
    let creds = Credentials::load()
        .map(|c| c.with_overrides(args.client_id.clone(), args.client_secret.clone()))
        .or_else(|e| match (&args.client_id, &args.client_secret) {
            (Some(id), Some(secret)) => Ok(Credentials {
                client_id: id.clone(),
                client_secret: secret.clone(),
            }),
            _ => Err(e),
        })
        .inspect_err(|_| credentials_hint())?;

    let pb = spinner(quiet, "Connecting to IGDB...");
    let client = IgdbClient::new(creds).await;
    pb.finish_and_clear();

    client.map_err(|e| {
        log::error!(
            "{} Failed to connect to IGDB: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        if matches!(e, CatalogError::InvalidCredentials(_)) {
            credentials_hint();
        }
        CliError::from(e)
    })
}

fn credentials_hint() {
    log::error!("");
    log::error!("Set credentials via environment variables:");
    log::error!("  IGDB_CLIENT_ID, IGDB_CLIENT_SECRET");
    log::error!("");
    log::error!("Or run 'backlog credentials setup' to configure credentials.");
}
