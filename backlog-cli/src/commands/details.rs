use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use backlog_core::{CatalogId, Region};
use backlog_igdb::{ReleaseHints, ResolvedMetadata, fetch_game_details};

use crate::CliError;
use crate::cli_types::{CredentialArgs, OutputArgs};

/// Run the details command.
pub(crate) fn run_details(
    creds: &CredentialArgs,
    id: &str,
    platform: Option<String>,
    region: Option<String>,
    output: OutputArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let hints = ReleaseHints::new(platform.as_deref(), region.as_deref());
    if let Some(r) = region.as_deref() {
        if r.trim().parse::<u32>().is_err() && r.parse::<Region>().is_err() {
            log::warn!("Unrecognized region {:?}; using {}", r, Region::Worldwide);
        }
    }

    // Malformed ids get a blank record without connecting at all.
    let details = if CatalogId::parse(id).is_none() {
        ResolvedMetadata::default()
    } else {
        let rt = super::runtime()?;
        rt.block_on(async {
            let client = super::connect_igdb(creds, quiet).await?;
            let pb = super::spinner(quiet, "Fetching game details...");
            let result = fetch_game_details(&client, id, &hints).await;
            pb.finish_and_clear();
            result.map_err(CliError::from)
        })?
    };

    if output.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        print_details(id, &details);
    }
    Ok(())
}

fn print_details(id: &str, details: &ResolvedMetadata) {
    if details.is_blank() {
        log::warn!("'{}' is not a valid IGDB game id", id);
        return;
    }

    log::info!(
        "{}",
        details.title.if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    let scalar = |label: &str, value: &str| {
        let shown = if value.is_empty() { "-" } else { value };
        log::info!(
            "  {} {}",
            format!("{:<13}", format!("{}:", label)).if_supports_color(Stdout, |t| t.cyan()),
            shown,
        );
    };
    scalar("Platform", &details.platform);
    scalar("Region", &details.region);
    scalar("Release date", &details.release_date);
    scalar("Developer", &details.developer.join(", "));
    scalar("Publisher", &details.publisher.join(", "));
    scalar("Franchise", &details.franchise.join(", "));
    scalar("Series", &details.series.join(", "));
}
