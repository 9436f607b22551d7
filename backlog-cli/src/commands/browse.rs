use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use backlog_igdb::{COVER_BIG, GameSummary, popular_games, search_games};

use crate::CliError;
use crate::cli_types::{CredentialArgs, OutputArgs};

/// Run the search command.
pub(crate) fn run_search(
    creds: &CredentialArgs,
    query: &str,
    limit: usize,
    offset: usize,
    output: OutputArgs,
    quiet: bool,
) -> Result<(), CliError> {
    if query.trim().is_empty() {
        return Err(CliError::config("Missing search query"));
    }

    let rt = super::runtime()?;
    let games = rt.block_on(async {
        let client = super::connect_igdb(creds, quiet).await?;
        let pb = super::spinner(quiet, "Searching...");
        let result = search_games(&client, query, limit, offset).await;
        pb.finish_and_clear();
        result.map_err(CliError::from)
    })?;

    print_games(&games, output, offset)
}

/// Run the popular command.
pub(crate) fn run_popular(
    creds: &CredentialArgs,
    limit: usize,
    output: OutputArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let rt = super::runtime()?;
    let games = rt.block_on(async {
        let client = super::connect_igdb(creds, quiet).await?;
        let pb = super::spinner(quiet, "Fetching popular games...");
        let result = popular_games(&client, limit).await;
        pb.finish_and_clear();
        result.map_err(CliError::from)
    })?;

    print_games(&games, output, 0)
}

fn print_games(games: &[GameSummary], output: OutputArgs, offset: usize) -> Result<(), CliError> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(games)?);
        return Ok(());
    }

    if games.is_empty() {
        log::info!("{}", "No games found".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    for (i, game) in games.iter().enumerate() {
        let name = game.name.as_deref().unwrap_or("(untitled)");
        let rating = game
            .total_rating
            .map(|r| format!(" {:.0}%", r))
            .unwrap_or_default();
        log::info!(
            "{:>4}. {} {}{}",
            offset + i + 1,
            name.if_supports_color(Stdout, |t| t.bold()),
            format!("[{}]", game.id).if_supports_color(Stdout, |t| t.dimmed()),
            rating.if_supports_color(Stdout, |t| t.green()),
        );
        if let Some(url) = game.cover.as_ref().and_then(|c| c.url_for_size(COVER_BIG)) {
            log::debug!("      cover: {}", url);
        }
    }
    Ok(())
}
