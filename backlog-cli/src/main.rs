//! backlog CLI
//!
//! Command-line front end for looking up game metadata in IGDB.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};

use crate::cli_types::{Cli, Commands, CredentialsAction};
pub(crate) use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let quiet = cli.quiet;
    let creds = cli.credentials;

    let result = match cli.command {
        Commands::Details {
            id,
            platform,
            region,
            output,
        } => commands::details::run_details(&creds, &id, platform, region, output, quiet),
        Commands::Search {
            query,
            limit,
            offset,
            output,
        } => commands::browse::run_search(&creds, &query, limit, offset, output, quiet),
        Commands::Popular { limit, output } => {
            commands::browse::run_popular(&creds, limit, output, quiet)
        }
        Commands::Regions => {
            commands::regions::run_regions();
            Ok(())
        }
        Commands::Credentials { action } => match action {
            CredentialsAction::Show => commands::credentials::run_credentials_show(),
            CredentialsAction::Setup => commands::credentials::run_credentials_setup(),
            CredentialsAction::Test => commands::credentials::run_credentials_test(&creds, quiet),
            CredentialsAction::Path => commands::credentials::run_credentials_path(),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Route `log` output to stdout. Normal runs print bare messages; verbose
/// runs add timestamps and levels.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper_util", LevelFilter::Warn)
        .filter_module("rustls", LevelFilter::Warn)
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(buf, "error: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.parse_default_env();
    builder.init();
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
