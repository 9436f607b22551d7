//! CLI type definitions: command enums and argument structs.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "backlog")]
#[command(about = "Look up video game metadata for a personal backlog", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Per-invocation overrides for the stored IGDB credentials.
#[derive(Args, Clone, Default)]
pub(crate) struct CredentialArgs {
    /// Twitch client id (overrides env and config file)
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// Twitch client secret (overrides env and config file)
    #[arg(long, global = true)]
    pub client_secret: Option<String>,
}

/// Output format for lookup commands.
#[derive(Args, Clone, Copy, Default)]
pub(crate) struct OutputArgs {
    /// Print the raw JSON record instead of a formatted summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Resolve release date, platform, region, companies, franchises and series for a game
    Details {
        /// IGDB game id (digits only)
        id: String,

        /// Platform id to prefer when picking the release (e.g., 130 for Switch)
        #[arg(short, long)]
        platform: Option<String>,

        /// Region code or name to prefer (e.g., 2 or "North America"; default Worldwide)
        #[arg(short, long)]
        region: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Search the catalog by title
    Search {
        /// Title to search for
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = backlog_igdb::DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Number of results to skip (for paging)
        #[arg(short, long, default_value_t = 0)]
        offset: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the highest-rated games
    Popular {
        /// Maximum number of results
        #[arg(short, long, default_value_t = backlog_igdb::POPULAR_LIMIT)]
        limit: usize,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List release region codes in fallback preference order
    Regions,

    /// Manage IGDB credentials configuration
    Credentials {
        #[command(subcommand)]
        action: CredentialsAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum CredentialsAction {
    /// Show current credentials and their sources
    Show,

    /// Interactively set up credentials
    Setup,

    /// Test credentials by requesting an access token
    Test,

    /// Print the config file path
    Path,
}
