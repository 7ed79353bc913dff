use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, config, details, genres, home, watchlist};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;
mod theme;

#[derive(Parser)]
#[command(name = "cinescope")]
#[command(about = "CineScope - Explore movies and keep a watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Color theme for terminal output (never persisted)
    #[arg(long, global = true, default_value = "light", value_enum)]
    theme: theme::Theme,

    /// Write logs to this file (daily rotation) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the featured movie, now-playing listing, and weekly trending
    #[command(long_about = "Show the home view: the featured movie of the day, movies currently playing in theatres, and this week's trending movies.")]
    Home,

    /// Browse the catalog with optional genre filter, text search, and paging
    #[command(long_about = "Browse the movie catalog. A text query searches by title; a genre filter narrows the discover listing. Without --page and with a terminal, an interactive pagination prompt is shown.")]
    Browse {
        /// Filter by genre, given as a genre id or name (see `cinescope genres`)
        #[arg(long, short)]
        genre: Option<String>,

        /// Search movies by title
        #[arg(long, short = 'Q')]
        query: Option<String>,

        /// Page number (clamped to the listing's page range)
        #[arg(long, short)]
        page: Option<u32>,
    },

    /// Show one movie's details, trailer, and similar movies
    Details {
        /// Movie id from the catalog
        id: u64,
    },

    /// Manage the locally persisted watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: Option<WatchlistCommands>,
    },

    /// List the catalog's movie genres
    Genres,

    /// Configure the API access key and catalog settings
    #[command(long_about = "Manage configuration and the API access key. Running without a subcommand shows the current configuration.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum WatchlistCommands {
    /// Show the watchlist in insertion order
    List,

    /// Add a movie by id (no-op if it is already tracked)
    Add {
        /// Movie id from the catalog
        id: u64,
    },

    /// Remove a movie by id (no-op if it is not tracked)
    Remove {
        /// Movie id from the catalog
        id: u64,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration (masks the API key)
    Show {
        /// Show the API key unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },

    /// Store the API access key (prompts when not given)
    SetKey {
        /// API access key (if not provided, will prompt without echo)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Set the catalog language (BCP 47 tag, e.g. en-US)
    SetLanguage {
        language: String,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet, cli.theme);

    match cli.command {
        Commands::Home => home::run_home(&output).await,
        Commands::Browse { genre, query, page } => {
            browse::run_browse(genre, query, page, &output).await
        }
        Commands::Details { id } => details::run_details(id, &output).await,
        Commands::Watchlist { cmd } => {
            let cmd = cmd.unwrap_or(WatchlistCommands::List);
            watchlist::run_watchlist(cmd, &output).await
        }
        Commands::Genres => genres::run_genres(&output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show { full: false });
            config::run_config(cmd, &output)
        }
    }
}
