//! Hoopsnap main entry point

use clap::{Parser, Subcommand};
use hoopsnap::config::Config;
use hoopsnap::pipeline;
use tracing_subscriber::EnvFilter;

/// Hoopsnap: small basketball-stats scraping pipelines
///
/// Fetches player dashboards from the stats API, a box score from a
/// server-rendered page, and a shot chart from a JavaScript-rendered
/// page. Raw HTML is cached next to the outputs; delete a cache file to
/// force a refetch.
#[derive(Parser, Debug)]
#[command(name = "hoopsnap")]
#[command(version = "1.0.0")]
#[command(about = "Basketball-stats scraping pipelines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch year-over-year dashboards for the fixed player list
    Players,

    /// Download and extract the box score page
    Boxscore,

    /// Render and extract the shot chart page
    Shots,

    /// Run all three pipelines in order
    All,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = Config::default();

    match cli.command {
        Command::Players => pipeline::run_players(&config.api).await?,
        Command::Boxscore => pipeline::run_boxscore(&config.box_score).await?,
        Command::Shots => pipeline::run_shots(&config.shots).await?,
        Command::All => pipeline::run_all(&config).await?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("hoopsnap=info,warn"),
            1 => EnvFilter::new("hoopsnap=debug,info"),
            2 => EnvFilter::new("hoopsnap=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
