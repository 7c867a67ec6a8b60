mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use offnav_cli::output::OutputFormat;
use offnav_cli::terminal::ColorPalette;
use offnav_lib::{load_network, Navigator, RouteRequest, DEFAULT_HINT_COUNT};

use crate::commands::{handle_locations_command, handle_route_command};

#[derive(Parser, Debug)]
#[command(author, version, about = "Offline directions between named landmarks")]
struct Cli {
    /// JSON road network file. Falls back to OFFNAV_NETWORK, then the builtin Delhi table.
    #[arg(long)]
    network: Option<PathBuf>,

    /// Output format for routes.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Number of landmark names to offer when a location is not recognised.
    #[arg(long, default_value_t = DEFAULT_HINT_COUNT)]
    hints: usize,

    /// Disable ANSI colors in text output.
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute directions between two landmark names.
    Route {
        /// Starting location (partial, case-insensitive names are fine).
        #[arg(long = "from")]
        from: String,
        /// Destination location.
        #[arg(long = "to")]
        to: String,
    },
    /// Compute directions from a single "Start, End" query.
    Query {
        /// Query text, e.g. "Red Fort, Airport".
        text: String,
    },
    /// List every landmark in the road network.
    Locations,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let network = load_network(cli.network.as_deref()).context("failed to load road network")?;
    let navigator = Navigator::from_network(&network)
        .context("road network failed validation")?
        .with_hint_count(cli.hints);

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };

    match cli.command {
        Command::Route { from, to } => handle_route_command(
            &navigator,
            &RouteRequest::new(from, to),
            cli.format,
            palette,
        ),
        Command::Query { text } => {
            let request = RouteRequest::parse(&text)?;
            handle_route_command(&navigator, &request, cli.format, palette)
        }
        Command::Locations => handle_locations_command(&navigator),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
