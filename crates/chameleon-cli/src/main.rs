//! CLI frontend for the Chameleon party game helper.

mod commands;
mod render;
mod repl;

use std::io::IsTerminal;
use std::process;

use chameleon_core::GameConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chameleon",
    about = "Chameleon — topic grids and coordinate dice for the party game",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// RNG seed for a reproducible session
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Deal a new topic, roll both dice once and exit
    Roll {
        /// Print the topic, grid items and dice as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session (the default)
    Interactive,
}

fn init_logging(verbose: bool, ansi: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, !cli.no_color && std::io::stderr().is_terminal());
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = GameConfig::default().with_optional_seed(cli.seed);

    let result = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Roll { json } => commands::roll::run(config, json),
        Commands::Interactive => commands::interactive::run(config),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
