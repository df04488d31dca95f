//! CLI frontend for the Guess Who game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gw",
    about = "Guess Who: think of a famous person, answer a few questions",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play {
        /// Catalog file (default: built-in sample catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Maximum number of questions per game
        #[arg(short, long, default_value_t = gw_engine::config::DEFAULT_BUDGET)]
        budget: u32,

        /// Write the transcript of each finished game to this file as JSON
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// List people in the catalog
    List(commands::list::ListArgs),

    /// Write the sample catalog to a JSON file
    Init {
        /// Catalog file to create
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Add a person to a catalog file
    Add(commands::add::AddArgs),
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Play {
            catalog,
            budget,
            transcript,
        } => commands::play::run(catalog.as_deref(), budget, transcript.as_deref()),
        Commands::List(args) => commands::list::run(&args),
        Commands::Init { file, force } => commands::init::run(&file, force),
        Commands::Add(args) => commands::add::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
