//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use cartwise::output::OutputMode;

/// cartwise - Compare markets for a shopping list
#[derive(Parser, Debug)]
#[command(
    name = "cartwise",
    version,
    about = "Compare markets for a shopping list",
    long_about = "Rank nearby markets for a shopping list.\n\n\
                  Each market's catalog is matched against the list (exact product, \
                  brand variant or cheapest substitute) and markets are ordered by \
                  missing items, then by price plus round-trip travel cost."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Engine config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare every market within a radius of the user
    Compare {
        /// Snapshot file with lists, markets and catalogs (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Shopping list id
        #[arg(short, long)]
        list: String,

        /// User latitude
        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        /// User longitude
        #[arg(long, allow_negative_numbers = true)]
        lng: Option<f64>,

        /// Search radius in km
        #[arg(short, long, default_value_t = 5.0, allow_negative_numbers = true)]
        radius: f64,
    },

    /// Evaluate a single market
    Detail {
        /// Snapshot file with lists, markets and catalogs (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Shopping list id
        #[arg(short, long)]
        list: String,

        /// Market id
        #[arg(short, long)]
        market: String,

        /// User latitude (for the distance figure)
        #[arg(long, allow_negative_numbers = true, requires = "lng")]
        lat: Option<f64>,

        /// User longitude (for the distance figure)
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lng: Option<f64>,
    },

    /// Manage the engine config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write the default engine config
    Init {
        /// Destination (defaults to ~/.cartwise/engine.toml)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective engine config
    Show,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Compare {
            snapshot,
            list,
            lat,
            lng,
            radius,
        }) => commands::compare(&snapshot, &list, lat.zip(lng), radius, config, output_mode),
        Some(Command::Detail {
            snapshot,
            list,
            market,
            lat,
            lng,
        }) => commands::detail(&snapshot, &list, &market, lat.zip(lng), config, output_mode),
        Some(Command::Config { action }) => commands::config(action, config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": cartwise::VERSION
                    })
                );
            } else {
                println!("cartwise v{}", cartwise::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": cartwise::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("cartwise v{}", cartwise::VERSION);
                println!("Compare markets for a shopping list. Use --help for usage.");
            }
            Ok(())
        },
    }
}
