//! skinpack CLI - builds `launcher_custom_skins.json` from Minecraft skins.
//!
//! Point it at a folder of skin PNGs and it writes the document the launcher
//! reads for its custom skins list, with slim/classic detection and a head
//! preview for every skin.
//!
//! # Usage
//!
//! ```bash
//! # Build the document from a folder of skins
//! skinpack generate ./skins/
//!
//! # Write it somewhere specific
//! skinpack generate ./skins/ --output ~/.minecraft/launcher_custom_skins.json
//!
//! # Check how a single skin will be classified
//! skinpack inspect alex.png
//!
//! # View configuration
//! skinpack config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// skinpack - Generate the launcher custom skins file from skin textures.
#[derive(Parser, Debug)]
#[command(name = "skinpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build launcher_custom_skins.json from skin files
    Generate(cli::generate::GenerateArgs),

    /// Show texture id and model variant of a single skin
    Inspect(cli::inspect::InspectArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match skinpack_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `skinpack config path`."
            );
            skinpack_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("skinpack v{}", skinpack_core::VERSION);

    match cli.command {
        Commands::Generate(args) => cli::generate::execute(args, config).await,
        Commands::Inspect(args) => cli::inspect::execute(args).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
