mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "rhtmx-routes")]
#[command(version, about = "RHTMX Routes - generate URLs from named route templates", long_about = None)]
struct Cli {
    /// Route manifest (TOML, or JSON when the extension is .json)
    #[arg(short, long, global = true, default_value = "routes.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a URL for a named route
    Generate {
        /// Route name
        name: String,

        /// Parameters as KEY=VALUE; values are read as JSON scalars when possible
        params: Vec<String>,

        /// Generate without any input parameters
        #[arg(long, conflicts_with = "params")]
        no_params: bool,
    },

    /// List registered routes and their parameters
    Routes,

    /// Show the placeholder names extracted from a path
    Extract {
        /// Path template
        path: String,

        /// Placeholder pattern (alias or template containing %s); defaults to the manifest's
        #[arg(short, long)]
        pattern: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Generate {
            name,
            params,
            no_params,
        } => {
            commands::generate::execute(&cli.config, &name, &params, no_params)?;
        }
        Commands::Routes => {
            commands::routes::execute(&cli.config)?;
        }
        Commands::Extract { path, pattern } => {
            commands::extract::execute(&cli.config, &path, pattern.as_deref())?;
        }
    }

    Ok(())
}
