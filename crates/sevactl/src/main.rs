//! Seva Control - CLI for tracking government service applications
//!
//! Looks up an application by its tracking code and prints the status,
//! progress timeline and remarks.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use sevactl::commands::{self, TrackOptions};
use sevactl::errors::EXIT_GENERAL_ERROR;

#[derive(Parser)]
#[command(name = "sevactl")]
#[command(about = "Track the status of a service application", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show status and progress for a tracking code
    Track {
        /// Application / receipt number (e.g. BC123456)
        code: String,

        /// Print the tracking view as JSON
        #[arg(long)]
        json: bool,

        /// Override the lookup endpoint from the config file
        #[arg(long)]
        endpoint: Option<String>,

        /// Do not consult the demonstration dataset
        #[arg(long)]
        no_fallback: bool,
    },

    /// List the demonstration tracking codes
    Samples,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Track {
            code,
            json,
            endpoint,
            no_fallback,
        } => {
            let options = TrackOptions {
                json,
                endpoint,
                no_fallback,
                color: std::io::stdout().is_terminal(),
            };
            commands::track(&code, options).await
        }
        Commands::Samples => commands::samples(),
    };

    match exit_code {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_GENERAL_ERROR);
        }
    }
}
