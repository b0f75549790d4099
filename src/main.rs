//! Docgate: Document Chat Gateway
//!
//! Browser-facing gateway in front of a document analysis backend.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docgate::config::{Config, LogFormat, LoggingConfig};

mod commands;

#[derive(Parser)]
#[command(name = "docgate")]
#[command(about = "Browser-facing gateway for a document analysis backend")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "docgate.toml")]
    config: PathBuf,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gateway server
    Serve {
        /// Listen address
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Chat about uploaded documents via a running gateway
    Chat {
        /// Gateway base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        gateway: String,
    },

    /// List uploaded documents
    List {
        /// Gateway base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        gateway: String,
    },

    /// Upload a document
    Upload {
        /// Path to the file to upload
        path: PathBuf,

        /// Gateway base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        gateway: String,
    },

    /// Delete a document by filename
    Delete {
        /// Name of the document to delete
        filename: String,

        /// Gateway base URL
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        gateway: String,
    },
}

fn init_logging(config: &LoggingConfig, verbose: u8) {
    let level = match verbose {
        0 => config.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    init_logging(&config.logging, cli.verbose);

    match cli.command {
        Commands::Serve { listen } => commands::serve::handle_serve(config, listen).await,
        Commands::Chat { gateway } => commands::chat::handle_chat(gateway).await,
        Commands::List { gateway } => commands::documents::handle_list(gateway).await,
        Commands::Upload { path, gateway } => {
            commands::documents::handle_upload(gateway, path).await
        }
        Commands::Delete { filename, gateway } => {
            commands::documents::handle_delete(gateway, filename).await
        }
    }
}
