//! docview CLI - Command-line front-end for the docview utilities.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use docview_chunk::chunk_document;
use docview_core::ViewerConfig;
use docview_render::{candidate_worker_urls, cdn_fallback_url};

/// docview - Document viewer utilities
#[derive(Parser)]
#[command(name = "docview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path (default: user config dir, then ./docview.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chunk a document into sentence-aligned pieces
    Chunk {
        /// Path to the text file to chunk
        path: PathBuf,

        /// Target maximum characters per chunk (default: from config)
        #[arg(short = 's', long)]
        chunk_size: Option<usize>,

        /// Emit chunks as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print the worker-script endpoint candidates for the render engine
    Worker {
        /// Engine version (default: from config)
        #[arg(long)]
        version: Option<String>,

        /// Origin for same-origin candidates
        #[arg(long)]
        origin: Option<String>,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_config(path: Option<&PathBuf>) -> Result<ViewerConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ViewerConfig::load(path)?),
        None => Ok(ViewerConfig::load_default()?),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Chunk {
            path,
            chunk_size,
            json,
        } => {
            let text = fs::read_to_string(&path)?;
            let chunk_size = chunk_size.unwrap_or(config.chunking.chunk_size);
            let chunks = chunk_document(&text, chunk_size);

            if json {
                println!("{}", serde_json::to_string_pretty(&chunks)?);
            } else {
                for chunk in &chunks {
                    println!("[{}] {}", chunk.index, chunk.content);
                }
                eprintln!("{} chunks (target {} chars)", chunks.len(), chunk_size);
            }
        }
        Commands::Worker { version, origin } => {
            let version = version.unwrap_or(config.render.version);
            let origin = origin.or(config.render.origin);

            println!("Candidates (in order of preference):");
            for url in candidate_worker_urls(&version, origin.as_deref()) {
                println!("  {}", url);
            }
            println!("Fallback: {}", cdn_fallback_url(&version));
        }
    }

    Ok(())
}
