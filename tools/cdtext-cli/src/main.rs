//! cdtext CLI - inspect and render CD-TEXT items
//!
//! # Commands
//!
//! - `cdtext render` - Print the TOC-file fragment of every item in a manifest
//! - `cdtext json` - Dump the items of a manifest as JSON
//! - `cdtext decode` - Classify raw pack type codes
//!
//! # Manifest (cdtext.toml)
//!
//! ```toml
//! [[item]]
//! pack_type = "TITLE"
//! text = "My Disc"
//!
//! [[item]]
//! pack_type = "ISRC"
//! track = 1
//! text = "USABC9900001"
//!
//! [[item]]
//! pack_type = "GENRE"
//! genre = { code = [0, 5], description = "Rock" }
//!
//! [[item]]
//! pack_type = "SIZE_INFO"
//! block = 0
//! bytes = [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 3]
//! ```

mod decode;
mod manifest;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// cdtext CLI - inspect and render CD-TEXT items
#[derive(Parser)]
#[command(name = "cdtext")]
#[command(about = "Inspect and render CD-TEXT items")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the TOC-file fragment of every item in a manifest
    Render(render::RenderArgs),

    /// Dump the items of a manifest as JSON
    Json(render::JsonArgs),

    /// Classify raw pack type codes
    Decode(decode::DecodeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render(args) => render::execute_render(args),
        Commands::Json(args) => render::execute_json(args),
        Commands::Decode(args) => decode::execute(args),
    }
}
