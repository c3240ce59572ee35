//! Sitepress CLI - documentation-site descriptor and demo registry tooling.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod pages;

#[derive(Parser)]
#[command(name = "sitepress")]
#[command(about = "Validate and emit the documentation site's declarative core")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a site.toml overriding the embedded descriptor
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site descriptor and the demo registry
    Check,

    /// List registered demo keys in authored order
    List,

    /// Print one demo document verbatim
    Show {
        /// Demo key, e.g. "start"
        key: String,
    },

    /// Write the generator-facing descriptor and demo pages
    Emit {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Check => {
            commands::check::run(&cli.config)?;
        }
        Commands::List => {
            commands::list::run()?;
        }
        Commands::Show { key } => {
            commands::show::run(&key)?;
        }
        Commands::Emit { output } => {
            commands::emit::run(&cli.config, &output)?;
        }
    }

    Ok(())
}
