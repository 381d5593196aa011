//! plaster CLI - translate literal HTML and Markdown into typed elements.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::OutputFormat;

#[derive(Parser)]
#[command(name = "plaster")]
#[command(about = "Translate literal HTML and Markdown into typed element trees")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to plaster.toml config file
    #[arg(short, long, default_value = "plaster.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate an HTML fragment
    Html {
        /// File to read, or "-" for stdin
        input: PathBuf,

        /// Require exactly one root element
        #[arg(long)]
        single: bool,

        /// Output format (defaults to config or "tree")
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Convert Markdown to HTML and translate it
    Markdown {
        /// File to read, or "-" for stdin
        input: PathBuf,

        /// Output format (defaults to config or "tree")
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Translate every .html/.htm/.md file under the given paths
    Check {
        /// Files or directories to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List supported tags and their attributes
    Tags,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Html {
            input,
            single,
            format,
        } => {
            commands::translate::run_html(&config, &input, single, format)?;
        }
        Commands::Markdown { input, format } => {
            commands::translate::run_markdown(&config, &input, format)?;
        }
        Commands::Check { paths } => {
            commands::check::run(&config, &paths)?;
        }
        Commands::Tags => {
            commands::tags::run();
        }
    }

    Ok(())
}
