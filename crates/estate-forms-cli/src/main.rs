mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

/// Exit code for a record that fails validation; I/O and parse errors exit with 1
const EXIT_INVALID: i32 = 2;

#[derive(Parser)]
#[command(name = "estate-forms")]
#[command(version, about = "Validate form records against declarative schemas", long_about = None)]
struct Cli {
    /// Log schema and validation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON record against a schema (exit code 2 when invalid)
    Check {
        /// Schema file (TOML)
        #[arg(short, long)]
        schema: PathBuf,

        /// Record file (JSON object)
        #[arg(short, long)]
        record: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the fields of a schema and their constraints
    Fields {
        /// Schema file (TOML)
        #[arg(short, long)]
        schema: PathBuf,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored, one failing field per line
    Text,
    /// The error map as a JSON object
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            schema,
            record,
            format,
        } => {
            if !commands::check::execute(&schema, &record, format)? {
                std::process::exit(EXIT_INVALID);
            }
        }
        Commands::Fields { schema } => {
            commands::fields::execute(&schema)?;
        }
    }

    Ok(())
}
