use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse the Appueblear experience catalog from a document store export.
#[derive(Debug, Parser)]
#[command(name = "appueblear", version, about)]
pub(crate) struct Cli {
    /// Configuration file (TOML, JSON or YAML); `APB__*` variables override it.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Snapshot to read instead of `catalog.snapshot`.
    #[arg(short, long, global = true)]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List experiences as JSON, optionally filtered by name or location.
    List {
        #[arg(short = 'q', long)]
        search: Option<String>,
    },
    /// Print the detail view of one experience as JSON.
    Show { slug: String },
    /// Report info records and references the pipeline would reject or drop.
    Check,
}
