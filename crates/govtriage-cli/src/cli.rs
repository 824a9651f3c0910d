use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "govtriage")]
#[command(author, version, about = "Government service ticket triage pipeline")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process one ticket and print the decision record as JSON
    Process {
        /// Ticket text; read from stdin when omitted
        text: Option<String>,

        /// Engine config file (YAML); flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Audit log path (JSONL, append-only)
        #[arg(long, default_value = "./audit/govtriage.jsonl")]
        audit: PathBuf,

        /// Disable the audit sink
        #[arg(long)]
        no_audit: bool,

        /// Manual-review confidence threshold
        #[arg(long)]
        threshold: Option<f32>,

        /// Compact JSON output instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the audit trail as JSON
    Audit {
        /// Audit log path
        #[arg(long, default_value = "./audit/govtriage.jsonl")]
        audit: PathBuf,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
