//! GovTriage command line
//!
//! Wires the lexicon fallback classifiers into the decision engine and
//! processes tickets from the command line. Any external model satisfying
//! the `LabelClassifier` trait can replace the lexicons in an embedding
//! service.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use govtriage_classifiers::{
    ClassificationAdapter, LexiconCategoryClassifier, LexiconSentimentClassifier,
};
use govtriage_engine::{EngineConfig, TicketEngine};
use std::io::Read;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            text,
            config,
            audit,
            no_audit,
            threshold,
            compact,
            verbose,
        } => {
            init_logging(verbose);

            let mut engine_config = match config {
                Some(path) => EngineConfig::from_file(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => EngineConfig {
                    audit_path: Some(audit),
                    ..EngineConfig::default()
                },
            };
            if no_audit {
                engine_config.audit_path = None;
            }
            if let Some(threshold) = threshold {
                engine_config.confidence_threshold = threshold;
            }

            let adapter = ClassificationAdapter::new(
                Arc::new(LexiconCategoryClassifier::new()?),
                Arc::new(LexiconSentimentClassifier::new()?),
            );
            let engine = TicketEngine::with_config(adapter, engine_config)?;
            info!(threshold = engine.confidence_threshold(), "engine ready");

            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("reading ticket text from stdin")?;
                    buffer
                }
            };

            let decision = engine.process(&text).await?;

            let output = if compact {
                serde_json::to_string(&decision)?
            } else {
                serde_json::to_string_pretty(&decision)?
            };
            println!("{output}");
        }

        Commands::Audit { audit, verbose } => {
            init_logging(verbose);

            let records = govtriage_telemetry::read_records(&audit)
                .with_context(|| format!("reading audit trail at {}", audit.display()))?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
