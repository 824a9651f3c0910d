//! Audit trail persistence
//!
//! Serializes a fixed subset of each ticket decision as one JSON line and
//! appends it to a durable log. Writes go through an interior mutex so
//! concurrent callers cannot interleave within a single record.

use govtriage_core::{Error, Priority, Result, TicketDecision};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One audit line: the fixed decision subset the trail retains
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub timestamp: String,
    pub ticket_id: String,
    pub category: String,
    pub priority: Priority,
    pub department: String,
    pub confidence_score: f32,
    pub needs_manual_review: bool,
    pub processing_duration_seconds: f64,
}

impl AuditRecord {
    /// Extract the audit subset from a completed decision
    pub fn from_decision(decision: &TicketDecision) -> Self {
        Self {
            timestamp: decision.ticket_processing.timestamp.clone(),
            ticket_id: decision.final_decisions.ticket_id.clone(),
            category: decision.final_decisions.category.clone(),
            priority: decision.final_decisions.priority,
            department: decision.final_decisions.department.clone(),
            confidence_score: decision.final_decisions.confidence_score,
            needs_manual_review: decision.final_decisions.needs_manual_review,
            processing_duration_seconds: decision.ticket_processing.processing_time_seconds,
        }
    }
}

/// Configuration for the audit sink
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSinkConfig {
    /// Audit log path; parent directories are created on open
    pub path: PathBuf,

    /// Flush to disk after this many records
    #[serde(default = "default_flush_interval")]
    pub flush_interval: usize,
}

impl AuditSinkConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            flush_interval: default_flush_interval(),
        }
    }
}

fn default_flush_interval() -> usize {
    1
}

struct SinkState {
    writer: BufWriter<File>,
    records_since_flush: usize,
}

/// Append-only JSONL audit log writer
pub struct AuditSink {
    config: AuditSinkConfig,
    state: Mutex<SinkState>,
}

impl AuditSink {
    /// Open (or create) the audit log in append mode
    pub fn new(config: AuditSinkConfig) -> Result<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::audit(format!(
                        "failed to create audit directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.path)
            .map_err(|e| {
                Error::audit(format!(
                    "failed to open audit log {}: {e}",
                    config.path.display()
                ))
            })?;

        Ok(Self {
            config,
            state: Mutex::new(SinkState {
                writer: BufWriter::new(file),
                records_since_flush: 0,
            }),
        })
    }

    /// Append one record as a JSON line
    pub fn append(&self, record: &AuditRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;

        let mut state = self.state.lock();
        self.write_line(&mut state, &json).map_err(|e| {
            Error::audit(format!(
                "failed to append to {}: {e}",
                self.config.path.display()
            ))
        })?;

        debug!(ticket_id = %record.ticket_id, "audit record appended");
        Ok(())
    }

    fn write_line(&self, state: &mut SinkState, json: &str) -> std::io::Result<()> {
        state.writer.write_all(json.as_bytes())?;
        state.writer.write_all(b"\n")?;
        state.records_since_flush += 1;

        if state.records_since_flush >= self.config.flush_interval {
            state.writer.flush()?;
            state.records_since_flush = 0;
        }

        Ok(())
    }

    /// Force a flush to disk
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.writer.flush().map_err(|e| {
            Error::audit(format!(
                "failed to flush {}: {e}",
                self.config.path.display()
            ))
        })?;
        state.records_since_flush = 0;
        Ok(())
    }

    /// Path of the underlying log file
    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

/// Read every parseable record back from an audit log
///
/// Unparseable lines are skipped, not fatal; a partially written trailing
/// line must not make the whole trail unreadable.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<AuditRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<AuditRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => debug!(error = %e, "skipping unparseable audit line"),
        }
    }

    Ok(records)
}
