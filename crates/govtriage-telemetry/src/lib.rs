//! GovTriage Telemetry
//!
//! Append-only audit trail for ticket decisions:
//! - One JSON object per line, human-diffable, UTF-8
//! - Single-writer discipline so concurrent appends never interleave
//! - Read-back helper for compliance checks and tests

pub mod audit;

pub use audit::{read_records, AuditRecord, AuditSink, AuditSinkConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::audit::{AuditRecord, AuditSink, AuditSinkConfig};
}
