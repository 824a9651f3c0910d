//! GovTriage Engine
//!
//! The decision engine for government service tickets. One `process` call
//! takes raw ticket text through PII redaction, safety-override evaluation,
//! ML classification, priority and department resolution, action-item
//! generation, and audit logging, returning a single immutable decision
//! record.
//!
//! Concurrent `process` calls are safe: classifiers are read-only after
//! load, the audit sink serializes its own writes, and every call builds
//! fresh intermediate state.

pub mod actions;
pub mod config;
pub mod engine;
pub mod tables;

pub use config::{EngineConfig, DEFAULT_CONFIDENCE_THRESHOLD};
pub use engine::TicketEngine;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::engine::TicketEngine;
    pub use govtriage_classifiers::prelude::*;
    pub use govtriage_core::prelude::*;
}
