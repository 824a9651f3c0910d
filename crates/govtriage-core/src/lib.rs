//! GovTriage Core
//!
//! Core types and error handling shared across GovTriage components.
//!
//! This crate provides:
//! - Record types for PII redaction, safety findings, classifier output,
//!   and the final ticket decision
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    DepartmentContact, FinalDecision, LabelPrediction, MlPredictions, PiiKind, PiiMatch, Priority,
    RedactionResult, ReviewReason, SafetyFinding, SafetyOverride, TicketDecision, TicketProcessing,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        LabelPrediction, MlPredictions, Priority, RedactionResult, ReviewReason, SafetyFinding,
        TicketDecision,
    };
}
