//! The decision engine
//!
//! Sequences redaction, safety checking, classification, override
//! resolution, routing and action-item generation into one immutable
//! decision record per ticket. Each call constructs fresh intermediate
//! results; the engine itself holds only read-only components plus the
//! runtime-adjustable confidence threshold.

use crate::config::EngineConfig;
use crate::{actions, tables};
use chrono::{DateTime, Utc};
use govtriage_classifiers::{ClassificationAdapter, PiiRedactor, SafetyOverrideEngine};
use govtriage_core::{
    Error, FinalDecision, Result, ReviewReason, TicketDecision, TicketProcessing,
};
use govtriage_telemetry::{AuditRecord, AuditSink, AuditSinkConfig};
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::time::Instant;
use tracing::{info, warn};

/// Orchestrates the full ticket triage pipeline
pub struct TicketEngine {
    redactor: PiiRedactor,
    safety: SafetyOverrideEngine,
    adapter: ClassificationAdapter,
    audit: Option<AuditSink>,
    confidence_threshold: RwLock<f32>,
}

impl TicketEngine {
    /// Create an engine with default configuration and no audit sink
    pub fn new(adapter: ClassificationAdapter) -> Result<Self> {
        Self::with_config(adapter, EngineConfig::default())
    }

    /// Create an engine from a configuration, opening the audit sink when a
    /// path is configured
    pub fn with_config(adapter: ClassificationAdapter, config: EngineConfig) -> Result<Self> {
        let audit = match &config.audit_path {
            Some(path) => Some(AuditSink::new(AuditSinkConfig::new(path))?),
            None => None,
        };

        Ok(Self {
            redactor: PiiRedactor::new()?,
            safety: SafetyOverrideEngine::new()?,
            adapter,
            audit,
            confidence_threshold: RwLock::new(config.confidence_threshold.clamp(0.0, 1.0)),
        })
    }

    /// Attach an already-open audit sink
    pub fn with_audit_sink(mut self, sink: AuditSink) -> Self {
        self.audit = Some(sink);
        self
    }

    /// Current manual-review confidence threshold
    pub fn confidence_threshold(&self) -> f32 {
        *self.confidence_threshold.read()
    }

    /// Adjust the confidence threshold at runtime; clamped to [0, 1]
    pub fn set_confidence_threshold(&self, threshold: f32) {
        *self.confidence_threshold.write() = threshold.clamp(0.0, 1.0);
    }

    /// Process one ticket text into a complete decision record
    ///
    /// The only error this surfaces is [`Error::EmptyInput`]; classifier
    /// unavailability degrades to a forced manual review and an audit-sink
    /// failure is logged and swallowed.
    pub async fn process(&self, text: &str) -> Result<TicketDecision> {
        let started = Instant::now();

        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        // Everything downstream of redaction operates on the masked text.
        let redaction = self.redactor.redact(text);
        let safety = self.safety.evaluate(&redaction.masked_text);
        let ml = self.adapter.classify(&redaction.masked_text).await;

        let (category, priority, response_time, safety_override_applied) =
            match &safety.directive {
                Some(directive) => (
                    directive.category.clone(),
                    directive.priority,
                    directive.response_time.clone(),
                    true,
                ),
                None => {
                    let category = ml.category.label.clone();
                    let priority = tables::resolve_priority(&category, &ml.sentiment.label);
                    (
                        category,
                        priority,
                        tables::response_time(priority).to_string(),
                        false,
                    )
                }
            };

        let threshold = self.confidence_threshold();
        let confidence_score = ml.category.confidence.min(ml.sentiment.confidence);
        let low_confidence = confidence_score < threshold;
        let needs_manual_review = low_confidence || safety.is_spam;
        let manual_review_reason = if low_confidence {
            Some(ReviewReason::LowConfidence)
        } else if safety.is_spam {
            Some(ReviewReason::PotentialSpam)
        } else {
            None
        };

        let sentiment = ml.sentiment.label.clone();
        let department = tables::route_department(&category, &sentiment).to_string();
        let department_contact = tables::department_contact(&department);
        let action_items = actions::action_items(&category, &sentiment, priority);

        let now = Utc::now();
        let ticket_id = ticket_id(text, now);

        let decision = TicketDecision {
            ticket_processing: TicketProcessing {
                original_text: text.to_string(),
                processed_text: redaction.masked_text.clone(),
                processing_time_seconds: started.elapsed().as_secs_f64(),
                timestamp: now.to_rfc3339(),
            },
            pii_protection: redaction,
            safety_check: safety,
            ml_predictions: ml,
            final_decisions: FinalDecision {
                category,
                sentiment,
                priority,
                department,
                department_contact,
                response_time,
                confidence_score,
                needs_manual_review,
                manual_review_reason,
                safety_override_applied,
                action_items,
                ticket_id,
            },
        };

        if let Some(sink) = &self.audit {
            let record = AuditRecord::from_decision(&decision);
            if let Err(e) = sink.append(&record) {
                warn!(ticket_id = %decision.ticket_id(), error = %e, "audit append failed; returning decision anyway");
            }
        }

        info!(
            ticket_id = %decision.ticket_id(),
            category = %decision.category(),
            priority = %decision.priority(),
            department = %decision.department(),
            manual_review = decision.needs_manual_review(),
            "ticket processed"
        );

        Ok(decision)
    }
}

/// Display identifier: UTC second plus a short content hash. Not unique
/// across same-second duplicate text; the audit line is the durable record.
fn ticket_id(text: &str, now: DateTime<Utc>) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let short = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]) % 10_000;
    format!("TKT-{}-{short:04}", now.format("%Y%m%d-%H%M%S"))
}
