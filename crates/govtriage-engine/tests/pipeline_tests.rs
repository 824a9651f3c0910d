//! End-to-end pipeline tests with mock classifiers
//!
//! Mock implementations of the `LabelClassifier` trait give deterministic
//! ML outputs so the decision logic can be pinned down exactly.

use async_trait::async_trait;
use govtriage_classifiers::{ClassificationAdapter, LabelClassifier};
use govtriage_core::{Error, LabelPrediction, Priority, Result, ReviewReason};
use govtriage_engine::{EngineConfig, TicketEngine};
use govtriage_telemetry::read_records;
use std::collections::BTreeMap;
use std::sync::Arc;
use tempfile::TempDir;

/// Mock classifier returning a fixed label and confidence
struct MockClassifier {
    label: String,
    confidence: f32,
}

impl MockClassifier {
    fn new(label: &str, confidence: f32) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            confidence,
        })
    }
}

#[async_trait]
impl LabelClassifier for MockClassifier {
    async fn classify(&self, _text: &str) -> Result<LabelPrediction> {
        let mut distribution = BTreeMap::new();
        distribution.insert(self.label.clone(), self.confidence);
        Ok(LabelPrediction {
            label: self.label.clone(),
            confidence: self.confidence,
            distribution,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn engine_with(category: (&str, f32), sentiment: (&str, f32)) -> TicketEngine {
    let adapter = ClassificationAdapter::new(
        MockClassifier::new(category.0, category.1),
        MockClassifier::new(sentiment.0, sentiment.1),
    );
    TicketEngine::new(adapter).unwrap()
}

#[tokio::test]
async fn emergency_ticket_with_pii_is_overridden_and_masked() {
    let engine = engine_with(("Facilities", 0.9), ("Neutral", 0.9));

    let decision = engine
        .process("URGENT: Fire alarm going off! Emirates ID: 784-1990-1234567-1, call +971501234567")
        .await
        .unwrap();

    assert!(decision.final_decisions.safety_override_applied);
    assert_eq!(decision.priority(), Priority::Critical);
    assert_eq!(decision.category(), "Safety / Emergency");
    assert_eq!(decision.department(), "Emergency Response Center");
    assert_eq!(decision.final_decisions.response_time, "15 minutes");

    let masked = &decision.ticket_processing.processed_text;
    assert!(masked.contains("784-1990-XXX-1"));
    assert!(masked.contains("+971-XXX-XXXX"));
    assert!(!masked.contains("1234567-1"));
    assert!(decision.pii_protection.has_pii);
    assert!(!decision.needs_manual_review());
}

#[tokio::test]
async fn negative_billing_ticket_goes_high_priority_to_finance() {
    let engine = engine_with(("Billing", 0.9), ("Negative", 0.9));

    let decision = engine
        .process("My water bill shows double charges this month")
        .await
        .unwrap();

    assert!(!decision.final_decisions.safety_override_applied);
    assert_eq!(decision.priority(), Priority::High);
    assert_eq!(decision.department(), "Finance & Accounts Department");
    assert_eq!(decision.final_decisions.response_time, "1 hour");
    assert!(!decision.needs_manual_review());
    assert!(decision.final_decisions.manual_review_reason.is_none());
}

#[tokio::test]
async fn low_sentiment_confidence_forces_manual_review() {
    let engine = engine_with(("Billing", 0.9), ("Negative", 0.3));

    let decision = engine
        .process("My water bill shows double charges this month")
        .await
        .unwrap();

    assert!(decision.needs_manual_review());
    assert_eq!(
        decision.final_decisions.manual_review_reason,
        Some(ReviewReason::LowConfidence)
    );
    assert!((decision.confidence_score() - 0.3).abs() < 1e-6);
    // Routing still happens; review is a flag, not a dead end.
    assert_eq!(decision.department(), "Finance & Accounts Department");
}

#[tokio::test]
async fn negative_it_ticket_routes_to_escalation_team() {
    let engine = engine_with(("Technical / IT", 0.9), ("Negative", 0.9));

    let decision = engine
        .process("The licensing portal rejects my documents every time")
        .await
        .unwrap();

    assert_eq!(decision.department(), "Priority Escalation Team");
    assert_eq!(decision.priority(), Priority::High);
    assert_eq!(
        decision.final_decisions.department_contact.phone,
        "800-PRIORITY"
    );
}

#[tokio::test]
async fn empty_input_is_rejected_without_audit_entry() {
    let dir = TempDir::new().unwrap();
    let audit_path = dir.path().join("audit.jsonl");

    let adapter = ClassificationAdapter::new(
        MockClassifier::new("Billing", 0.9),
        MockClassifier::new("Neutral", 0.9),
    );
    let engine = TicketEngine::with_config(
        adapter,
        EngineConfig {
            audit_path: Some(audit_path.clone()),
            ..EngineConfig::default()
        },
    )
    .unwrap();

    assert!(matches!(engine.process("").await, Err(Error::EmptyInput)));
    assert!(matches!(
        engine.process("   \n\t ").await,
        Err(Error::EmptyInput)
    ));

    let records = read_records(&audit_path).unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn keyword_stuffing_is_deprioritized_and_flagged_as_spam() {
    let engine = engine_with(("Facilities", 0.9), ("Neutral", 0.9));

    let decision = engine
        .process("fire emergency explosion ambulance everywhere right now")
        .await
        .unwrap();

    assert!(decision.safety_check.is_spam);
    assert!(decision.safety_check.needs_override);
    assert!(!decision.final_decisions.safety_override_applied);
    // Back to normal ML-driven handling.
    assert_eq!(decision.category(), "Facilities");
    assert_eq!(decision.priority(), Priority::Medium);
    assert_eq!(
        decision.final_decisions.manual_review_reason,
        Some(ReviewReason::PotentialSpam)
    );
}

#[tokio::test]
async fn confidence_gate_is_monotonic_in_the_threshold() {
    let engine = engine_with(("Inquiry", 0.6), ("Neutral", 0.6));
    let text = "Where can I renew my trade license?";

    let mut last_review = false;
    for threshold in [0.1, 0.3, 0.55, 0.61, 0.8, 1.0] {
        engine.set_confidence_threshold(threshold);
        let decision = engine.process(text).await.unwrap();
        // Raising the threshold can only turn review on, never off.
        assert!(
            decision.needs_manual_review() || !last_review,
            "review flipped off at threshold {threshold}"
        );
        last_review = decision.needs_manual_review();
    }

    engine.set_confidence_threshold(0.55);
    assert!(!engine.process(text).await.unwrap().needs_manual_review());
    engine.set_confidence_threshold(0.61);
    assert!(engine.process(text).await.unwrap().needs_manual_review());
}

#[tokio::test]
async fn degraded_adapter_always_routes_to_manual_review() {
    let engine = TicketEngine::new(ClassificationAdapter::degraded()).unwrap();

    let decision = engine
        .process("The elevator in building C is stuck again")
        .await
        .unwrap();

    assert!(decision.ml_predictions.degraded);
    assert_eq!(decision.category(), "Unknown");
    assert_eq!(decision.confidence_score(), 0.0);
    assert!(decision.needs_manual_review());
    assert_eq!(
        decision.final_decisions.manual_review_reason,
        Some(ReviewReason::LowConfidence)
    );
    assert_eq!(decision.priority(), Priority::Medium);
    assert_eq!(decision.department(), "Customer Service Center");
}

#[tokio::test]
async fn decisions_are_appended_to_the_audit_trail() {
    let dir = TempDir::new().unwrap();
    let audit_path = dir.path().join("audit.jsonl");

    let adapter = ClassificationAdapter::new(
        MockClassifier::new("Inquiry", 0.8),
        MockClassifier::new("Neutral", 0.8),
    );
    let engine = TicketEngine::with_config(
        adapter,
        EngineConfig {
            audit_path: Some(audit_path.clone()),
            ..EngineConfig::default()
        },
    )
    .unwrap();

    let first = engine.process("What are the office opening hours?").await.unwrap();
    let second = engine.process("Which documents do I need for renewal?").await.unwrap();

    let records = read_records(&audit_path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].ticket_id, first.ticket_id());
    assert_eq!(records[1].ticket_id, second.ticket_id());
    assert_eq!(records[0].category, "Inquiry");
    assert!(!records[0].needs_manual_review);
}

// /dev/full accepts opens but fails every flush with ENOSPC, so each append
// errors out of the sink while the engine keeps going.
#[cfg(target_os = "linux")]
#[tokio::test]
async fn failing_audit_sink_does_not_fail_processing() {
    use govtriage_telemetry::{AuditSink, AuditSinkConfig};

    let sink = AuditSink::new(AuditSinkConfig::new("/dev/full")).unwrap();
    let adapter = ClassificationAdapter::new(
        MockClassifier::new("Billing", 0.9),
        MockClassifier::new("Negative", 0.9),
    );
    let engine = TicketEngine::new(adapter).unwrap().with_audit_sink(sink);

    let decision = engine
        .process("My water bill shows double charges this month")
        .await
        .unwrap();

    // The decision comes back fully populated despite the dead trail.
    assert_eq!(decision.category(), "Billing");
    assert_eq!(decision.priority(), Priority::High);
    assert_eq!(decision.department(), "Finance & Accounts Department");
    assert!(!decision.needs_manual_review());
}

#[tokio::test]
async fn ticket_id_has_the_documented_shape() {
    let engine = engine_with(("Inquiry", 0.8), ("Neutral", 0.8));

    let decision = engine.process("hello, a quick question").await.unwrap();
    let id = decision.ticket_id();

    let parts: Vec<&str> = id.split('-').collect();
    assert_eq!(parts.len(), 4, "unexpected id shape: {id}");
    assert_eq!(parts[0], "TKT");
    assert_eq!(parts[1].len(), 8);
    assert_eq!(parts[2].len(), 6);
    assert_eq!(parts[3].len(), 4);
    assert!(parts[1..].iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
}

#[tokio::test]
async fn decision_serializes_with_the_five_record_groups() {
    let engine = engine_with(("Billing", 0.9), ("Neutral", 0.9));

    let decision = engine.process("please check invoice 4411").await.unwrap();
    let json = serde_json::to_value(&decision).unwrap();

    for group in [
        "ticketProcessing",
        "piiProtection",
        "safetyCheck",
        "mlPredictions",
        "finalDecisions",
    ] {
        assert!(json.get(group).is_some(), "missing group {group}");
    }
    assert_eq!(json["finalDecisions"]["priority"], "Medium");
    assert_eq!(json["ticketProcessing"]["processedText"], "please check invoice 4411");
}
