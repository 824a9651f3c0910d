//! Record types for the ticket triage pipeline
//!
//! Every intermediate fact produced while processing a ticket (redaction,
//! safety finding, classifier output) ends up embedded in the final
//! [`TicketDecision`], which is immutable once constructed and serializes
//! as a nested mapping with five top-level groups.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ticket priority, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        };
        f.write_str(s)
    }
}

/// Reason a ticket was flagged for human review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewReason {
    #[serde(rename = "Low confidence")]
    LowConfidence,
    #[serde(rename = "Potential spam")]
    PotentialSpam,
}

impl fmt::Display for ReviewReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::LowConfidence => "Low confidence",
            Self::PotentialSpam => "Potential spam",
        };
        f.write_str(s)
    }
}

/// Kind of PII a redaction pattern detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiKind {
    NationalId,
    Phone,
}

/// A single detected-and-masked PII substring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiiMatch {
    /// The substring as it appeared in the input
    pub original: String,

    /// The placeholder it was replaced with
    pub masked: String,

    /// Which pattern family detected it
    pub kind: PiiKind,
}

/// Output of the PII redactor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionResult {
    /// Input text with every detected PII substring replaced
    pub masked_text: String,

    /// The raw input, retained for operator traceability only
    pub original_text: String,

    /// Detected national-ID substrings
    pub national_ids: Vec<PiiMatch>,

    /// Detected phone-number substrings
    pub phone_numbers: Vec<PiiMatch>,

    /// True iff either detection list is non-empty
    pub has_pii: bool,
}

/// Suggested category/priority/response-time when a safety keyword matched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyOverride {
    pub category: String,
    pub priority: Priority,
    pub response_time: String,
}

/// Output of the safety override engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyFinding {
    /// Distinct matched keywords, in table order
    pub matched_keywords: Vec<String>,

    /// Count of distinct matched keywords
    pub spam_score: u32,

    /// Keyword-stuffed ticket; override suppressed
    pub is_spam: bool,

    /// At least one keyword matched
    pub needs_override: bool,

    /// Populated only when `needs_override && !is_spam`
    #[serde(rename = "override")]
    pub directive: Option<SafetyOverride>,
}

impl SafetyFinding {
    /// True when a non-spam override should replace the ML decision
    pub fn override_applies(&self) -> bool {
        self.directive.is_some()
    }
}

/// A single classifier's prediction over its label set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelPrediction {
    /// Predicted label
    pub label: String,

    /// Max posterior probability across the distribution
    pub confidence: f32,

    /// Full label -> probability distribution
    pub distribution: BTreeMap<String, f32>,
}

impl LabelPrediction {
    /// Build a prediction from a label distribution, taking the argmax as
    /// the predicted label. Ties resolve to the lexicographically first
    /// label.
    pub fn from_distribution(distribution: BTreeMap<String, f32>) -> Self {
        let (label, confidence) = distribution
            .iter()
            .fold((String::new(), -1.0f32), |(best, max), (label, p)| {
                if *p > max {
                    (label.clone(), *p)
                } else {
                    (best, max)
                }
            });
        let confidence = confidence.max(0.0);

        Self {
            label,
            confidence,
            distribution,
        }
    }

    /// Zero-confidence fallback used when a classifier is unavailable
    pub fn degraded(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            confidence: 0.0,
            distribution: BTreeMap::new(),
        }
    }
}

/// The category/sentiment prediction pair for one ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlPredictions {
    pub category: LabelPrediction,
    pub sentiment: LabelPrediction,

    /// True when one or both classifiers were unavailable and the
    /// Unknown/Neutral fallback was used
    pub degraded: bool,
}

impl MlPredictions {
    /// Fallback pair: always forces manual review via zero confidence
    pub fn degraded() -> Self {
        Self {
            category: LabelPrediction::degraded("Unknown"),
            sentiment: LabelPrediction::degraded("Neutral"),
            degraded: true,
        }
    }
}

/// Contact details for a routed department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentContact {
    pub phone: String,
    pub email: String,
    pub supervisor: String,
}

/// Processing metadata for one ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketProcessing {
    pub original_text: String,
    pub processed_text: String,
    pub processing_time_seconds: f64,

    /// RFC 3339 UTC timestamp of decision construction
    pub timestamp: String,
}

/// The resolved routing and review decision for one ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalDecision {
    pub category: String,
    pub sentiment: String,
    pub priority: Priority,
    pub department: String,
    pub department_contact: DepartmentContact,
    pub response_time: String,

    /// min(category confidence, sentiment confidence)
    pub confidence_score: f32,
    pub needs_manual_review: bool,
    pub manual_review_reason: Option<ReviewReason>,
    pub safety_override_applied: bool,
    pub action_items: Vec<String>,
    pub ticket_id: String,
}

/// The complete, immutable decision record for one processed ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDecision {
    pub ticket_processing: TicketProcessing,
    pub pii_protection: RedactionResult,
    pub safety_check: SafetyFinding,
    pub ml_predictions: MlPredictions,
    pub final_decisions: FinalDecision,
}

impl TicketDecision {
    pub fn ticket_id(&self) -> &str {
        &self.final_decisions.ticket_id
    }

    pub fn category(&self) -> &str {
        &self.final_decisions.category
    }

    pub fn priority(&self) -> Priority {
        self.final_decisions.priority
    }

    pub fn department(&self) -> &str {
        &self.final_decisions.department
    }

    pub fn confidence_score(&self) -> f32 {
        self.final_decisions.confidence_score
    }

    pub fn needs_manual_review(&self) -> bool {
        self.final_decisions.needs_manual_review
    }
}
