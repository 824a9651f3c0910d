//! GovTriage Classifiers
//!
//! Detection and classification components for the ticket pipeline:
//! - PII redaction (national IDs, phone numbers) via regex patterns
//! - Rule-based safety overrides with spam suppression (Aho-Corasick)
//! - The `LabelClassifier` trait and the adapter that wraps the category
//!   and sentiment models behind a uniform predict+confidence interface
//! - Lexicon-based fallback classifiers for running without trained models
//!
//! All components are pure and read-only after construction, so they can be
//! shared across concurrent ticket processing without locking.

pub mod adapter;
pub mod classifier;
pub mod lexicon;
pub mod redactor;
pub mod safety;

pub use adapter::ClassificationAdapter;
pub use classifier::LabelClassifier;
pub use lexicon::{LexiconCategoryClassifier, LexiconSentimentClassifier};
pub use redactor::PiiRedactor;
pub use safety::{SafetyOverrideEngine, SafetyRule, DEFAULT_SAFETY_RULES};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::adapter::ClassificationAdapter;
    pub use crate::classifier::LabelClassifier;
    pub use crate::lexicon::{LexiconCategoryClassifier, LexiconSentimentClassifier};
    pub use crate::redactor::PiiRedactor;
    pub use crate::safety::SafetyOverrideEngine;
}
