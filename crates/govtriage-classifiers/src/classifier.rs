//! Label classifier trait

use async_trait::async_trait;
use govtriage_core::{LabelPrediction, Result};

/// Trait for label classifiers (category, sentiment)
///
/// Implementations are black boxes trained offline; the engine depends only
/// on this predict+confidence contract. Models are read-only after load and
/// shared across concurrent calls via `Arc`.
#[async_trait]
pub trait LabelClassifier: Send + Sync {
    /// Predict a label with its full posterior distribution
    async fn classify(&self, text: &str) -> Result<LabelPrediction>;

    /// Get the classifier name
    fn name(&self) -> &str;
}
