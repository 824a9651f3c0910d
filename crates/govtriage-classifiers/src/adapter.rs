//! Classification adapter
//!
//! Wraps the two independent label classifiers (category, sentiment) behind
//! a single call. A missing or failing classifier degrades to the
//! Unknown/Neutral zero-confidence pair, which the engine treats as a
//! valid, always-manual-review result rather than an error.

use crate::classifier::LabelClassifier;
use govtriage_core::MlPredictions;
use std::sync::Arc;
use tracing::warn;

/// Uniform predict+confidence interface over the category and sentiment
/// classifiers
#[derive(Clone, Default)]
pub struct ClassificationAdapter {
    category: Option<Arc<dyn LabelClassifier>>,
    sentiment: Option<Arc<dyn LabelClassifier>>,
}

impl ClassificationAdapter {
    /// Create an adapter over both classifiers
    pub fn new(
        category: Arc<dyn LabelClassifier>,
        sentiment: Arc<dyn LabelClassifier>,
    ) -> Self {
        Self {
            category: Some(category),
            sentiment: Some(sentiment),
        }
    }

    /// Create an adapter with no classifiers loaded; every call returns the
    /// degraded pair
    pub fn degraded() -> Self {
        Self::default()
    }

    /// True when one or both classifiers are missing
    pub fn is_degraded(&self) -> bool {
        self.category.is_none() || self.sentiment.is_none()
    }

    /// Run both classifiers over `text`
    pub async fn classify(&self, text: &str) -> MlPredictions {
        let (Some(category), Some(sentiment)) = (&self.category, &self.sentiment) else {
            return MlPredictions::degraded();
        };

        let category = match category.classify(text).await {
            Ok(prediction) => prediction,
            Err(e) => {
                warn!(classifier = category.name(), error = %e, "category classifier failed; degrading");
                return MlPredictions::degraded();
            }
        };

        let sentiment = match sentiment.classify(text).await {
            Ok(prediction) => prediction,
            Err(e) => {
                warn!(classifier = sentiment.name(), error = %e, "sentiment classifier failed; degrading");
                return MlPredictions::degraded();
            }
        };

        MlPredictions {
            category,
            sentiment,
            degraded: false,
        }
    }
}
