//! Lexicon-based fallback classifiers
//!
//! Keyword-lexicon classifiers used when no trained model is wired in.
//! They satisfy the same `LabelClassifier` contract as an external model,
//! so the engine cannot tell them apart.

use crate::classifier::LabelClassifier;
use aho_corasick::AhoCorasick;
use govtriage_core::{Error, LabelPrediction, Result};
use std::collections::BTreeMap;

/// The five ticket categories the pipeline routes on
pub const CATEGORIES: [&str; 5] = [
    "Safety / Emergency",
    "Technical / IT",
    "Billing",
    "Facilities",
    "Inquiry",
];

const CATEGORY_LEXICON: &[(&str, &str)] = &[
    ("Safety / Emergency", "danger"),
    ("Safety / Emergency", "smoke"),
    ("Safety / Emergency", "injured"),
    ("Safety / Emergency", "hazard"),
    ("Safety / Emergency", "evacuate"),
    ("Technical / IT", "website"),
    ("Technical / IT", "portal"),
    ("Technical / IT", "login"),
    ("Technical / IT", "password"),
    ("Technical / IT", "app"),
    ("Technical / IT", "system down"),
    ("Technical / IT", "error message"),
    ("Billing", "invoice"),
    ("Billing", "bill"),
    ("Billing", "payment"),
    ("Billing", "charge"),
    ("Billing", "refund"),
    ("Billing", "fee"),
    ("Facilities", "streetlight"),
    ("Facilities", "pothole"),
    ("Facilities", "garbage"),
    ("Facilities", "water leak"),
    ("Facilities", "maintenance"),
    ("Facilities", "air conditioning"),
    ("Inquiry", "how do i"),
    ("Inquiry", "where can i"),
    ("Inquiry", "what documents"),
    ("Inquiry", "opening hours"),
    ("Inquiry", "information about"),
];

/// Lexicon category classifier over the five service categories
pub struct LexiconCategoryClassifier {
    matcher: AhoCorasick,
    labels: Vec<&'static str>,
}

impl LexiconCategoryClassifier {
    pub fn new() -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(CATEGORY_LEXICON.iter().map(|(_, kw)| *kw))
            .map_err(|e| Error::classifier(format!("failed to build category lexicon: {e}")))?;

        Ok(Self {
            matcher,
            labels: CATEGORY_LEXICON.iter().map(|(label, _)| *label).collect(),
        })
    }
}

#[async_trait::async_trait]
impl LabelClassifier for LexiconCategoryClassifier {
    async fn classify(&self, text: &str) -> Result<LabelPrediction> {
        let mut hits: BTreeMap<&str, u32> = BTreeMap::new();
        for m in self.matcher.find_overlapping_iter(text) {
            *hits.entry(self.labels[m.pattern().as_usize()]).or_insert(0) += 1;
        }

        let total: u32 = hits.values().sum();
        let distribution: BTreeMap<String, f32> = if total == 0 {
            // No lexical evidence: uniform distribution, which lands under
            // any sane confidence threshold and forces manual review.
            CATEGORIES
                .iter()
                .map(|c| (c.to_string(), 1.0 / CATEGORIES.len() as f32))
                .collect()
        } else {
            CATEGORIES
                .iter()
                .map(|c| {
                    let count = hits.get(*c).copied().unwrap_or(0);
                    (c.to_string(), count as f32 / total as f32)
                })
                .collect()
        };

        Ok(LabelPrediction::from_distribution(distribution))
    }

    fn name(&self) -> &str {
        "category-lexicon"
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "thank",
    "great",
    "excellent",
    "appreciate",
    "wonderful",
    "helpful",
    "quick",
    "satisfied",
];

const NEGATIVE_WORDS: &[&str] = &[
    "angry",
    "terrible",
    "unacceptable",
    "frustrated",
    "worst",
    "disappointed",
    "complaint",
    "still not fixed",
    "no response",
];

/// Lexicon sentiment classifier over Negative/Neutral/Positive
pub struct LexiconSentimentClassifier {
    positive: AhoCorasick,
    negative: AhoCorasick,
}

impl LexiconSentimentClassifier {
    pub fn new() -> Result<Self> {
        let positive = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(POSITIVE_WORDS)
            .map_err(|e| Error::classifier(format!("failed to build positive lexicon: {e}")))?;

        let negative = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(NEGATIVE_WORDS)
            .map_err(|e| Error::classifier(format!("failed to build negative lexicon: {e}")))?;

        Ok(Self { positive, negative })
    }
}

#[async_trait::async_trait]
impl LabelClassifier for LexiconSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<LabelPrediction> {
        let positive_hits = self.positive.find_iter(text).count() as f32;
        let negative_hits = self.negative.find_iter(text).count() as f32;

        // Add-one smoothing on the neutral mass so texts with no sentiment
        // words resolve confidently to Neutral.
        let total = positive_hits + negative_hits + 1.0;
        let distribution: BTreeMap<String, f32> = [
            ("Negative".to_string(), negative_hits / total),
            ("Neutral".to_string(), 1.0 / total),
            ("Positive".to_string(), positive_hits / total),
        ]
        .into_iter()
        .collect();

        Ok(LabelPrediction::from_distribution(distribution))
    }

    fn name(&self) -> &str {
        "sentiment-lexicon"
    }
}
