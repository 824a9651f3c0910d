//! PII detection and masking
//!
//! Detects national-ID-like and phone-like substrings and replaces them
//! with placeholders that keep the recognizable prefix shape, so a reviewer
//! can see that an ID or number was present without being exposed to it.

use govtriage_core::{Error, PiiKind, PiiMatch, RedactionResult, Result};
use regex::Regex;

/// National ID: country prefix 784, 4-digit segment, 7-digit segment,
/// 1-digit checksum.
const NATIONAL_ID_PATTERN: &str = r"\b784-\d{4}-\d{7}-\d\b";

/// Phone patterns, checked in order: generic international, local mobile
/// with hyphen, local mobile without hyphen, fully-qualified international.
const PHONE_PATTERNS: [&str; 4] = [
    r"\+\d{10,15}",
    r"\b05\d-\d{7}\b",
    r"\b05\d{8}\b",
    r"\b\+9715\d{8}\b",
];

/// Regex-based PII redactor
pub struct PiiRedactor {
    national_id: Regex,
    phones: Vec<Regex>,
}

impl PiiRedactor {
    /// Create a new redactor, compiling all detection patterns
    pub fn new() -> Result<Self> {
        let national_id = Regex::new(NATIONAL_ID_PATTERN)
            .map_err(|e| Error::classifier(format!("failed to compile national-id regex: {e}")))?;

        let phones = PHONE_PATTERNS
            .iter()
            .map(|p| {
                Regex::new(p)
                    .map_err(|e| Error::classifier(format!("failed to compile phone regex: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { national_id, phones })
    }

    /// Detect and mask all PII in `text`
    ///
    /// ID detection runs against the original text; phone detection runs
    /// against the ID-masked text. Masking is progressive so placeholders
    /// never re-trigger a pattern. Absence of matches is a normal,
    /// empty-list result.
    pub fn redact(&self, text: &str) -> RedactionResult {
        let mut masked = text.to_string();
        let mut national_ids = Vec::new();

        for m in self.national_id.find_iter(text) {
            let original = m.as_str();
            let replacement = mask_national_id(original);
            masked = masked.replace(original, &replacement);
            national_ids.push(PiiMatch {
                original: original.to_string(),
                masked: replacement,
                kind: PiiKind::NationalId,
            });
        }

        // Snapshot after ID masking; each phone pattern matches against
        // this snapshot while replacements accumulate in `masked`.
        let id_masked = masked.clone();
        let mut phone_numbers = Vec::new();

        for regex in &self.phones {
            for m in regex.find_iter(&id_masked) {
                let original = m.as_str();
                let replacement = mask_phone(original);
                masked = masked.replace(original, &replacement);
                phone_numbers.push(PiiMatch {
                    original: original.to_string(),
                    masked: replacement,
                    kind: PiiKind::Phone,
                });
            }
        }

        let has_pii = !national_ids.is_empty() || !phone_numbers.is_empty();

        RedactionResult {
            masked_text: masked,
            original_text: text.to_string(),
            national_ids,
            phone_numbers,
            has_pii,
        }
    }
}

/// Mask the middle 7-digit segment, keeping prefix and checksum segments
fn mask_national_id(id: &str) -> String {
    let parts: Vec<&str> = id.split('-').collect();
    if parts.len() == 4 {
        format!("{}-{}-XXX-{}", parts[0], parts[1], parts[3])
    } else {
        // Pattern guarantees four segments; keep a safe fallback anyway.
        "XXX-XXXX-XXX-X".to_string()
    }
}

/// Mask a phone number to a placeholder that keeps the prefix shape
fn mask_phone(number: &str) -> String {
    if number.starts_with("+971") {
        "+971-XXX-XXXX".to_string()
    } else if number.starts_with("05") {
        "05X-XXX-XXXX".to_string()
    } else {
        "XXX-XXX-XXXX".to_string()
    }
}
