//! Rule-based safety override engine
//!
//! Scans tickets for emergency-indicator keywords and suggests a
//! category/priority/response-time override that bypasses the ML decision.
//! A ticket stuffed with emergency keywords to jump the queue is treated as
//! likely spam and handed back to normal ML-driven handling.

use aho_corasick::AhoCorasick;
use govtriage_core::{Error, Priority, Result, SafetyFinding, SafetyOverride};

/// More than this many distinct keyword matches marks a ticket as spam
pub const SPAM_THRESHOLD: u32 = 3;

/// One keyword-to-override mapping
///
/// The position of a rule in the table is its precedence: when several
/// keywords match, the first Critical-tagged match wins, otherwise the
/// first match.
#[derive(Debug, Clone, Copy)]
pub struct SafetyRule {
    pub keyword: &'static str,
    pub category: &'static str,
    pub priority: Priority,
    pub response_time: &'static str,
}

const fn rule(
    keyword: &'static str,
    priority: Priority,
    response_time: &'static str,
) -> SafetyRule {
    SafetyRule {
        keyword,
        category: "Safety / Emergency",
        priority,
        response_time,
    }
}

/// Built-in emergency keyword table
pub const DEFAULT_SAFETY_RULES: &[SafetyRule] = &[
    rule("fire", Priority::Critical, "15 minutes"),
    rule("emergency", Priority::Critical, "15 minutes"),
    rule("urgent", Priority::High, "1 hour"),
    rule("accident", Priority::Critical, "15 minutes"),
    rule("trapped", Priority::Critical, "15 minutes"),
    rule("gas leak", Priority::Critical, "15 minutes"),
    rule("electrocution", Priority::Critical, "15 minutes"),
    rule("collapse", Priority::Critical, "15 minutes"),
    rule("explosion", Priority::Critical, "15 minutes"),
    rule("ambulance", Priority::Critical, "15 minutes"),
    rule("police needed", Priority::High, "30 minutes"),
];

/// Keyword-driven emergency detector with spam suppression
pub struct SafetyOverrideEngine {
    matcher: AhoCorasick,
    rules: &'static [SafetyRule],
}

impl SafetyOverrideEngine {
    /// Create an engine over the built-in keyword table
    pub fn new() -> Result<Self> {
        Self::with_rules(DEFAULT_SAFETY_RULES)
    }

    /// Create an engine over a custom keyword table
    pub fn with_rules(rules: &'static [SafetyRule]) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(rules.iter().map(|r| r.keyword))
            .map_err(|e| Error::classifier(format!("failed to build safety matcher: {e}")))?;

        Ok(Self { matcher, rules })
    }

    /// Scan `text` for every keyword's presence (case-insensitive substring
    /// match) and resolve the override suggestion
    pub fn evaluate(&self, text: &str) -> SafetyFinding {
        let mut matched = vec![false; self.rules.len()];
        for m in self.matcher.find_overlapping_iter(text) {
            matched[m.pattern().as_usize()] = true;
        }

        let matched_indices: Vec<usize> = (0..self.rules.len()).filter(|i| matched[*i]).collect();
        let matched_keywords: Vec<String> = matched_indices
            .iter()
            .map(|i| self.rules[*i].keyword.to_string())
            .collect();

        let spam_score = matched_keywords.len() as u32;
        let is_spam = spam_score > SPAM_THRESHOLD;
        let needs_override = !matched_keywords.is_empty();

        let directive = if needs_override && !is_spam {
            // First Critical-tagged match wins, else the first match.
            let chosen = matched_indices
                .iter()
                .find(|i| self.rules[**i].priority == Priority::Critical)
                .or_else(|| matched_indices.first())
                .copied();

            chosen.map(|i| {
                let rule = &self.rules[i];
                SafetyOverride {
                    category: rule.category.to_string(),
                    priority: rule.priority,
                    response_time: rule.response_time.to_string(),
                }
            })
        } else {
            None
        };

        SafetyFinding {
            matched_keywords,
            spam_score,
            is_spam,
            needs_override,
            directive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SafetyOverrideEngine {
        SafetyOverrideEngine::new().unwrap()
    }

    #[test]
    fn no_keywords_is_a_normal_empty_result() {
        let finding = engine().evaluate("My water bill looks wrong this month");

        assert!(!finding.needs_override);
        assert!(!finding.is_spam);
        assert_eq!(finding.spam_score, 0);
        assert!(finding.directive.is_none());
    }

    #[test]
    fn single_critical_keyword_triggers_override() {
        let finding = engine().evaluate("There is a FIRE in the parking garage");

        assert!(finding.needs_override);
        assert_eq!(finding.matched_keywords, vec!["fire"]);
        let directive = finding.directive.unwrap();
        assert_eq!(directive.priority, Priority::Critical);
        assert_eq!(directive.category, "Safety / Emergency");
        assert_eq!(directive.response_time, "15 minutes");
    }

    #[test]
    fn first_critical_match_wins_over_earlier_high_match() {
        // "urgent" (High) precedes "gas leak" (Critical) in the table;
        // Critical still dominates.
        let finding = engine().evaluate("urgent: gas leak in building 7");

        assert_eq!(finding.spam_score, 2);
        let directive = finding.directive.unwrap();
        assert_eq!(directive.priority, Priority::Critical);
        assert_eq!(directive.response_time, "15 minutes");
    }

    #[test]
    fn high_only_matches_use_first_match_in_table_order() {
        let finding = engine().evaluate("police needed, this is urgent");

        // "urgent" sits before "police needed" in the table.
        assert_eq!(finding.matched_keywords, vec!["urgent", "police needed"]);
        let directive = finding.directive.unwrap();
        assert_eq!(directive.priority, Priority::High);
        assert_eq!(directive.response_time, "1 hour");
    }

    #[test]
    fn keyword_stuffing_suppresses_override() {
        let finding = engine().evaluate("fire emergency explosion ambulance trapped");

        assert_eq!(finding.spam_score, 5);
        assert!(finding.is_spam);
        assert!(finding.needs_override);
        assert!(finding.directive.is_none());
    }

    #[test]
    fn exactly_three_keywords_is_not_spam() {
        let finding = engine().evaluate("fire and explosion, send ambulance");

        assert_eq!(finding.spam_score, 3);
        assert!(!finding.is_spam);
        assert!(finding.directive.is_some());
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let finding = engine().evaluate("fire fire fire fire fire");

        assert_eq!(finding.spam_score, 1);
        assert!(!finding.is_spam);
    }
}
